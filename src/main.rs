//! Headless cabinet session.
//!
//! Plays a scripted tour through the engine and logs the camera. Pass an
//! options TOML path to load a preset, and `--realtime` to pace frames
//! against the wall clock instead of stepping them back to back.

use std::path::Path;
use std::time::Duration;

use cabinet::engine::observer::ViewObserver;
use cabinet::input::{InputEvent, InputProcessor, PickTarget};
use cabinet::options::Options;
use cabinet::scene::{ItemId, SceneNodes};
use cabinet::util::frame_timing::FrameTiming;
use cabinet::CabinetEngine;
use glam::Vec3;

/// Frame rate the scripted session is stepped at.
const TARGET_FPS: u32 = 60;

/// Frames to let each step play out before the next input.
const STEP_FRAMES: usize = 120;

struct LogObserver;

impl ViewObserver for LogObserver {
    fn on_container_toggle(&mut self, target: Vec3, position: Vec3) {
        log::info!("view: drawer (target {target}, position {position})");
    }

    fn on_item_activate(
        &mut self,
        target: Vec3,
        position: Vec3,
        live_point: Option<Vec3>,
    ) {
        log::info!(
            "view: folder (target {target}, position {position}, live \
             {live_point:?})"
        );
    }
}

/// A short tour: open a drawer, hover and open a folder, step back out with
/// Escape, then cycle drawers with Tab.
fn script() -> Vec<InputEvent> {
    let folder = PickTarget::Folder(ItemId::new(1, 0));
    vec![
        InputEvent::Click(PickTarget::Drawer(1)),
        InputEvent::HoverEnter(folder),
        InputEvent::Click(folder),
        InputEvent::Click(PickTarget::Drawer(0)),
        InputEvent::HoverLeave(folder),
        InputEvent::KeyPressed("Escape".into()),
        InputEvent::KeyPressed("Escape".into()),
        InputEvent::KeyPressed("Tab".into()),
        InputEvent::KeyPressed("Tab".into()),
        InputEvent::KeyPressed("Escape".into()),
    ]
}

fn main() {
    env_logger::init();

    let mut realtime = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            path = Some(arg);
        }
    }

    let options = match path {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut engine = CabinetEngine::with_observer(options, Box::new(LogObserver));
    let mut scene = SceneNodes::from_layout(engine.layout());
    let mut timing = FrameTiming::new(TARGET_FPS);

    for event in script() {
        log::info!("input: {event:?}");
        if let Some(cmd) = input.handle_event(event) {
            if !engine.execute(cmd) {
                log::info!("  ignored: {cmd:?}");
            }
        }

        for frame in 0..STEP_FRAMES {
            let dt = if realtime {
                while !timing.should_render() {
                    std::thread::sleep(Duration::from_millis(1));
                }
                timing.end_frame()
            } else {
                timing.nominal_delta()
            };
            let report = engine.tick(dt, &mut scene);
            if frame % 30 == 0 || frame + 1 == STEP_FRAMES {
                let camera = engine.rig().camera();
                log::info!(
                    "  frame {frame:3}: eye {} target {} tracking {} ({:.0} fps)",
                    camera.eye,
                    camera.target,
                    report.tracking,
                    timing.fps()
                );
            }
            for id in &report.released {
                log::info!("  folder {id} released");
            }
        }
    }

    log::info!("session idle: {}", engine.is_idle());
}
