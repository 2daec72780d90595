//! End-to-end scenarios driving the engine the way an embedding application
//! would: commands in, one tick per frame, transforms out.
#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use cabinet::animation::MotionState;
use cabinet::engine::command::CabinetCommand;
use cabinet::engine::observer::ViewObserver;
use cabinet::input::{InputEvent, InputProcessor, PickTarget};
use cabinet::interaction::ViewEvent;
use cabinet::options::Options;
use cabinet::scene::{ItemId, NodeId, SceneNodes};
use cabinet::CabinetEngine;
use glam::Vec3;

const DT: f64 = 1.0 / 60.0;

fn setup() -> (CabinetEngine, SceneNodes) {
    let engine = CabinetEngine::new();
    let scene = SceneNodes::from_layout(engine.layout());
    (engine, scene)
}

fn run(engine: &mut CabinetEngine, scene: &mut SceneNodes, frames: usize) {
    for _ in 0..frames {
        let _ = engine.tick(DT, scene);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Container(Vec3, Vec3),
    Item(Vec3, Vec3, Option<Vec3>),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Notice>>>);

impl ViewObserver for Recorder {
    fn on_container_toggle(&mut self, target: Vec3, position: Vec3) {
        self.0.borrow_mut().push(Notice::Container(target, position));
    }

    fn on_item_activate(
        &mut self,
        target: Vec3,
        position: Vec3,
        live_point: Option<Vec3>,
    ) {
        self.0
            .borrow_mut()
            .push(Notice::Item(target, position, live_point));
    }
}

#[test]
fn overview_to_drawer_converges_in_transition_time() {
    let (mut engine, mut scene) = setup();
    let start = *engine.rig().camera();
    assert_eq!(start.eye, Vec3::new(0.0, 0.75, 2.0));
    assert_eq!(start.target, Vec3::new(0.0, 0.75, -0.25));

    assert!(engine.execute(CabinetCommand::ToggleDrawer { index: 1 }));
    let goal = engine
        .router()
        .compute_view(ViewEvent::Container { index: 1 });

    run(&mut engine, &mut scene, 90);
    let camera = engine.rig().camera();
    assert!(camera.eye.distance(goal.position) < 1e-3);
    assert!(camera.target.distance(goal.target) < 1e-3);

    run(&mut engine, &mut scene, 1);
    assert!(!engine.rig().is_animating());
    assert_eq!(engine.rig().camera().eye, goal.position);
}

#[test]
fn retargeting_mid_flight_does_not_jump() {
    let (mut engine, mut scene) = setup();
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });

    let mut last = engine.rig().camera().eye;
    let mut max_step = 0.0_f32;
    for frame in 0..240 {
        if frame == 30 {
            assert!(engine.execute(CabinetCommand::ToggleDrawer { index: 2 }));
        }
        if frame == 60 {
            assert!(engine.execute(CabinetCommand::ResetView));
        }
        let _ = engine.tick(DT, &mut scene);
        let eye = engine.rig().camera().eye;
        max_step = max_step.max(eye.distance(last));
        last = eye;
    }
    assert!(max_step < 0.05, "camera jumped {max_step}");
    assert_eq!(last, Vec3::new(0.0, 0.75, 2.0));
}

#[test]
fn twenty_ticks_reach_the_lift_keyframe() {
    let (mut engine, mut scene) = setup();
    let id = ItemId::new(1, 1);
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
    assert!(engine.execute(CabinetCommand::ToggleFolder { id }));

    run(&mut engine, &mut scene, 20);
    let motion = engine.folder_motion(id).unwrap();
    assert!((motion.progress() - 0.4).abs() < 1e-5);
    let up = motion.keyframes().up;
    assert!(motion.target_pose().distance(&up) < 1e-3);
}

#[test]
fn drawer_toggle_is_ignored_while_a_folder_is_active() {
    let (mut engine, mut scene) = setup();
    let id = ItemId::new(0, 2);
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 0 });
    let _ = engine.execute(CabinetCommand::ToggleFolder { id });
    run(&mut engine, &mut scene, 10);

    assert!(!engine.execute(CabinetCommand::ToggleDrawer { index: 0 }));
    assert!(!engine.execute(CabinetCommand::ToggleDrawer { index: 2 }));
    assert!(!engine.execute(CabinetCommand::NextDrawer));
    assert!(!engine.execute(CabinetCommand::ToggleFolder {
        id: ItemId::new(0, 0)
    }));
    assert_eq!(engine.gate().open_container(), Some(0));

    run(&mut engine, &mut scene, 120);
    assert_eq!(engine.drawer_slide(0), Some(0.35));
    assert_eq!(engine.drawer_slide(2), Some(0.0));
}

#[test]
fn camera_target_tracks_the_rising_folder() {
    let (mut engine, mut scene) = setup();
    let id = ItemId::new(1, 0);
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
    run(&mut engine, &mut scene, 100);
    let _ = engine.execute(CabinetCommand::ToggleFolder { id });

    let mut gaps = Vec::new();
    for _ in 0..180 {
        let report = engine.tick(DT, &mut scene);
        assert!(report.tracking);
        let live = engine.folder_live_point(id).unwrap();
        gaps.push(engine.rig().camera().target.distance(live));
    }
    // The folder stops moving once open; the damped target then closes in.
    assert!(gaps[179] < 1e-3);
    assert!(gaps[179] < gaps[60]);
    assert!(engine.folder_motion(id).unwrap().state() == MotionState::Open);
}

#[test]
fn camera_target_follows_the_closing_folder_then_eases_home() {
    let (mut engine, mut scene) = setup();
    let id = ItemId::new(1, 0);
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
    run(&mut engine, &mut scene, 100);
    let _ = engine.execute(CabinetCommand::ToggleFolder { id });
    run(&mut engine, &mut scene, 80);

    assert!(engine.execute(CabinetCommand::ToggleFolder { id }));
    let mut tracked_frames = 0;
    let mut released = false;
    for _ in 0..120 {
        let report = engine.tick(DT, &mut scene);
        if engine.folder_live_point(id).is_some() {
            assert!(report.tracking);
            tracked_frames += 1;
        }
        if report.released.contains(&id) {
            assert!(!report.tracking);
            released = true;
            break;
        }
    }
    assert!(released);
    assert!(tracked_frames >= 40, "tracked {tracked_frames} frames");
    assert!(engine.rig().is_animating());

    let goal = engine
        .router()
        .compute_view(ViewEvent::Container { index: 1 });
    let mut last = engine.rig().camera().target;
    let mut max_step = 0.0_f32;
    for _ in 0..100 {
        let report = engine.tick(DT, &mut scene);
        assert!(!report.tracking);
        let target = engine.rig().camera().target;
        max_step = max_step.max(target.distance(last));
        last = target;
    }
    assert!(max_step < 0.02, "target jumped {max_step}");
    assert_eq!(engine.rig().camera().target, goal.target);
    assert_eq!(engine.rig().camera().eye, goal.position);
}

#[test]
fn folder_closes_and_camera_returns_to_drawer() {
    let (mut engine, mut scene) = setup();
    let id = ItemId::new(2, 1);
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 2 });
    let _ = engine.execute(CabinetCommand::ToggleFolder { id });
    run(&mut engine, &mut scene, 80);

    assert!(engine.execute(CabinetCommand::ResetView));
    run(&mut engine, &mut scene, 200);

    assert!(!engine.gate().is_locked());
    let goal = engine
        .router()
        .compute_view(ViewEvent::Container { index: 2 });
    let camera = engine.rig().camera();
    assert_eq!(camera.eye, goal.position);
    assert_eq!(camera.target, goal.target);

    let rest = engine.layout().folder(id).unwrap().rest;
    let node = scene.get(NodeId::Folder(id)).unwrap();
    assert_eq!(node.position, rest);
    assert_eq!(node.rotation, Vec3::ZERO);
    assert!(engine.is_idle());
}

#[test]
fn observer_hears_each_accepted_action_once() {
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.0);
    let mut engine =
        CabinetEngine::with_observer(Options::default(), Box::new(recorder));
    let mut scene = SceneNodes::from_layout(engine.layout());

    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 0 });
    run(&mut engine, &mut scene, 5);
    let _ = engine.execute(CabinetCommand::ToggleFolder {
        id: ItemId::new(0, 0),
    });
    let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
    let _ = engine.execute(CabinetCommand::HoverFolder {
        id: ItemId::new(0, 1),
        hovered: true,
    });

    let notices = log.borrow();
    assert_eq!(notices.len(), 2);
    let drawer = engine
        .router()
        .compute_view(ViewEvent::Container { index: 0 });
    assert_eq!(
        notices[0],
        Notice::Container(drawer.target, drawer.position)
    );
    assert!(matches!(
        notices[1],
        Notice::Item(target, _, Some(live)) if target == live
    ));
}

#[test]
fn scripted_input_session() {
    let (mut engine, mut scene) = setup();
    let mut input = InputProcessor::new();
    let folder = PickTarget::Folder(ItemId::new(1, 2));

    let mut feed = |engine: &mut CabinetEngine, event: InputEvent| {
        input
            .handle_event(event)
            .is_some_and(|cmd| engine.execute(cmd))
    };

    assert!(feed(&mut engine, InputEvent::Click(PickTarget::Drawer(1))));
    run(&mut engine, &mut scene, 60);
    assert!(feed(&mut engine, InputEvent::HoverEnter(folder)));
    assert!(feed(&mut engine, InputEvent::Click(folder)));
    run(&mut engine, &mut scene, 60);
    assert!(!feed(&mut engine, InputEvent::Click(PickTarget::Drawer(0))));
    assert!(feed(&mut engine, InputEvent::KeyPressed("Escape".into())));
    assert!(!feed(&mut engine, InputEvent::KeyPressed("Escape".into())));
    run(&mut engine, &mut scene, 120);
    assert!(feed(&mut engine, InputEvent::KeyPressed("Escape".into())));
    assert!(!feed(&mut engine, InputEvent::KeyPressed("KeyZ".into())));
    assert_eq!(engine.gate().open_container(), None);
}
