//! Frame scheduler for CabinetEngine

use glam::Vec3;

use super::CabinetEngine;
use crate::scene::{ItemId, NodeId, SceneHandles, Transform};

/// Summary of one engine frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    /// The camera target followed a live folder this frame.
    pub tracking: bool,
    /// The camera transition moved the camera this frame.
    pub camera_animating: bool,
    /// Folders that finished closing and released the interaction token.
    pub released: Vec<ItemId>,
    /// Scene nodes that were missing and skipped.
    pub skipped: usize,
}

impl CabinetEngine {
    /// Advance every animation by one frame and write the results to
    /// `scene`.
    ///
    /// Order within a frame: gate snapshot, drawer and hover followers,
    /// folder motions, look-at tracking, camera transition, scene writes,
    /// then token release for folders that finished closing.
    ///
    /// The token holder's live point feeds the look-at tracker while it
    /// opens, stays open and closes. On the frame it comes back to rest the
    /// point disappears and the camera eases its target onto the current
    /// goal.
    pub fn tick<S: SceneHandles + ?Sized>(
        &mut self,
        dt: f64,
        scene: &mut S,
    ) -> FrameReport {
        let snapshot = self.gate.snapshot();

        for slide in &mut self.drawer_slides {
            let _ = slide.tick();
        }
        for slot in &mut self.folders {
            let _ = slot.hover.tick();
        }

        let mut tracked = None;
        let mut finished = Vec::new();
        for i in 0..self.folders.len() {
            let id = self.folders[i].id;
            let lift = Vec3::new(0.0, self.folders[i].hover.value(), 0.0);
            let origin = self.drawer_world(id.drawer).unwrap_or(Vec3::ZERO)
                + lift;

            let slot = &mut self.folders[i];
            let tick = slot.motion.tick(origin);
            slot.live_point = tick.live.map(|live| live.position);

            // The holder is tracked in both directions until it is back at
            // rest and stops reporting a live point.
            if snapshot.token_holder() == Some(id) {
                tracked = slot.live_point;
            }
            if tick.finished_closing {
                finished.push(id);
            }
        }

        let rig = self.rig.tick(dt, tracked);

        let skipped = self.write_scene(scene);

        let mut released = Vec::new();
        for id in finished {
            if self.gate.finish_closing(id) {
                log::info!("folder {id} back in drawer {}", id.drawer);
                released.push(id);
            }
        }

        FrameReport {
            tracking: rig.tracking,
            camera_animating: rig.animating,
            released,
            skipped,
        }
    }

    /// Write drawer and folder transforms. Returns how many nodes were
    /// missing.
    fn write_scene<S: SceneHandles + ?Sized>(&self, scene: &mut S) -> usize {
        let mut skipped = 0;

        for drawer in self.layout().drawers() {
            let node = NodeId::Drawer(drawer.index);
            let Some(transform) = scene.transform_mut(node) else {
                log::trace!("no scene node for {node:?}, skipping");
                skipped += 1;
                continue;
            };
            let slide = self.drawer_slide(drawer.index).unwrap_or(0.0);
            *transform =
                Transform::at(drawer.origin + Vec3::new(0.0, 0.0, slide));
        }

        for slot in &self.folders {
            let node = NodeId::Folder(slot.id);
            let Some(transform) = scene.transform_mut(node) else {
                log::trace!("no scene node for {node:?}, skipping");
                skipped += 1;
                continue;
            };
            let pose = slot.motion.rendered_pose();
            *transform = Transform {
                position: pose.position
                    + Vec3::new(0.0, slot.hover.value(), 0.0),
                rotation: pose.rotation(),
            };
        }

        skipped
    }
}
