//! Command dispatch for CabinetEngine

use glam::Vec3;

use super::command::CabinetCommand;
use super::CabinetEngine;
use crate::animation::camera_transition::ViewGoal;
use crate::interaction::{
    ContainerChange, ItemChange, ResetChange, ViewEvent,
};
use crate::scene::ItemId;

impl CabinetEngine {
    /// Execute a command.
    ///
    /// Returns `true` if the command changed interaction state. Rejected
    /// commands (unknown targets, or a folder holding the interaction
    /// token) are logged at debug and otherwise ignored.
    pub fn execute(&mut self, cmd: CabinetCommand) -> bool {
        match cmd {
            CabinetCommand::ToggleDrawer { index } => self.toggle_drawer(index),
            CabinetCommand::NextDrawer => {
                let count = self.layout().drawer_count();
                if count == 0 {
                    return false;
                }
                let next = self
                    .gate
                    .open_container()
                    .map_or(0, |open| (open + 1) % count);
                self.toggle_drawer(next)
            }
            CabinetCommand::ToggleFolder { id } => self.toggle_folder(id),
            CabinetCommand::HoverFolder { id, hovered } => {
                self.hover_folder(id, hovered)
            }
            CabinetCommand::ResetView => self.reset_view(),
        }
    }

    fn toggle_drawer(&mut self, index: usize) -> bool {
        if index >= self.layout().drawer_count() {
            log::debug!("drawer {index} does not exist");
            return false;
        }
        let Some(change) = self.gate.toggle_container(index) else {
            log::debug!("drawer {index} toggle ignored: a folder is active");
            return false;
        };

        match change {
            ContainerChange::Opened { index } => {
                log::info!("drawer {index} opened");
            }
            ContainerChange::Closed { index } => {
                log::info!("drawer {index} closed");
            }
            ContainerChange::Switched { from, to } => {
                log::info!("drawer {from} closed, drawer {to} opened");
            }
        }
        self.apply_open_container(change.open_container());
        true
    }

    fn toggle_folder(&mut self, id: ItemId) -> bool {
        if self.folder(id).is_none() {
            log::debug!("folder {id} does not exist");
            return false;
        }
        if self.gate.open_container() != Some(id.drawer) {
            // Folders are only pickable inside the open drawer; a click
            // reaching one anyway still routes the camera to its own drawer.
            log::debug!(
                "folder {id} activated outside the open drawer {:?}",
                self.gate.open_container()
            );
        }
        let Some(change) = self.gate.activate_item(id) else {
            log::debug!("folder {id} ignored: another folder is active");
            return false;
        };

        match change {
            ItemChange::Activated(id) | ItemChange::Reactivated(id) => {
                log::info!("folder {id} activated");
                self.open_folder(id);
            }
            ItemChange::Deactivated(id) => {
                log::info!("folder {id} deactivated");
                self.close_folder(id);
            }
        }
        true
    }

    fn hover_folder(&mut self, id: ItemId, hovered: bool) -> bool {
        let lift = if hovered {
            self.options().animation.hover_offset
        } else {
            0.0
        };
        let Some(slot) = self.folder_mut(id) else {
            log::debug!("folder {id} does not exist");
            return false;
        };
        slot.hover.set_goal(lift);
        true
    }

    fn reset_view(&mut self) -> bool {
        match self.gate.reset() {
            Some(ResetChange::ItemDeactivated(id)) => {
                log::info!("folder {id} deactivated");
                self.close_folder(id);
                true
            }
            Some(ResetChange::ContainerClosed(index)) => {
                log::info!("drawer {index} closed");
                self.apply_open_container(None);
                true
            }
            None => {
                log::debug!("reset ignored: nothing to step back from");
                false
            }
        }
    }

    /// Retarget drawer slides and the camera for a new open drawer.
    fn apply_open_container(&mut self, open: Option<usize>) {
        let distance = self.options().animation.drawer_open_distance;
        for (i, slide) in self.drawer_slides.iter_mut().enumerate() {
            slide.set_goal(if open == Some(i) { distance } else { 0.0 });
        }
        let event = open.map_or(ViewEvent::Overview, |index| {
            ViewEvent::Container { index }
        });
        let goal = self.router.compute_view(event);
        if self.issue_goal(goal) {
            self.observer.on_container_toggle(goal.target, goal.position);
        }
    }

    fn open_folder(&mut self, id: ItemId) {
        let Some(slot) = self.folder_mut(id) else {
            return;
        };
        let _ = slot.motion.activate();
        let live_point = slot.live_point.or_else(|| self.rest_point(id));

        let goal = self.router.compute_view(ViewEvent::Item {
            container: id.drawer,
            live_point,
        });
        if self.issue_goal(goal) {
            self.observer
                .on_item_activate(goal.target, goal.position, live_point);
        }
    }

    fn close_folder(&mut self, id: ItemId) {
        let Some(slot) = self.folder_mut(id) else {
            return;
        };
        let _ = slot.motion.deactivate();

        let goal = self.router.compute_view(ViewEvent::Container {
            index: self.gate.open_container().unwrap_or(id.drawer),
        });
        if self.issue_goal(goal) {
            self.observer.on_container_toggle(goal.target, goal.position);
        }
    }

    /// World position of folder `id` at its current rendered pose.
    fn rest_point(&self, id: ItemId) -> Option<Vec3> {
        let slot = self.folder(id)?;
        let origin = self.drawer_world(id.drawer)?;
        Some(
            origin
                + Vec3::new(0.0, slot.hover.value(), 0.0)
                + slot.motion.rendered_pose().position,
        )
    }

    /// Send `goal` to the rig. Invalid goals are logged and dropped, the
    /// previous goal stays in effect.
    pub(crate) fn issue_goal(&mut self, goal: ViewGoal) -> bool {
        match self.rig.set_goal(goal) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNodes;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn folder_outside_open_drawer_returns_to_its_drawer_view() {
        let mut engine = CabinetEngine::new();
        let mut scene = SceneNodes::from_layout(engine.layout());
        let id = ItemId::new(2, 0);

        assert!(engine.execute(CabinetCommand::ToggleFolder { id }));
        assert_eq!(engine.gate().open_container(), None);
        for _ in 0..60 {
            let _ = engine.tick(DT, &mut scene);
        }
        assert!(engine.execute(CabinetCommand::ToggleFolder { id }));

        let goal = engine
            .router()
            .compute_view(ViewEvent::Container { index: 2 });
        assert_eq!(engine.rig().transition().goal(), Some(goal));
        assert_eq!(engine.gate().open_container(), None);
    }

    #[test]
    fn unknown_targets_are_rejected() {
        let mut engine = CabinetEngine::new();
        assert!(!engine.execute(CabinetCommand::ToggleDrawer { index: 9 }));
        assert!(!engine.execute(CabinetCommand::ToggleFolder {
            id: ItemId::new(0, 9)
        }));
        assert!(!engine.execute(CabinetCommand::HoverFolder {
            id: ItemId::new(9, 0),
            hovered: true
        }));
        assert!(!engine.gate().is_locked());
    }
}
