//! Notifications for the embedding application.

use glam::Vec3;

/// Receives the camera goal of every accepted user action.
///
/// Called at most once per action, after the goal has been issued. Both
/// methods are mandatory; use [`NullObserver`] when nothing listens.
pub trait ViewObserver {
    /// A drawer opened or closed, or a folder was sent back into its drawer.
    fn on_container_toggle(&mut self, target: Vec3, position: Vec3);

    /// A folder was activated. `live_point` is its world position at the
    /// moment of activation.
    fn on_item_activate(
        &mut self,
        target: Vec3,
        position: Vec3,
        live_point: Option<Vec3>,
    );
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ViewObserver for NullObserver {
    fn on_container_toggle(&mut self, _target: Vec3, _position: Vec3) {}

    fn on_item_activate(
        &mut self,
        _target: Vec3,
        _position: Vec3,
        _live_point: Option<Vec3>,
    ) {
    }
}
