//! Maps interaction events to camera goals.

use glam::Vec3;

use crate::animation::camera_transition::ViewGoal;
use crate::options::{CameraOptions, ViewOptions};

/// What the camera should frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Whole cabinet.
    Overview,
    /// An open drawer.
    Container {
        /// Drawer index.
        index: usize,
    },
    /// An active folder inside drawer `container`.
    Item {
        /// Drawer holding the folder.
        container: usize,
        /// The folder's live world position, when already known.
        live_point: Option<Vec3>,
    },
}

/// Computes [`ViewGoal`]s from drawer heights and configured offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRouter {
    overview: ViewGoal,
    drawer_heights: Vec<f32>,
    container_target_offset: Vec3,
    container_position_offset: Vec3,
    item_target_offset: Vec3,
    item_position_offset: Vec3,
}

impl ViewRouter {
    /// Router for drawers centred at `drawer_heights` (bottom to top).
    #[must_use]
    pub fn new(
        drawer_heights: Vec<f32>,
        camera: &CameraOptions,
        view: &ViewOptions,
    ) -> Self {
        Self {
            overview: ViewGoal::new(
                Vec3::from(camera.overview_target),
                Vec3::from(camera.overview_position),
            ),
            drawer_heights,
            container_target_offset: Vec3::from(view.container_target_offset),
            container_position_offset: Vec3::from(
                view.container_position_offset,
            ),
            item_target_offset: Vec3::from(view.item_target_offset),
            item_position_offset: Vec3::from(view.item_position_offset),
        }
    }

    /// Goal for `event`. Total: unknown drawer indices clamp to the top
    /// drawer, and a cabinet with no drawers frames the overview.
    #[must_use]
    pub fn compute_view(&self, event: ViewEvent) -> ViewGoal {
        match event {
            ViewEvent::Overview => self.overview,
            ViewEvent::Container { index } => self
                .container_view(index)
                .unwrap_or(self.overview),
            ViewEvent::Item {
                container,
                live_point,
            } => {
                let Some(base) = self.container_view(container) else {
                    return self.overview;
                };
                let target = live_point
                    .filter(|p| p.is_finite())
                    .unwrap_or(base.target + self.item_target_offset);
                ViewGoal::new(target, base.position + self.item_position_offset)
            }
        }
    }

    /// The overview goal.
    #[must_use]
    pub fn overview(&self) -> ViewGoal {
        self.overview
    }

    fn container_view(&self, index: usize) -> Option<ViewGoal> {
        let y = self
            .drawer_heights
            .get(index)
            .or_else(|| self.drawer_heights.last())?;
        let centre = Vec3::new(0.0, *y, 0.0);
        Some(ViewGoal::new(
            centre + self.container_target_offset,
            centre + self.container_position_offset,
        ))
    }
}
