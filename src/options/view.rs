use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Offsets used by the view router to derive drawer and folder views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Views", inline)]
#[serde(default)]
pub struct ViewOptions {
    /// Drawer view target, relative to `(0, drawer_y, 0)`.
    #[schemars(skip)]
    pub container_target_offset: [f32; 3],
    /// Drawer view camera position, relative to `(0, drawer_y, 0)`.
    #[schemars(skip)]
    pub container_position_offset: [f32; 3],
    /// Folder view target when no live point is known, relative to the
    /// drawer view target.
    #[schemars(skip)]
    pub item_target_offset: [f32; 3],
    /// Folder view camera position, relative to the drawer view position.
    #[schemars(skip)]
    pub item_position_offset: [f32; 3],
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            container_target_offset: [0.0, -0.2, 0.0],
            container_position_offset: [0.0, 0.4, 0.5],
            item_target_offset: [0.0, 0.55, 0.2],
            item_position_offset: [0.0, 0.25, 0.45],
        }
    }
}
