use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cabinet, drawer and folder dimensions, in metres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Overall cabinet width.
    #[schemars(skip)]
    pub cabinet_width: f32,
    /// Overall cabinet height.
    #[schemars(skip)]
    pub cabinet_height: f32,
    /// Overall cabinet depth.
    #[schemars(skip)]
    pub cabinet_depth: f32,
    /// Frame panel thickness.
    #[schemars(skip)]
    pub panel_thickness: f32,
    /// Space under the bottom drawer.
    #[schemars(skip)]
    pub bottom_padding: f32,
    /// Space over the top drawer.
    #[schemars(skip)]
    pub top_padding: f32,
    /// Separator height between drawers.
    #[schemars(skip)]
    pub separator_height: f32,
    /// Drawer body depth.
    #[schemars(skip)]
    pub drawer_depth: f32,
    /// Drawer labels, bottom to top. Also fixes the drawer count.
    #[schemars(title = "Drawer Labels")]
    pub drawer_labels: Vec<String>,
    /// Folders filed in each drawer.
    #[schemars(title = "Folders per Drawer", range(min = 0, max = 12))]
    pub folders_per_drawer: usize,
    /// Folder body width.
    #[schemars(skip)]
    pub folder_width: f32,
    /// Folder body height.
    #[schemars(skip)]
    pub folder_height: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            cabinet_width: 0.8,
            cabinet_height: 1.5,
            cabinet_depth: 0.6,
            panel_thickness: 0.05,
            bottom_padding: 0.1,
            top_padding: 0.05,
            separator_height: 0.02,
            drawer_depth: 0.6,
            drawer_labels: vec![
                "Misc.".to_owned(),
                "Stuff".to_owned(),
                "Things".to_owned(),
            ],
            folders_per_drawer: 3,
            folder_width: 0.6,
            folder_height: 0.3,
        }
    }
}
