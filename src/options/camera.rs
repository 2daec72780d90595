use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters and the default overview pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial viewport aspect ratio.
    #[schemars(skip)]
    pub aspect: f32,
    /// Overview orbit target (roughly the cabinet centre).
    #[schemars(skip)]
    pub overview_target: [f32; 3],
    /// Overview camera position.
    #[schemars(skip)]
    pub overview_position: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 100.0,
            aspect: 16.0 / 9.0,
            overview_target: [0.0, 0.75, -0.25],
            overview_position: [0.0, 0.75, 2.0],
        }
    }
}
