//! Options methods for CabinetEngine

use std::path::Path;

use super::CabinetEngine;
use crate::error::CabinetError;
use crate::options::Options;

impl CabinetEngine {
    /// Replace options and rebuild the cabinet from them.
    ///
    /// Drawers and folders return to rest and the interaction token is
    /// dropped. The camera keeps its current pose and eases back to the new
    /// overview, so the change does not cut.
    pub fn set_options(&mut self, new: Options) {
        let camera = *self.rig.camera();
        let observer = std::mem::replace(
            &mut self.observer,
            Box::new(super::observer::NullObserver),
        );
        *self = Self::with_observer(new, observer);

        let cam = self.rig.camera_mut();
        cam.eye = camera.eye;
        cam.target = camera.target;
        cam.aspect = camera.aspect;

        let overview = self.router.overview();
        let _ = self.issue_goal(overview);
    }

    /// Load a TOML preset from `path` and apply it.
    ///
    /// # Errors
    ///
    /// Returns the [`CabinetError`] from [`Options::load`]; the engine is
    /// left untouched.
    pub fn load_preset(&mut self, path: &Path) -> Result<(), CabinetError> {
        let options = Options::load(path)?;
        log::info!("loaded preset {}", path.display());
        self.set_options(options);
        Ok(())
    }
}
