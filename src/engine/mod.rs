//! Cabinet engine: owns the interaction gate, the view router, the camera
//! rig and every drawer and folder animator.

mod animation;
/// Command vocabulary.
pub mod command;
mod input;
/// Observer notifications.
pub mod observer;
mod options;

use glam::Vec3;

pub use self::animation::FrameReport;

use self::observer::{NullObserver, ViewObserver};
use crate::animation::follow::ScalarFollower;
use crate::animation::phased::{PhasedMotion, PhasedMotionConfig};
use crate::camera::CameraRig;
use crate::interaction::{InteractionGate, ViewRouter};
use crate::options::Options;
use crate::scene::{CabinetLayout, ItemId};

/// Animation state of one folder.
#[derive(Debug, Clone)]
pub(crate) struct FolderSlot {
    pub(crate) id: ItemId,
    pub(crate) motion: PhasedMotion,
    pub(crate) hover: ScalarFollower,
    /// Live world position from the last tick, while not at rest.
    pub(crate) live_point: Option<Vec3>,
}

/// Drives the whole cabinet: drawers, folders and the camera.
///
/// # Frame loop
///
/// Each frame, forward user actions with [`execute`](Self::execute) and then
/// call [`tick`](Self::tick) once with the frame delta and the scene handles
/// to write into. Everything runs on the caller's thread; there is no
/// background work.
///
/// # Interaction
///
/// One drawer can be open at a time. Inside it, one folder at a time can be
/// active; while a folder is active or on its way back, drawer toggles and
/// other folders are ignored.
pub struct CabinetEngine {
    /// Derived drawer and folder geometry.
    layout: CabinetLayout,
    /// Open drawer and folder token.
    pub(crate) gate: InteractionGate,
    /// Camera goals per view.
    pub(crate) router: ViewRouter,
    /// Camera, transition and look-at tracker.
    pub(crate) rig: CameraRig,
    /// Slide-out distance per drawer.
    pub(crate) drawer_slides: Vec<ScalarFollower>,
    /// Folder animation state, in layout order.
    pub(crate) folders: Vec<FolderSlot>,
    /// Receives camera goals of accepted actions.
    pub(crate) observer: Box<dyn ViewObserver>,
    /// Options the engine was built from.
    options: Options,
}

impl CabinetEngine {
    /// Engine with default options and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Engine built from `options`, with no observer.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self::with_observer(options, Box::new(NullObserver))
    }

    /// Engine built from `options`, notifying `observer`.
    #[must_use]
    pub fn with_observer(
        options: Options,
        observer: Box<dyn ViewObserver>,
    ) -> Self {
        let layout = CabinetLayout::new(&options.layout, &options.colors);
        let router = ViewRouter::new(
            layout.drawer_heights(),
            &options.camera,
            &options.view,
        );
        let anim = &options.animation;

        let drawer_slides = layout
            .drawers()
            .iter()
            .map(|_| {
                ScalarFollower::new(
                    0.0,
                    anim.drawer_slide_factor,
                    anim.snap_epsilon,
                )
            })
            .collect();

        let config = PhasedMotionConfig::from(anim);
        let folders = layout
            .folders()
            .iter()
            .map(|f| FolderSlot {
                id: f.id,
                motion: PhasedMotion::new(f.rest, config),
                hover: ScalarFollower::new(
                    0.0,
                    anim.hover_factor,
                    anim.snap_epsilon,
                ),
                live_point: None,
            })
            .collect();

        log::debug!(
            "cabinet: {} drawers, {} folders",
            layout.drawer_count(),
            layout.folders().len()
        );

        Self {
            rig: CameraRig::from_options(&options),
            layout,
            gate: InteractionGate::new(),
            router,
            drawer_slides,
            folders,
            observer,
            options,
        }
    }

    /// Derived cabinet layout.
    #[must_use]
    pub fn layout(&self) -> &CabinetLayout {
        &self.layout
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Camera rig (camera, transition, tracker).
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Interaction gate state.
    #[must_use]
    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    /// Camera goal router.
    #[must_use]
    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    /// Current slide-out distance of drawer `index`.
    #[must_use]
    pub fn drawer_slide(&self, index: usize) -> Option<f32> {
        self.drawer_slides.get(index).map(ScalarFollower::value)
    }

    /// Animation controller of folder `id`.
    #[must_use]
    pub fn folder_motion(&self, id: ItemId) -> Option<&PhasedMotion> {
        self.folder(id).map(|slot| &slot.motion)
    }

    /// Live world position of folder `id` from the last tick.
    #[must_use]
    pub fn folder_live_point(&self, id: ItemId) -> Option<Vec3> {
        self.folder(id).and_then(|slot| slot.live_point)
    }

    /// Whether nothing is moving: camera at rest, drawers and hovers settled,
    /// folders fully open or closed.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.rig.is_animating()
            && !self.rig.is_tracking()
            && self.drawer_slides.iter().all(ScalarFollower::is_settled)
            && self.folders.iter().all(|slot| {
                slot.hover.is_settled() && slot.motion.is_at_rest()
            })
    }

    /// World origin of drawer `index` including its slide.
    pub(crate) fn drawer_world(&self, index: usize) -> Option<Vec3> {
        let drawer = self.layout.drawer(index)?;
        let slide = self.drawer_slide(index).unwrap_or(0.0);
        Some(drawer.origin + Vec3::new(0.0, 0.0, slide))
    }

    pub(crate) fn folder(&self, id: ItemId) -> Option<&FolderSlot> {
        self.folders.iter().find(|slot| slot.id == id)
    }

    pub(crate) fn folder_mut(&mut self, id: ItemId) -> Option<&mut FolderSlot> {
        self.folders.iter_mut().find(|slot| slot.id == id)
    }
}

impl Default for CabinetEngine {
    fn default() -> Self {
        Self::new()
    }
}
