//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a click, a hover, a key
//! press or a programmatic call, is represented as a `CabinetCommand`.
//! Consumers construct commands and pass them to
//! [`CabinetEngine::execute`](super::CabinetEngine::execute).

use crate::scene::ItemId;

/// A discrete operation the engine can perform.
///
/// ```ignore
/// let _ = engine.execute(CabinetCommand::ToggleDrawer { index: 1 });
/// let _ = engine.execute(CabinetCommand::ResetView);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinetCommand {
    // ── Drawers ─────────────────────────────────────────────────────
    /// Open drawer `index` (closing any other) or close it if open.
    ToggleDrawer {
        /// Drawer index, bottom drawer is 0.
        index: usize,
    },

    /// Open the drawer above the open one, wrapping to the bottom.
    NextDrawer,

    // ── Folders ─────────────────────────────────────────────────────
    /// Activate folder `id`, or send it back if it is already active.
    ToggleFolder {
        /// Folder to toggle.
        id: ItemId,
    },

    /// Raise or lower a folder under the pointer.
    HoverFolder {
        /// Folder under (or leaving) the pointer.
        id: ItemId,
        /// Whether the pointer is over the folder.
        hovered: bool,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Step back one level: active folder, then open drawer.
    ResetView,
}
