//! Platform-agnostic input events.
//!
//! The embedding application resolves pointer positions against the scene
//! (including occlusion) and hands the cabinet already-picked targets.

use crate::scene::ItemId;

/// What lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickTarget {
    /// Background or cabinet frame.
    #[default]
    None,
    /// Drawer body or handle, by index.
    Drawer(usize),
    /// A folder.
    Folder(ItemId),
}

impl PickTarget {
    /// Whether nothing interactive was hit.
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// The folder id, if a folder was hit.
    #[must_use]
    pub fn as_folder(self) -> Option<ItemId> {
        match self {
            Self::Folder(id) => Some(id),
            _ => None,
        }
    }
}

/// Input events consumed by [`InputProcessor`](super::InputProcessor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary click on a picked target.
    Click(PickTarget),
    /// Pointer started hovering a target.
    HoverEnter(PickTarget),
    /// Pointer stopped hovering a target.
    HoverLeave(PickTarget),
    /// Physical key pressed, e.g. `"Escape"`.
    KeyPressed(String),
}
