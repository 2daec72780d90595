use serde::{Deserialize, Serialize};

use crate::engine::command::CabinetCommand;

/// Cabinet actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_view = "Escape"
/// next_drawer = "Tab"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Step back toward the overview (close the folder, then the drawer).
    ResetView,
    /// Open the drawer above the current one, wrapping to the bottom.
    NextDrawer,
}

impl KeyAction {
    /// Convert to the corresponding parameterless [`CabinetCommand`].
    #[must_use]
    pub fn to_command(self) -> CabinetCommand {
        match self {
            Self::ResetView => CabinetCommand::ResetView,
            Self::NextDrawer => CabinetCommand::NextDrawer,
        }
    }
}
