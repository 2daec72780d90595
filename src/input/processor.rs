//! Converts picked input events into cabinet commands.
//!
//! The `InputProcessor` owns the transient hover state and the key-binding
//! map. It is the only thing that sits between the embedding application's
//! picking and the engine's [`execute`](crate::CabinetEngine::execute)
//! method.

use super::event::{InputEvent, PickTarget};
use crate::engine::command::CabinetCommand;
use crate::options::KeybindingOptions;
use crate::scene::ItemId;

/// Converts [`InputEvent`]s into [`CabinetCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(InputEvent::Click(target)) {
///     let _ = engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Folder currently under the pointer.
    hovered: Option<ItemId>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            hovered: None,
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings (e.g. after loading a preset).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Folder currently hovered, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<CabinetCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process an input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CabinetCommand> {
        match event {
            InputEvent::Click(target) => Self::click_command(target),
            InputEvent::HoverEnter(target) => self.hover_enter(target),
            InputEvent::HoverLeave(target) => self.hover_leave(target),
            InputEvent::KeyPressed(key) => self.handle_key_press(&key),
        }
    }

    fn click_command(target: PickTarget) -> Option<CabinetCommand> {
        match target {
            PickTarget::None => None,
            PickTarget::Drawer(index) => {
                Some(CabinetCommand::ToggleDrawer { index })
            }
            PickTarget::Folder(id) => Some(CabinetCommand::ToggleFolder { id }),
        }
    }

    fn hover_enter(&mut self, target: PickTarget) -> Option<CabinetCommand> {
        let id = target.as_folder()?;
        if self.hovered == Some(id) {
            return None;
        }
        self.hovered = Some(id);
        Some(CabinetCommand::HoverFolder { id, hovered: true })
    }

    fn hover_leave(&mut self, target: PickTarget) -> Option<CabinetCommand> {
        let id = target.as_folder()?;
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        Some(CabinetCommand::HoverFolder { id, hovered: false })
    }
}
