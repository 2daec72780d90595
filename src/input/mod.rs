//! Input handling: event types and the input processor that converts picked
//! pointer and key events into cabinet commands.

/// Platform-agnostic input events.
pub mod event;
mod keyboard;
/// Converts events into cabinet commands.
pub mod processor;

pub use event::{InputEvent, PickTarget};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
