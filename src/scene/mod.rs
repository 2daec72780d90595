//! Cabinet scene: derived layout and the handles through which animated
//! transforms reach the embedding scene graph.

pub mod handles;
pub mod layout;

pub use handles::{NodeId, SceneHandles, SceneNodes, Transform};
pub use layout::{CabinetLayout, DrawerSpec, FolderSpec, ItemId};
