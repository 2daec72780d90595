//! Interaction arbitration and camera goal routing.

pub mod gate;
pub mod router;

pub use gate::{
    ContainerChange, GateSnapshot, InteractionGate, ItemChange, ItemToken,
    ResetChange,
};
pub use router::{ViewEvent, ViewRouter};
