// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Transform animation and view routing for an interactive filing cabinet.
//!
//! The cabinet holds a stack of drawers, each with a row of folders. Clicking
//! a drawer slides it out and flies the camera to it; clicking a folder lifts
//! it out of the drawer, turns it toward the viewer and keeps the camera's
//! look-at point on it while it moves. Everything is frame-driven and
//! renderer-agnostic: the crate computes transforms and camera poses, the
//! embedding application draws them.
//!
//! # Key entry points
//!
//! - [`CabinetEngine`] - owns all animation state; `execute` commands, then
//!   `tick` once per frame
//! - [`scene::SceneHandles`] - where animated transforms are written
//! - [`input::InputProcessor`] - turns picked clicks, hovers and key presses
//!   into [`engine::command::CabinetCommand`]s
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Interaction goes through a single gate: one drawer open at a time, and at
//! most one folder holding the interaction token. Camera goals come from a
//! router keyed on what was opened. Per frame the engine runs the drawer and
//! hover followers, the phased folder motions, the look-at tracker and the
//! eased camera transition, in that order, and then writes the scene.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod interaction;
pub mod options;
pub mod scene;
pub mod util;

pub use engine::CabinetEngine;
pub use error::CabinetError;
