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
// Complexity limits
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

//! Camera-mode and pointer-targeting core for an interactive 3D desk
//! scene.
//!
//! Deskview switches a single live camera between named viewing modes
//! (a fixed overview, a scripted close-up on a screen, and a free orbit
//! debug camera) with eased transitions, detects which screen the pointer
//! is aiming at, and keeps a 2D overlay pinned to the selected screen's
//! projected position.
//!
//! # Key entry points
//!
//! - [`ViewerEngine`] - composes everything and runs the frame loop
//! - [`camera::CameraRig`] - mode registry and transition state machine
//! - [`picking::PointerTargeting`] - hover/select over interactive targets
//! - [`overlay::ScreenSync`] - overlay sizing, centring and clamping
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Rendering, asset loading and overlay content stay with the host. The
//! engine reaches them through three narrow traits: [`scene::Scene`] for
//! world positions, ray hits and material swaps, [`overlay::Overlay`] for
//! the 2D element, and [`util::clock::Clock`] for time. Each frame runs
//! transition tick, then live camera update, then overlay sync, on one
//! thread.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod overlay;
pub mod picking;
pub mod scene;
pub mod util;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{ViewerCommand, ViewerEngine};
pub use error::ViewerError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
