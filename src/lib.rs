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

//! 2D skeletal-formula depiction engine.
//!
//! Molrender turns molecular graph snapshots (atoms, bonds,
//! substructure groups with 2D coordinates already assigned) into
//! ordered, resolution-independent drawing primitives. It owns the
//! visual conventions of skeletal formulas: carbon suppression,
//! implicit-hydrogen labels, double-bond side selection, stereo wedges
//! and hashes, highlight halos, and group brackets. It deliberately
//! does not own chemistry perception or rasterization; rings, stereo
//! descriptors, and hydrogen counts arrive on the model, and the
//! primitive list is replayed by whatever surface the caller targets.
//!
//! # Key entry points
//!
//! - [`renderer::MoleculeRenderer`] - the rendering engine
//! - [`model::Molecule`] - the input molecule snapshot
//! - [`options::RendererOptions`] - TOML-backed rendering options
//! - [`primitives::Primitive`] - the output drawing commands
//!
//! # Architecture
//!
//! A render builds a [`transform::ViewportTransform`] fitting the
//! molecule's bounding region into the caller's viewport, then runs
//! three pure layout passes in order: atoms (labels, attachments,
//! occlusion radii), bonds (depiction geometry clipped against those
//! radii), and brackets. Passes share nothing mutable, so one renderer
//! can serve concurrent renders by reference.

pub mod color;
pub mod error;
pub mod geometry;
mod layout;
pub mod model;
pub mod options;
pub mod primitives;
pub mod renderer;
pub mod tables;
pub mod text;
pub mod transform;
