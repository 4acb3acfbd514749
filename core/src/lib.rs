//! Allocation engine for winding cables onto reels in concentric radial
//! layers.
//!
//! Given a reel and a set of cables with required lengths, [`winder`]
//! builds successive [`layer::Layer`]s — each the result of an
//! [`eligibility`] pass followed by a [`track_selector`] bounded knapsack
//! over the flange width — until the reel is full or every cable is
//! exhausted. [`driver::allocate`] repeats this over an ordered list of
//! reels, handing each reel whatever cables the previous one left with
//! residual length.
//!
//! This crate is pure computation: no file or network I/O happens here.
//! [`loader`] defines the typed CSV row records a caller deserializes with
//! its own `csv::Reader`, and [`report`] the structures a caller
//! serializes for output; reading and writing bytes is the binary
//! crate's job.

pub mod cable;
pub mod constraints;
pub mod driver;
pub mod eligibility;
pub mod errors;
#[cfg(feature = "legacy-hex")]
pub mod hex;
pub mod layer;
pub mod layer_registrar;
pub mod loader;
pub mod mode;
pub mod reel;
pub mod report;
pub mod track_selector;
pub mod units;
pub mod winder;

pub use cable::{Cable, CableId, CableTable};
pub use driver::{allocate, AllocationOutput};
pub use errors::{CableError, InvalidInput, ReelError};
pub use layer::{Layer, Placement, Side};
pub use mode::AllocationMode;
pub use reel::Reel;
pub use track_selector::Objective;
