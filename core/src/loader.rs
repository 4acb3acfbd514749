//! Typed CSV row records for reels and cables (§4.9), and the total-parsing
//! conversions that enforce the Input Invariants (§6) before anything
//! reaches the allocation engine.
//!
//! These types carry no I/O of their own (opening the file and driving a
//! `csv::Reader` is the CLI's job); they are the boundary where a loosely
//! typed row becomes a [`crate::reel::Reel`] or [`crate::cable::Cable`], or
//! an [`InvalidInput`] naming exactly which row and field was rejected.
//! Optional fields are explicit `Option<f64>` here, never a silent zero
//! read off a duck-typed record.

use crate::cable::{CableId, CableTable};
use crate::errors::{CableError, InvalidInput, ReelError};
use crate::reel::Reel;
use crate::units::DEFAULT_PACKING_FACTOR;
use serde::Deserialize;
use uom::si::f64::{Length, Mass};
use uom::si::length::meter;
use uom::si::mass::kilogram;

/// One row of the reels CSV input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReelRow {
    pub id: String,
    pub outer_diameter_m: f64,
    pub inner_diameter_m: f64,
    pub flange_width_m: f64,
    pub max_mass_kg: f64,
    /// Packing factor in `(0, 1]`. Absent in the CSV means
    /// [`DEFAULT_PACKING_FACTOR`] applies; this is decided here, at the
    /// loader boundary, not by a silent default buried in the core.
    pub packing_factor: Option<f64>,
}

impl TryFrom<ReelRow> for Reel {
    type Error = ReelError;

    fn try_from(row: ReelRow) -> Result<Self, Self::Error> {
        Reel::new(
            row.id,
            Length::new::<meter>(row.inner_diameter_m),
            Length::new::<meter>(row.outer_diameter_m),
            Length::new::<meter>(row.flange_width_m),
            Mass::new::<kilogram>(row.max_mass_kg),
            row.packing_factor.unwrap_or(DEFAULT_PACKING_FACTOR),
        )
    }
}

/// One row of the cables CSV input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CableRow {
    pub id: String,
    pub diameter_m: f64,
    pub required_length_m: f64,
    pub linear_mass_kg_per_m: f64,
    pub min_bend_radius_m: f64,
}

/// Validate and push one [`CableRow`] into `table`, returning its freshly
/// assigned handle.
fn push_cable_row(table: &mut CableTable, row: CableRow) -> Result<CableId, CableError> {
    table.push(
        row.id,
        Length::new::<meter>(row.diameter_m),
        Length::new::<meter>(row.required_length_m),
        row.linear_mass_kg_per_m,
        Length::new::<meter>(row.min_bend_radius_m),
    )
}

/// Convert every row into a [`Reel`], in order, failing on the first row
/// that violates an Input Invariant.
pub fn load_reels(rows: Vec<ReelRow>) -> Result<Vec<Reel>, InvalidInput> {
    rows.into_iter()
        .map(|row| {
            let id = row.id.clone();
            Reel::try_from(row).map_err(|source| InvalidInput::Reel { id, source })
        })
        .collect()
}

/// Validate and push every row into `table`, in order, failing on the
/// first row that violates an Input Invariant.
pub fn load_cables(table: &mut CableTable, rows: Vec<CableRow>) -> Result<Vec<CableId>, InvalidInput> {
    rows.into_iter()
        .map(|row| {
            let id = row.id.clone();
            push_cable_row(table, row).map_err(|source| InvalidInput::Cable { id, source })
        })
        .collect()
}
