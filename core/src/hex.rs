//! Legacy hexagonal (honeycomb) placement, kept only for input compatibility
//! with callers that still select
//! [`crate::AllocationMode::LegacyHexagonal`]. The radial winder in
//! [`crate::winder`] is authoritative; this module is gated behind the
//! `legacy-hex` Cargo feature so a caller has to opt in.

use crate::cable::{Cable, CableId, CableTable};
use crate::constraints;
use crate::reel::Reel;
use crate::units::{self, EPS, EPS_DIAMETER, HEX_PITCH_FACTOR};
use uom::si::f64::Length;
use uom::si::length::meter;

/// One cable placed as a single circle at `(x, y)` on a honeycomb row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexPlacement {
    cable_id: CableId,
    x: Length,
    y: Length,
    diameter: Length,
    row: usize,
}

impl HexPlacement {
    pub fn cable_id(&self) -> CableId {
        self.cable_id
    }

    pub fn x(&self) -> Length {
        self.x
    }

    pub fn y(&self) -> Length {
        self.y
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Distance from the spool axis, used for the bend-radius check.
    fn radius_m(&self) -> f64 {
        (self.x.get::<meter>().powi(2) + self.y.get::<meter>().powi(2)).sqrt()
    }
}

/// One honeycomb row: a vertical cursor position and the pitch that opened
/// it (odd rows are aligned, even rows shifted by `d/2`).
struct Row {
    y_m: f64,
    pitch_m: f64,
}

/// Result of a single-reel legacy placement pass: the placements made and,
/// for every cable that still has residual length `> ε`, how much is left.
pub struct HexResult {
    pub placements: Vec<HexPlacement>,
    pub residual_m: std::collections::HashMap<CableId, f64>,
}

/// Place cables as single circles on `reel`, scanning from `start_x_sign`
/// (`-1.0` for the left edge, `1.0` for the right) inward.
///
/// `order` fixes the cable visiting order; `residual_m` must already be
/// initialized (typically to each cable's required length) and is consumed
/// turn-by-turn: each placed circle represents one wrap, whose length is
/// that wrap's circumference at its own radius.
pub fn place_hexagonal(
    reel: &Reel,
    cables: &CableTable,
    order: &[CableId],
    residual_m: &mut std::collections::HashMap<CableId, f64>,
    start_x_sign: f64,
) -> HexResult {
    let flange_width_m = reel.flange_width().get::<meter>();
    let de_m = reel.outer_diameter().get::<meter>();
    let mut rows: Vec<Row> = Vec::new();
    let mut placements: Vec<HexPlacement> = Vec::new();

    for &cable_id in order {
        let cable = cables.get(cable_id);
        let diameter_m = cable.effective_diameter().get::<meter>();
        let step_m = units::step(diameter_m);
        if step_m <= EPS {
            continue;
        }

        loop {
            let remaining = *residual_m.get(&cable_id).unwrap_or(&0.0);
            if remaining <= EPS {
                break;
            }

            let Some((row_index, x_m, y_m)) =
                find_candidate(&rows, &placements, diameter_m, flange_width_m, de_m, start_x_sign)
            else {
                break;
            };

            let placement = HexPlacement {
                cable_id,
                x: Length::new::<meter>(x_m),
                y: Length::new::<meter>(y_m),
                diameter: cable.diameter(),
                row: row_index,
            };
            if !radius_ok(&placement, cable) {
                // This row/candidate can never work for this cable again at
                // this radius; stop trying rather than loop forever.
                break;
            }

            let wrap_length_m = units::circumference(placement.radius_m());
            placements.push(placement);
            if let Some(r) = residual_m.get_mut(&cable_id) {
                *r -= wrap_length_m;
            }
        }
    }

    HexResult {
        placements,
        residual_m: residual_m.clone(),
    }
}

fn radius_ok(placement: &HexPlacement, cable: &Cable) -> bool {
    placement.radius_m() + EPS >= cable.min_bend_radius().get::<meter>()
}

/// Find the next free candidate for a circle of `diameter_m`, scanning
/// existing rows from the chosen side inward before opening a new row.
#[allow(clippy::too_many_arguments)]
fn find_candidate(
    rows: &[Row],
    placements: &[HexPlacement],
    diameter_m: f64,
    flange_width_m: f64,
    de_m: f64,
    start_x_sign: f64,
) -> Option<(usize, f64, f64)> {
    for (row_index, row) in rows.iter().enumerate() {
        if let Some(x_m) = scan_row(
            row_index,
            row.y_m,
            placements,
            diameter_m,
            flange_width_m,
            start_x_sign,
        ) {
            return Some((row_index, x_m, row.y_m));
        }
    }

    // No existing row worked; open a new one if there's still outer-diameter
    // headroom for it.
    let previous_y_m = rows.last().map_or(0.0, |r| r.y_m);
    let pitch_m = HEX_PITCH_FACTOR * diameter_m;
    let new_y_m = previous_y_m + pitch_m;
    if 2.0 * new_y_m.abs() + diameter_m > de_m + EPS {
        return None;
    }
    let row_index = rows.len();
    scan_row(
        row_index,
        new_y_m,
        placements,
        diameter_m,
        flange_width_m,
        start_x_sign,
    )
    .map(|x_m| (row_index, x_m, new_y_m))
}

/// Scan a single row for the first free `x` position, honoring the odd/even
/// row shift and the honeycomb horizontal step.
fn scan_row(
    row_index: usize,
    y_m: f64,
    placements: &[HexPlacement],
    diameter_m: f64,
    flange_width_m: f64,
    start_x_sign: f64,
) -> Option<f64> {
    let step_m = units::step(diameter_m);
    let shift_m = if row_index % 2 == 1 { diameter_m / 2.0 } else { 0.0 };
    let max_slots = (flange_width_m / step_m).ceil() as i64 + 2;

    for k in 0..=max_slots {
        let x_m = start_x_sign * (k as f64 * step_m) + shift_m * start_x_sign;
        if !constraints::fits_width(x_m, diameter_m, flange_width_m) {
            continue;
        }
        if collides(x_m, y_m, diameter_m, placements) {
            continue;
        }
        return Some(x_m);
    }
    None
}

/// AABB prune, then an exact squared-distance check against every
/// placement within `±3 * d_base` of this row (the base-diameter window
/// the legacy algorithm limits collision checks to).
fn collides(x_m: f64, y_m: f64, diameter_m: f64, placements: &[HexPlacement]) -> bool {
    for other in placements {
        let ox_m = other.x.get::<meter>();
        let oy_m = other.y.get::<meter>();
        let od_m = other.diameter.get::<meter>();

        if (oy_m - y_m).abs() > 3.0 * diameter_m.max(od_m) + EPS_DIAMETER {
            continue;
        }
        let min_center_distance_m = (diameter_m + od_m) / 2.0;
        if (ox_m - x_m).abs() > min_center_distance_m + 2.0 * diameter_m.max(od_m) {
            continue;
        }
        let dx = ox_m - x_m;
        let dy = oy_m - y_m;
        if dx * dx + dy * dy < min_center_distance_m * min_center_distance_m - EPS {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests;
