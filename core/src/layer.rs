//! [`Layer`] and [`Placement`]: one radial shell wound on a reel, and one
//! cable's contribution to it.

use crate::cable::{CableId, CableTable};
use crate::units::EPS;
use uom::si::f64::Length;
use uom::si::length::meter;

/// Which side of the flange a placement's tracks started from. Purely
/// informational: it alternates per layer for report readability and never
/// affects feasibility or optimality (see the Open Questions in
/// `SPEC_FULL.md`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One cable's contribution to a [`Layer`]: a number of width-wise tracks
/// (turns) at a common mid-radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    cable_id: CableId,
    tracks: u32,
    mid_radius: Length,
    step: Length,
    track_circumference: Length,
    allocated_length: Length,
    side: Side,
    sequence: u64,
}

impl Placement {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        cable_id: CableId,
        tracks: u32,
        mid_radius: Length,
        step: Length,
        track_circumference: Length,
        side: Side,
        sequence: u64,
    ) -> Self {
        Placement {
            cable_id,
            tracks,
            mid_radius,
            step,
            track_circumference,
            allocated_length: track_circumference * f64::from(tracks),
            side,
            sequence,
        }
    }

    pub fn cable_id(&self) -> CableId {
        self.cable_id
    }

    /// Number of width-wise tracks (turns) this cable occupies in the
    /// layer.
    pub fn tracks(&self) -> u32 {
        self.tracks
    }

    /// Radius at the centerline of the cable (`D_base/2 + d/2`).
    pub fn mid_radius(&self) -> Length {
        self.mid_radius
    }

    /// Width-wise pitch between adjacent tracks of this cable.
    pub fn step(&self) -> Length {
        self.step
    }

    /// Length of a single track: `2 * pi * mid_radius`.
    pub fn track_circumference(&self) -> Length {
        self.track_circumference
    }

    /// Total length of cable consumed by this placement: `tracks *
    /// track_circumference`.
    pub fn allocated_length(&self) -> Length {
        self.allocated_length
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Monotonically increasing order across the whole reel, for stable
    /// report ordering.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Mass contributed by this placement: `linear_mass * allocated_length`.
    pub fn mass_contribution_ton(&self, linear_mass_kg_per_m: f64) -> f64 {
        linear_mass_kg_per_m * self.allocated_length.get::<meter>() / 1000.0
    }
}

/// One radial shell of winding: a set of [`Placement`]s all sharing the
/// same base diameter.
#[derive(Clone, Debug)]
pub struct Layer {
    base_diameter: Length,
    placements: Vec<Placement>,
    thickness: Length,
}

impl Layer {
    /// Start a fresh, empty layer at the given base diameter. Only
    /// [`crate::layer_registrar`] should call this; everything else
    /// receives layers already filled in.
    pub(crate) fn new(base_diameter: Length) -> Self {
        Layer {
            base_diameter,
            placements: Vec::new(),
            thickness: Length::new::<meter>(0.0),
        }
    }

    /// Base diameter of the layer: `DI + 2 * sum of previous thicknesses`.
    pub fn base_diameter(&self) -> Length {
        self.base_diameter
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Radial thickness of the layer: the largest physical diameter among
    /// its placements (zero for an empty layer).
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub(crate) fn push(&mut self, placement: Placement, diameter: Length) {
        if diameter > self.thickness {
            self.thickness = diameter;
        }
        self.placements.push(placement);
    }

    /// Used-width (`sum of min(tracks, floor(W/step)) * step`) and the
    /// corresponding capacity-respecting occupancy fraction, given the
    /// reel's flange width.
    pub fn used_width(&self, flange_width_m: f64) -> f64 {
        self.placements
            .iter()
            .map(|p| {
                let step_m = p.step.get::<meter>();
                if step_m <= EPS {
                    return 0.0;
                }
                let capacity = (flange_width_m / step_m).floor() as u32;
                f64::from(p.tracks.min(capacity)) * step_m
            })
            .sum()
    }

    /// `true` if every placement respects its cable's minimum bend radius,
    /// the layer's thickness equals the largest placed diameter, and the
    /// used width fits within the flange (all up to [`EPS`]).
    pub fn invariants_hold(&self, cables: &CableTable, flange_width_m: f64) -> bool {
        let mut max_diameter_m = 0.0f64;
        for placement in &self.placements {
            let cable = cables.get(placement.cable_id);
            let r_min_m = cable.min_bend_radius().get::<meter>();
            if placement.mid_radius.get::<meter>() + EPS < r_min_m {
                return false;
            }
            max_diameter_m = max_diameter_m.max(cable.diameter().get::<meter>());
        }
        if (self.thickness.get::<meter>() - max_diameter_m).abs() > EPS {
            return false;
        }
        self.used_width(flange_width_m) <= flange_width_m + EPS
    }
}

#[cfg(test)]
mod tests;
