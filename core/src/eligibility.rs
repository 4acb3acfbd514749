//! Per-cable, per-layer eligibility and track-count limits (§4.3).
//!
//! This is the step between the constraint evaluator and the track
//! selector: for a given radial cursor, decide whether each cable may
//! contribute to the next layer at all, and if so, how many tracks it could
//! take in isolation (before the knapsack has to share the flange width
//! across cables).

use crate::cable::{Cable, CableId};
use crate::constraints;
use crate::reel::Reel;
use crate::units::{self, EPS};

/// A cable that survived eligibility, with everything the track selector
/// needs to build candidate tracks for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    pub cable_id: CableId,
    /// Width-wise pitch between tracks of this cable, in metres.
    pub step_m: f64,
    /// Length of a single track, in metres.
    pub circumference_m: f64,
    /// Maximum number of tracks this cable may contribute to this layer.
    pub max_tracks: u32,
    /// Mid-radius this cable would sit at in this layer, in metres.
    pub mid_radius_m: f64,
    /// Physical diameter of the cable, in metres.
    pub diameter_m: f64,
    /// Cable's remaining length before this layer, in metres (used by the
    /// `widthThenBalance` objective to break ties).
    pub remaining_length_m: f64,
}

/// Evaluate whether `cable` is eligible to be placed in a layer starting at
/// base radius `r_base_m`, and if so, the maximum number of tracks it could
/// take (ignoring what other cables in the same layer might need).
///
/// Returns `None` if the cable is ineligible for any of the reasons in
/// §4.3: it would bust the outer diameter, its minimum bend radius isn't
/// satisfied at this layer's mid-radius, the per-track circumference or
/// step degenerates to (near) zero, or its length/mass/volume bound caps
/// the track count at zero.
pub fn eligible(
    reel: &Reel,
    cable: &Cable,
    r_base_m: f64,
    remaining_length_m: f64,
) -> Option<Item> {
    let diameter_m = cable.diameter().get::<uom::si::length::meter>();

    if !constraints::fits_outer(reel, r_base_m, diameter_m) {
        return None;
    }

    let mid_radius_m = r_base_m + diameter_m / 2.0;
    if !constraints::radius_ok(mid_radius_m, cable) {
        return None;
    }

    let circumference_m = units::circumference(mid_radius_m);
    let step_m = units::step(diameter_m);
    if circumference_m <= EPS || step_m <= EPS {
        return None;
    }

    let by_remaining = (remaining_length_m / circumference_m).floor();
    let by_mass = (constraints::max_length_by_mass(reel, cable) / circumference_m).floor();
    let by_volume = (constraints::max_length_by_volume(reel, cable) / circumference_m).floor();

    let max_tracks = by_remaining.min(by_mass).min(by_volume);
    if max_tracks < 1.0 {
        return None;
    }

    Some(Item {
        cable_id: cable.id(),
        step_m,
        circumference_m,
        max_tracks: max_tracks as u32,
        mid_radius_m,
        diameter_m,
        remaining_length_m,
    })
}
