//! Sequential multi-reel allocation driver (§4.8): feeds reels one at a
//! time in the order given, carrying forward whatever cables still have
//! residual length. No global optimization or reel reordering is
//! performed — that is a Non-goal, not a missing feature.

use crate::cable::{CableId, CableTable};
use crate::reel::Reel;
use crate::track_selector::Objective;
use crate::units::EPS;
use crate::winder;
use std::collections::HashMap;
use uom::si::length::meter;

/// Output of a full multi-reel allocation run (§6): the reels that ended
/// up with at least one layer, and every cable whose residual length still
/// exceeds `ε` once every reel has had a turn.
#[derive(Debug)]
pub struct AllocationOutput {
    pub reels_used: Vec<Reel>,
    pub cables_unallocated: Vec<CableId>,
    /// Residual length remaining per cable, in metres, including cables
    /// that were fully allocated (residual `0`).
    pub residual_m: HashMap<CableId, f64>,
}

/// Wind `reels` in order against `cables`, handing each reel whatever
/// cables still have residual length once the previous reel is done.
///
/// `reels` with no placements at all are dropped from
/// [`AllocationOutput::reels_used`] (per the Output Structure in §6); any
/// layers they do get keep their placements even if the cable they belong
/// to ends up only partially allocated.
pub fn allocate(reels: Vec<Reel>, cables: &CableTable, objective: Objective) -> AllocationOutput {
    let mut residual_m: HashMap<CableId, f64> = cables
        .ids()
        .map(|id| (id, cables.get(id).required_length().get::<meter>()))
        .collect();

    let mut reels_used = Vec::with_capacity(reels.len());
    for mut reel in reels {
        winder::wind_reel(&mut reel, cables, &mut residual_m, objective);
        if !reel.layers().is_empty() {
            reels_used.push(reel);
        }
    }

    let cables_unallocated: Vec<CableId> = cables
        .ids()
        .filter(|id| residual_m.get(id).copied().unwrap_or(0.0) > EPS)
        .collect();

    AllocationOutput {
        reels_used,
        cables_unallocated,
        residual_m,
    }
}
