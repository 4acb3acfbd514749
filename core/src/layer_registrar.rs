//! Records a track-selector choice onto a fresh [`Layer`] (§4.5).

use crate::cable::{CableId, CableTable};
use crate::eligibility::Item;
use crate::layer::{Layer, Placement, Side};
use std::collections::{BTreeMap, HashMap};
use uom::si::f64::Length;
use uom::si::length::meter;

/// Register the chosen `{cable -> tracks}` mapping onto `layer`, using
/// `items` (keyed by cable) for each cable's per-track geometry.
///
/// `choices` is a [`BTreeMap`] rather than a hash map so iterating it —
/// which fixes both the sequence numbers and the left/right side
/// alternation below — is reproducible across runs instead of depending on
/// a hash map's randomized iteration order.
///
/// `starting_side` is the side the first placement starts from; it
/// alternates per placement purely for reporting and has no effect on
/// feasibility. `next_sequence` is called once per placement to assign a
/// reel-wide, monotonically increasing sequence number.
///
/// Returns the layer's resulting thickness (zero if nothing was placed).
pub fn register(
    layer: &mut Layer,
    cables: &CableTable,
    items: &HashMap<CableId, Item>,
    choices: &BTreeMap<CableId, u32>,
    starting_side: Side,
    mut next_sequence: impl FnMut() -> u64,
) -> Length {
    let mut side = starting_side;
    for (&cable_id, &tracks) in choices {
        if tracks == 0 {
            continue;
        }
        let item = items
            .get(&cable_id)
            .expect("every chosen cable must have a corresponding eligibility item");
        let cable = cables.get(cable_id);

        let placement = Placement::new(
            cable_id,
            tracks,
            Length::new::<meter>(item.mid_radius_m),
            Length::new::<meter>(item.step_m),
            Length::new::<meter>(item.circumference_m),
            side,
            next_sequence(),
        );
        layer.push(placement, cable.diameter());
        side = side.flipped();
    }
    layer.thickness()
}
