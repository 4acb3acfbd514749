//! The single-reel outer loop (§4.6): builds successive layers on one reel
//! until no cable can make further progress.

use crate::cable::{CableId, CableTable};
use crate::eligibility::{self, Item};
use crate::layer::{Layer, Side};
use crate::layer_registrar;
use crate::reel::Reel;
use crate::track_selector::{self, Objective};
use crate::units::EPS;
use std::collections::{HashMap, HashSet};
use uom::si::length::meter;

/// Order cables once before winding starts: descending physical diameter,
/// then ascending minimum bend radius, then descending total mass. This is
/// a stabilizing tie-break for the greedy layer direction, not a
/// correctness requirement — the knapsack in §4.4 re-optimizes every layer
/// regardless of input order.
fn sort_order(cables: &CableTable) -> Vec<CableId> {
    let mut ids: Vec<CableId> = cables.ids().collect();
    ids.sort_by(|&a, &b| {
        let ca = cables.get(a);
        let cb = cables.get(b);
        cb.diameter()
            .partial_cmp(&ca.diameter())
            .unwrap()
            .then_with(|| ca.min_bend_radius().partial_cmp(&cb.min_bend_radius()).unwrap())
            .then_with(|| cb.total_mass_ton().partial_cmp(&ca.total_mass_ton()).unwrap())
    });
    ids
}

/// Wind as many layers as possible onto `reel`, consuming from `residual_m`
/// (keyed by cable handle, initialized by the caller to each cable's
/// required length). Mutates `residual_m` in place and returns the set of
/// cable ids that still have residual length `> ε` once winding stops.
///
/// Never panics on ordinary input: every loop-termination condition in
/// §4.6 is a normal outcome, not a failure.
pub fn wind_reel(
    reel: &mut Reel,
    cables: &CableTable,
    residual_m: &mut HashMap<CableId, f64>,
    objective: Objective,
) -> HashSet<CableId> {
    let order = sort_order(cables);
    let mut r_base_m = reel.inner_diameter().get::<meter>() / 2.0;
    let de_m = reel.outer_diameter().get::<meter>();
    let w_m = reel.flange_width().get::<meter>();
    let mut side = Side::Left;
    let mut sequence: u64 = 0;

    loop {
        if w_m <= EPS {
            break;
        }
        if 2.0 * r_base_m >= de_m - EPS {
            break;
        }
        if residual_m.values().all(|&r| r <= EPS) {
            break;
        }

        let mut items: HashMap<CableId, Item> = HashMap::new();
        for &id in &order {
            let remaining = *residual_m.get(&id).unwrap_or(&0.0);
            if remaining <= EPS {
                continue;
            }
            let cable = cables.get(id);
            if let Some(item) = eligibility::eligible(reel, cable, r_base_m, remaining) {
                items.insert(id, item);
            }
        }
        if items.is_empty() {
            break;
        }

        // Fed in `order` (fixed once per reel), not hash-map iteration
        // order, so the knapsack's tie-break reconstruction is reproducible.
        let item_list: Vec<Item> = order.iter().filter_map(|id| items.get(id).copied()).collect();
        let chosen = track_selector::select(&item_list, w_m, objective);
        if chosen.is_empty() {
            break;
        }

        let mut layer = Layer::new(uom::si::f64::Length::new::<meter>(2.0 * r_base_m));
        let thickness = layer_registrar::register(&mut layer, cables, &items, &chosen, side, || {
            sequence += 1;
            sequence
        });
        if thickness.get::<meter>() <= EPS {
            break;
        }

        for (&cable_id, &tracks) in &chosen {
            let item = &items[&cable_id];
            let consumed = f64::from(tracks) * item.circumference_m;
            if let Some(r) = residual_m.get_mut(&cable_id) {
                *r -= consumed;
            }
        }

        r_base_m += thickness.get::<meter>();
        reel.add_layer(layer, cables);
        side = side.flipped();

        if 2.0 * r_base_m > de_m + EPS {
            break;
        }
    }

    residual_m
        .iter()
        .filter(|&(_, &r)| r > EPS)
        .map(|(&id, _)| id)
        .collect()
}
