//! Bounded knapsack over candidate tracks (§4.4): given the eligible
//! [`crate::eligibility::Item`]s for a layer, choose how many tracks of
//! each cable to place so as to maximize occupied width, subject to the
//! flange-width capacity and each cable's own `max_tracks` bound.
//!
//! Width is scaled to integer millimetres before the knapsack runs (see the
//! Design Notes on floating-point determinism): the DP is exact integer
//! arithmetic, not a floating-point approximation.

use crate::cable::CableId;
use crate::eligibility::Item;
use std::collections::BTreeMap;

/// The secondary, tie-breaking term added to the primary width objective.
/// Selecting an `Objective` never changes which multiset maximizes occupied
/// width; it only decides which of several equally-wide multisets wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    /// `s = 0`: width is the only thing that matters.
    #[default]
    WidthOnly,
    /// `s = round(C * 1000)`: among equal-width ties, prefer the cable with
    /// the larger per-track circumference (outer layers tend to win ties
    /// against inner ones).
    WidthThenLength,
    /// `s = round(min(C, remaining) * 1000)`: among equal-width ties,
    /// prefer reducing whichever cable has the largest outstanding
    /// residual.
    WidthThenBalance,
}

impl Objective {
    fn secondary_mm(self, item: &Item) -> i64 {
        match self {
            Objective::WidthOnly => 0,
            Objective::WidthThenLength => (item.circumference_m * 1000.0).round() as i64,
            Objective::WidthThenBalance => {
                (item.circumference_m.min(item.remaining_length_m) * 1000.0).round() as i64
            }
        }
    }
}

/// One unit-weight synthetic knapsack item, produced by decomposing a
/// bounded item (`weight_mm` repeated up to `max_tracks` times) into
/// power-of-two groups so the DP only sees `O(log max_tracks)` entries per
/// cable instead of `O(max_tracks)`.
struct Group {
    cable_id: CableId,
    weight_mm: i64,
    value: i64,
    size: u32,
}

/// Decompose each item's bounded `max_tracks` into canonical binary groups:
/// `1, 2, 4, ..., 2^(k-1)`, plus a remainder group. Each group stands in for
/// "take exactly this many tracks of this cable" as a single 0/1 choice;
/// any achievable track count in `0..=max_tracks` is some subset-sum of
/// these group sizes.
fn binary_groups(item: &Item, unit_weight_mm: i64, unit_value: i64) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut remaining = item.max_tracks;
    let mut size: u32 = 1;
    while remaining > 0 {
        let take = size.min(remaining);
        groups.push(Group {
            cable_id: item.cable_id,
            weight_mm: unit_weight_mm * i64::from(take),
            value: unit_value * i64::from(take),
            size: take,
        });
        remaining -= take;
        size = size.saturating_mul(2);
    }
    groups
}

/// Solve the bounded knapsack for one layer, returning `{cable -> tracks}`
/// for every cable that got at least one track.
///
/// `items` order matters for reproducibility: two calls with items in the
/// same order always reconstruct the same multiset on a value tie, so
/// callers must feed it a stable order (the winder uses its fixed cable
/// sort, never hash-map iteration) rather than relying on this function to
/// break ties any particular way.
///
/// Returns an empty map if `items` is empty, the flange width rounds to
/// zero millimetres, or no combination of tracks fits (mirroring §4.4's
/// edge cases).
pub fn select(
    items: &[Item],
    flange_width_m: f64,
    objective: Objective,
) -> BTreeMap<CableId, u32> {
    let capacity_mm = (flange_width_m * 1000.0).round() as i64;
    if capacity_mm <= 0 || items.is_empty() {
        return BTreeMap::new();
    }
    let capacity_mm = capacity_mm as usize;

    let mut groups: Vec<Group> = Vec::new();
    for item in items {
        let weight_mm = (item.step_m * 1000.0).round() as i64;
        if weight_mm <= 0 || item.max_tracks == 0 {
            continue;
        }
        let value = weight_mm * 1_000_000 + objective.secondary_mm(item);
        groups.extend(binary_groups(item, weight_mm, value));
    }
    if groups.is_empty() {
        return BTreeMap::new();
    }

    // dp[w] = best total value achievable with exactly capacity w used,
    // or -1 if unreachable. dp[0] = 0 (use none of the flange).
    let mut dp: Vec<i64> = vec![-1; capacity_mm + 1];
    dp[0] = 0;
    let mut keep: Vec<Option<(usize, usize)>> = vec![None; capacity_mm + 1];

    for (group_index, group) in groups.iter().enumerate() {
        let weight = group.weight_mm as usize;
        if weight > capacity_mm {
            continue;
        }
        for w in (weight..=capacity_mm).rev() {
            if dp[w - weight] == -1 {
                continue;
            }
            let candidate = dp[w - weight] + group.value;
            if candidate > dp[w] {
                dp[w] = candidate;
                keep[w] = Some((w - weight, group_index));
            }
        }
    }

    // Smallest w wins on ties, which falls out of scanning ascending and
    // using a strict `>` comparison.
    let mut best_w = 0usize;
    let mut best_value = dp[0];
    for (w, &value) in dp.iter().enumerate().skip(1) {
        if value > best_value {
            best_value = value;
            best_w = w;
        }
    }

    if best_value <= 0 {
        return BTreeMap::new();
    }

    let mut chosen: BTreeMap<CableId, u32> = BTreeMap::new();
    let mut w = best_w;
    while w > 0 {
        let Some((prev_w, group_index)) = keep[w] else {
            break;
        };
        let group = &groups[group_index];
        *chosen.entry(group.cable_id).or_insert(0) += group.size;
        w = prev_w;
    }

    chosen
}
