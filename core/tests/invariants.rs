//! Property-based tests for the universal invariants in §8 of the design
//! spec: capacity ceilings, per-placement bend radius, per-cable residual
//! bound, determinism, and mass-cap monotonicity.

use coilwind_core::track_selector::Objective;
use coilwind_core::winder::wind_reel;
use coilwind_core::{CableTable, Reel};
use proptest::prelude::*;
use std::collections::HashMap;
use uom::si::f64::{Length, Mass};
use uom::si::length::meter;
use uom::si::mass::ton;

#[derive(Clone, Debug)]
struct CableSpec {
    diameter_m: f64,
    required_length_m: f64,
    linear_mass_kg_per_m: f64,
    min_bend_radius_m: f64,
}

fn cable_spec_strategy() -> impl Strategy<Value = CableSpec> {
    (0.005f64..0.05, 0.1f64..50.0, 0.01f64..5.0, 0.01f64..0.5).prop_map(
        |(diameter_m, required_length_m, linear_mass_kg_per_m, min_bend_radius_m)| CableSpec {
            diameter_m,
            required_length_m,
            linear_mass_kg_per_m,
            min_bend_radius_m,
        },
    )
}

#[derive(Clone, Debug)]
struct ReelSpec {
    inner_diameter_m: f64,
    extra_diameter_m: f64,
    flange_width_m: f64,
    max_mass_ton: f64,
    packing_factor: f64,
}

fn reel_spec_strategy() -> impl Strategy<Value = ReelSpec> {
    (
        0.1f64..1.0,
        0.1f64..2.0,
        0.05f64..1.0,
        0.1f64..50.0,
        0.5f64..1.0,
    )
        .prop_map(
            |(inner_diameter_m, extra_diameter_m, flange_width_m, max_mass_ton, packing_factor)| {
                ReelSpec {
                    inner_diameter_m,
                    extra_diameter_m,
                    flange_width_m,
                    max_mass_ton,
                    packing_factor,
                }
            },
        )
}

fn build_reel(spec: &ReelSpec) -> Reel {
    Reel::new(
        "R",
        Length::new::<meter>(spec.inner_diameter_m),
        Length::new::<meter>(spec.inner_diameter_m + spec.extra_diameter_m),
        Length::new::<meter>(spec.flange_width_m),
        Mass::new::<ton>(spec.max_mass_ton),
        spec.packing_factor,
    )
    .unwrap()
}

fn build_cables(specs: &[CableSpec]) -> CableTable {
    let mut table = CableTable::new();
    for (i, spec) in specs.iter().enumerate() {
        table
            .push(
                format!("C{i}"),
                Length::new::<meter>(spec.diameter_m),
                Length::new::<meter>(spec.required_length_m),
                spec.linear_mass_kg_per_m,
                Length::new::<meter>(spec.min_bend_radius_m),
            )
            .unwrap();
    }
    table
}

fn initial_residual(cables: &CableTable) -> HashMap<coilwind_core::CableId, f64> {
    cables
        .iter()
        .map(|c| (c.id(), c.required_length().get::<meter>()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Winding a reel never violates its own mass, volume or outer-diameter
    /// caps, and every cable keeps at most its required length allocated.
    #[test]
    fn winding_respects_reel_and_cable_caps(
        reel_spec in reel_spec_strategy(),
        cable_specs in prop::collection::vec(cable_spec_strategy(), 0..6),
    ) {
        let mut reel = build_reel(&reel_spec);
        let cables = build_cables(&cable_specs);
        let mut residual = initial_residual(&cables);

        wind_reel(&mut reel, &cables, &mut residual, Objective::WidthOnly);

        prop_assert!(reel.invariants_hold(&cables));

        for cable in cables.iter() {
            let allocated: f64 = reel
                .layers()
                .iter()
                .flat_map(|l| l.placements())
                .filter(|p| p.cable_id() == cable.id())
                .map(|p| p.allocated_length().get::<meter>())
                .sum();
            prop_assert!(allocated <= cable.required_length().get::<meter>() + 1e-6);
        }
    }

    /// Running the winder twice on identical inputs produces the same
    /// layer count and the same number of placements per layer.
    #[test]
    fn winding_is_deterministic(
        reel_spec in reel_spec_strategy(),
        cable_specs in prop::collection::vec(cable_spec_strategy(), 0..6),
    ) {
        let cables = build_cables(&cable_specs);

        let mut reel_a = build_reel(&reel_spec);
        let mut residual_a = initial_residual(&cables);
        wind_reel(&mut reel_a, &cables, &mut residual_a, Objective::WidthThenLength);

        let mut reel_b = build_reel(&reel_spec);
        let mut residual_b = initial_residual(&cables);
        wind_reel(&mut reel_b, &cables, &mut residual_b, Objective::WidthThenLength);

        prop_assert_eq!(reel_a.layers().len(), reel_b.layers().len());
        for (la, lb) in reel_a.layers().iter().zip(reel_b.layers().iter()) {
            prop_assert_eq!(la.placements().len(), lb.placements().len());
        }
    }

    /// Raising the mass cap never strictly reduces the total length
    /// allocated across the reel.
    #[test]
    fn raising_mass_cap_never_reduces_allocated_length(
        mut reel_spec in reel_spec_strategy(),
        cable_specs in prop::collection::vec(cable_spec_strategy(), 1..6),
        extra_mass_ton in 0.0f64..50.0,
    ) {
        let cables = build_cables(&cable_specs);

        let mut reel_low = build_reel(&reel_spec);
        let mut residual_low = initial_residual(&cables);
        wind_reel(&mut reel_low, &cables, &mut residual_low, Objective::WidthOnly);
        let allocated_low: f64 = reel_low
            .layers()
            .iter()
            .flat_map(|l| l.placements())
            .map(|p| p.allocated_length().get::<meter>())
            .sum();

        reel_spec.max_mass_ton += extra_mass_ton;
        let mut reel_high = build_reel(&reel_spec);
        let mut residual_high = initial_residual(&cables);
        wind_reel(&mut reel_high, &cables, &mut residual_high, Objective::WidthOnly);
        let allocated_high: f64 = reel_high
            .layers()
            .iter()
            .flat_map(|l| l.placements())
            .map(|p| p.allocated_length().get::<meter>())
            .sum();

        prop_assert!(allocated_high + 1e-6 >= allocated_low);
    }
}
