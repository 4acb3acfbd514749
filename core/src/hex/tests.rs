use super::*;
use crate::cable::CableTable;
use uom::si::f64::Mass;
use uom::si::mass::ton;

fn small_reel() -> Reel {
    Reel::new(
        "R1",
        Length::new::<meter>(0.2),
        Length::new::<meter>(0.6),
        Length::new::<meter>(0.2),
        Mass::new::<ton>(10.0),
        1.0,
    )
    .unwrap()
}

#[test]
fn places_a_single_cable_as_circles() {
    let mut cables = CableTable::new();
    let id = cables
        .push(
            "C1",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.5),
            0.1,
            Length::new::<meter>(0.05),
        )
        .unwrap();
    let reel = small_reel();
    let mut residual = std::collections::HashMap::new();
    residual.insert(id, 0.5);

    let result = place_hexagonal(&reel, &cables, &[id], &mut residual, -1.0);

    assert!(!result.placements.is_empty());
    for placement in &result.placements {
        assert!(radius_ok(placement, cables.get(id)));
    }
}

#[test]
fn geometrically_infeasible_cable_places_nothing() {
    let mut cables = CableTable::new();
    let id = cables
        .push(
            "Stiff",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.5),
            0.1,
            Length::new::<meter>(1.0), // bend radius far exceeds the reel
        )
        .unwrap();
    let reel = small_reel();
    let mut residual = std::collections::HashMap::new();
    residual.insert(id, 0.5);

    let result = place_hexagonal(&reel, &cables, &[id], &mut residual, -1.0);

    assert!(result.placements.is_empty());
    assert!((result.residual_m[&id] - 0.5).abs() < 1e-9);
}

#[test]
fn left_and_right_starting_sides_both_place() {
    let mut cables = CableTable::new();
    let id = cables
        .push(
            "C1",
            Length::new::<meter>(0.01),
            Length::new::<meter>(0.2),
            0.1,
            Length::new::<meter>(0.05),
        )
        .unwrap();
    let reel = small_reel();

    let mut residual_left = std::collections::HashMap::new();
    residual_left.insert(id, 0.2);
    let left = place_hexagonal(&reel, &cables, &[id], &mut residual_left, -1.0);

    let mut residual_right = std::collections::HashMap::new();
    residual_right.insert(id, 0.2);
    let right = place_hexagonal(&reel, &cables, &[id], &mut residual_right, 1.0);

    assert_eq!(left.placements.len(), right.placements.len());
}
