use super::*;
use crate::cable::CableTable;
use uom::si::length::millimeter;

fn sample_table() -> (CableTable, CableId) {
    let mut table = CableTable::new();
    let id = table
        .push(
            "C1",
            Length::new::<millimeter>(10.0),
            Length::new::<meter>(100.0),
            0.2,
            Length::new::<meter>(0.1),
        )
        .unwrap();
    (table, id)
}

#[test]
fn empty_layer_has_zero_thickness() {
    let layer = Layer::new(Length::new::<meter>(0.2));
    assert_eq!(layer.thickness().get::<meter>(), 0.0);
    assert!(layer.is_empty());
}

#[test]
fn push_updates_thickness_to_largest_diameter() {
    let mut layer = Layer::new(Length::new::<meter>(0.2));
    let (table, id) = sample_table();
    let cable = table.get(id);
    let placement = Placement::new(
        id,
        3,
        Length::new::<meter>(0.105),
        Length::new::<meter>(0.011),
        Length::new::<meter>(0.6597),
        Side::Left,
        1,
    );
    layer.push(placement, cable.diameter());
    assert!((layer.thickness().get::<millimeter>() - 10.0).abs() < 1e-9);
    assert_eq!(layer.placements().len(), 1);
}

#[test]
fn allocated_length_is_tracks_times_circumference() {
    let (_table, id) = sample_table();
    let placement = Placement::new(
        id,
        4,
        Length::new::<meter>(0.1),
        Length::new::<meter>(0.011),
        Length::new::<meter>(0.6283),
        Side::Right,
        2,
    );
    assert!((placement.allocated_length().get::<meter>() - 4.0 * 0.6283).abs() < 1e-9);
}

#[test]
fn used_width_caps_tracks_at_flange_capacity() {
    let mut layer = Layer::new(Length::new::<meter>(0.2));
    let (table, id) = sample_table();
    let cable = table.get(id);
    // step = 0.011 m, flange width = 0.02 m -> capacity = floor(0.02/0.011) = 1
    let placement = Placement::new(
        id,
        5,
        Length::new::<meter>(0.105),
        Length::new::<meter>(0.011),
        Length::new::<meter>(0.6597),
        Side::Left,
        1,
    );
    layer.push(placement, cable.diameter());
    let used = layer.used_width(0.02);
    assert!((used - 0.011).abs() < 1e-9);
}

#[test]
fn side_flips() {
    assert_eq!(Side::Left.flipped(), Side::Right);
    assert_eq!(Side::Right.flipped(), Side::Left);
}

#[test]
fn invariants_hold_rejects_radius_violation() {
    let mut layer = Layer::new(Length::new::<meter>(0.0));
    let (table, id) = sample_table();
    let cable = table.get(id);
    // mid_radius 0.05 < r_min 0.1 -> violation
    let placement = Placement::new(
        id,
        1,
        Length::new::<meter>(0.05),
        Length::new::<meter>(0.011),
        Length::new::<meter>(0.314),
        Side::Left,
        1,
    );
    layer.push(placement, cable.diameter());
    assert!(!layer.invariants_hold(&table, 1.0));
}
