use super::*;
use uom::si::length::{centimeter, millimeter};

fn push_cable(table: &mut CableTable, d_mm: f64, l_m: f64, mu: f64, r_min_m: f64) -> CableId {
    table
        .push(
            "C1",
            Length::new::<millimeter>(d_mm),
            Length::new::<meter>(l_m),
            mu,
            Length::new::<meter>(r_min_m),
        )
        .unwrap()
}

#[test]
fn flexibility_class_thresholds() {
    // ratio = r_min / d
    assert_eq!(flexibility_class(1.4, 1.0), 7);
    assert_eq!(flexibility_class(2.5, 1.0), 6);
    assert_eq!(flexibility_class(4.0, 1.0), 5);
    assert_eq!(flexibility_class(6.0, 1.0), 4);
    assert_eq!(flexibility_class(8.0, 1.0), 3);
    assert_eq!(flexibility_class(12.0, 1.0), 2);
    assert_eq!(flexibility_class(12.01, 1.0), 1);
}

#[test]
fn effective_diameter_uses_flexibility_factor() {
    let mut table = CableTable::new();
    // r_min/d = 0.6/0.01 = 60 -> very stiff -> class 1 -> factor 1.0
    let id = push_cable(&mut table, 10.0, 5.0, 0.2, 0.6);
    let cable = table.get(id);
    assert_eq!(cable.flexibility(), 1);
    assert!((cable.effective_diameter().get::<millimeter>() - 10.0).abs() < 1e-9);
}

#[test]
fn effective_diameter_shrinks_for_flexible_cable() {
    let mut table = CableTable::new();
    // r_min/d = 0.01/0.01 = 1 -> class 7 -> factor 0.15
    let id = push_cable(&mut table, 10.0, 5.0, 0.2, 0.01);
    let cable = table.get(id);
    assert_eq!(cable.flexibility(), 7);
    assert!((cable.effective_diameter().get::<millimeter>() - 1.5).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_diameter() {
    let mut table = CableTable::new();
    let err = table
        .push(
            "C1",
            Length::new::<meter>(0.0),
            Length::new::<meter>(1.0),
            1.0,
            Length::new::<meter>(0.1),
        )
        .unwrap_err();
    assert_eq!(err, CableError::NonPositiveDiameter(0.0));
}

#[test]
fn rejects_non_positive_length() {
    let mut table = CableTable::new();
    let err = table
        .push(
            "C1",
            Length::new::<centimeter>(1.0),
            Length::new::<meter>(0.0),
            1.0,
            Length::new::<meter>(0.1),
        )
        .unwrap_err();
    assert_eq!(err, CableError::NonPositiveLength(0.0));
}

#[test]
fn rejects_non_positive_linear_mass() {
    let mut table = CableTable::new();
    let err = table
        .push(
            "C1",
            Length::new::<centimeter>(1.0),
            Length::new::<meter>(1.0),
            0.0,
            Length::new::<meter>(0.1),
        )
        .unwrap_err();
    assert_eq!(err, CableError::NonPositiveLinearMass(0.0));
}

#[test]
fn rejects_non_positive_min_bend_radius() {
    let mut table = CableTable::new();
    let err = table
        .push(
            "C1",
            Length::new::<centimeter>(1.0),
            Length::new::<meter>(1.0),
            1.0,
            Length::new::<meter>(0.0),
        )
        .unwrap_err();
    assert_eq!(err, CableError::NonPositiveMinBendRadius(0.0));
}

#[test]
fn handles_are_assigned_in_insertion_order() {
    let mut table = CableTable::new();
    let a = push_cable(&mut table, 10.0, 1.0, 1.0, 0.1);
    let b = push_cable(&mut table, 10.0, 1.0, 1.0, 0.1);
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(table.len(), 2);
}

#[test]
fn total_mass_matches_formula() {
    let mut table = CableTable::new();
    let id = push_cable(&mut table, 10.0, 100.0, 2.0, 0.1);
    let cable = table.get(id);
    assert!((cable.total_mass_ton() - 0.2).abs() < 1e-12);
}
