//! Unit conversions and pure geometry helpers shared by every other module.
//!
//! Typed [`uom`] quantities carry the unit tag on every public struct field
//! (see [`crate::cable`] and [`crate::reel`]) so a metre is never silently
//! treated as a millimetre. The helpers in this module work a layer below
//! that, on plain `f64` values already expressed in metres, because that is
//! the representation the eligibility, knapsack and winder hot loops need.

/// Lateral clearance per side of a track, as a fraction of the cable's
/// physical diameter.
pub const MARGIN_FRAC: f64 = 0.05;

/// `sqrt(3)/2`, the vertical pitch factor between rows of a honeycomb
/// (hexagonal) packing. Legacy: only used by the [`crate::hex`] path.
pub const HEX_PITCH_FACTOR: f64 = 0.866_025_403_784_438_6; // 3.0_f64.sqrt() / 2.0

/// Tolerance used for every metre-scale comparison in the allocation engine.
pub const EPS: f64 = 1e-9;

/// Tolerance used when testing diameter equality for the legacy
/// same-diameter layer grouping.
pub const EPS_DIAMETER: f64 = 1e-6;

/// Default packing factor applied to a reel's annular volume when the input
/// doesn't specify one.
pub const DEFAULT_PACKING_FACTOR: f64 = 0.85;

/// Width-wise pitch between adjacent tracks of the same cable:
/// `d * (1 + 2 * MARGIN_FRAC)`.
pub fn step(diameter_m: f64) -> f64 {
    diameter_m * (1.0 + 2.0 * MARGIN_FRAC)
}

/// Circumference of a circle of radius `r_m`.
pub fn circumference(radius_m: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius_m
}

/// Volume of the annular ring between `di_m` and `de_m`, of width `w_m`.
pub fn ring_volume(inner_diameter_m: f64, outer_diameter_m: f64, width_m: f64) -> f64 {
    (std::f64::consts::PI / 4.0)
        * (outer_diameter_m.powi(2) - inner_diameter_m.powi(2))
        * width_m
}

/// Volume of `length_m` metres of a cable of diameter `diameter_m`, modeled
/// as a cylinder.
pub fn cable_volume(diameter_m: f64, length_m: f64) -> f64 {
    std::f64::consts::PI * (diameter_m / 2.0).powi(2) * length_m
}
