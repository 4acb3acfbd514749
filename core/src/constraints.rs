//! Stateless predicates and capacity queries used by eligibility checks.
//!
//! Every function here is a pure query against a `(reel, cable)` pair and a
//! handful of geometric values — no mutable state, matching the Design
//! Notes' call to replace module-level validator/calculator singletons with
//! stateless value types (in practice, free functions).

use crate::cable::Cable;
use crate::reel::Reel;
use crate::units::{self, EPS};
use uom::si::length::meter;
use uom::si::mass::ton;
use uom::si::volume::cubic_meter;

/// Maximum additional length of `cable` that `reel`'s remaining mass budget
/// allows, in metres.
pub fn max_length_by_mass(reel: &Reel, cable: &Cable) -> f64 {
    let available = reel.available_mass().get::<ton>();
    (available.max(0.0) * 1000.0 / cable.linear_mass_kg_per_m()).max(0.0)
}

/// Maximum additional length of `cable` that `reel`'s remaining volume
/// budget allows, in metres.
pub fn max_length_by_volume(reel: &Reel, cable: &Cable) -> f64 {
    let available = (reel.volume_cap() - reel.used_volume()).get::<cubic_meter>();
    let cross_section = std::f64::consts::PI * (cable.diameter().get::<meter>() / 2.0).powi(2);
    (available.max(0.0) / cross_section).max(0.0)
}

/// `true` if a track at mid-radius `r_mid_m` respects `cable`'s minimum bend
/// radius.
pub fn radius_ok(r_mid_m: f64, cable: &Cable) -> bool {
    r_mid_m + EPS >= cable.min_bend_radius().get::<meter>()
}

/// `true` if a layer of thickness `diameter_m` starting at base radius
/// `r_base_m` stays within `reel`'s outer diameter.
pub fn fits_outer(reel: &Reel, r_base_m: f64, diameter_m: f64) -> bool {
    2.0 * (r_base_m + diameter_m) <= reel.outer_diameter().get::<meter>() + EPS
}

/// Legacy width predicate for the honeycomb placer: `true` if a circle of
/// diameter `diameter_m` centered at lateral offset `x_m` fits within the
/// reel's usable flange width.
#[cfg_attr(not(feature = "legacy-hex"), allow(dead_code))]
pub fn fits_width(x_m: f64, diameter_m: f64, flange_width_m: f64) -> bool {
    let margin = diameter_m * units::MARGIN_FRAC;
    x_m.abs() + diameter_m / 2.0 <= (flange_width_m - margin) / 2.0
}
