//! Pure report structures mirroring the Report Surface in §6. These carry
//! no I/O of their own; a caller (the CLI) decides whether to serialize
//! them to CSV, JSON, or a printed table.

use crate::cable::CableTable;
use crate::layer::Side;
use crate::reel::Reel;
use serde::Serialize;
use uom::si::length::meter;
use uom::si::mass::ton;
use uom::si::volume::cubic_meter;

/// One cable's contribution to a layer, as reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub cable_id: String,
    pub diameter_m: f64,
    pub allocated_length_m: f64,
    pub mid_radius_m: f64,
    pub tracks: u32,
    pub step_m: f64,
    pub side: &'static str,
    pub mass_contribution_ton: f64,
}

/// One radial shell, as reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerReport {
    pub base_diameter_m: f64,
    pub thickness_m: f64,
    pub used_width_m: f64,
    pub pct_used: f64,
    pub placements: Vec<PlacementReport>,
}

/// One wound reel, as reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReelReport {
    pub reel_id: String,
    pub inner_diameter_m: f64,
    pub outer_diameter_m: f64,
    pub flange_width_m: f64,
    pub max_mass_ton: f64,
    pub current_mass_ton: f64,
    pub ring_volume_m3: f64,
    pub volume_cap_m3: f64,
    pub used_volume_m3: f64,
    pub occupancy: f64,
    pub layers: Vec<LayerReport>,
}

fn side_str(side: Side) -> &'static str {
    match side {
        Side::Left => "left",
        Side::Right => "right",
    }
}

/// Build a [`ReelReport`] from a wound `reel`, looking up each placement's
/// cable in `cables` for its identifier and physical properties.
pub fn report_for(reel: &Reel, cables: &CableTable) -> ReelReport {
    let flange_width_m = reel.flange_width().get::<meter>();

    let layers = reel
        .layers()
        .iter()
        .map(|layer| {
            let used_width_m = layer.used_width(flange_width_m);
            let placements = layer
                .placements()
                .iter()
                .map(|placement| {
                    let cable = cables.get(placement.cable_id());
                    PlacementReport {
                        cable_id: cable.code().to_string(),
                        diameter_m: cable.diameter().get::<meter>(),
                        allocated_length_m: placement.allocated_length().get::<meter>(),
                        mid_radius_m: placement.mid_radius().get::<meter>(),
                        tracks: placement.tracks(),
                        step_m: placement.step().get::<meter>(),
                        side: side_str(placement.side()),
                        mass_contribution_ton: placement
                            .mass_contribution_ton(cable.linear_mass_kg_per_m()),
                    }
                })
                .collect();

            LayerReport {
                base_diameter_m: layer.base_diameter().get::<meter>(),
                thickness_m: layer.thickness().get::<meter>(),
                used_width_m,
                pct_used: if flange_width_m > 0.0 {
                    used_width_m / flange_width_m
                } else {
                    0.0
                },
                placements,
            }
        })
        .collect();

    let volume_cap_m3 = reel.volume_cap().get::<cubic_meter>();
    let used_volume_m3 = reel.used_volume().get::<cubic_meter>();

    ReelReport {
        reel_id: reel.code().to_string(),
        inner_diameter_m: reel.inner_diameter().get::<meter>(),
        outer_diameter_m: reel.outer_diameter().get::<meter>(),
        flange_width_m,
        max_mass_ton: reel.max_mass().get::<ton>(),
        current_mass_ton: reel.current_mass().get::<ton>(),
        ring_volume_m3: reel.ring_volume().get::<cubic_meter>(),
        volume_cap_m3,
        used_volume_m3,
        occupancy: if volume_cap_m3 > 0.0 {
            used_volume_m3 / volume_cap_m3
        } else {
            0.0
        },
        layers,
    }
}
