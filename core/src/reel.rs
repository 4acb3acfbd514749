//! The [`Reel`] entity: a winding spool plus the layers, mass and volume
//! accumulated on it during allocation.

use crate::cable::CableTable;
use crate::errors::ReelError;
use crate::layer::Layer;
use crate::units::{self, EPS};
use uom::si::f64::{Length, Mass, Volume};
use uom::si::length::meter;
use uom::si::mass::ton;
use uom::si::volume::cubic_meter;

/// A cylindrical spool that cables are wound onto in concentric radial
/// layers.
#[derive(Clone, Debug)]
pub struct Reel {
    code: String,
    inner_diameter: Length,
    outer_diameter: Length,
    flange_width: Length,
    max_mass: Mass,
    packing_factor: f64,
    layers: Vec<Layer>,
    current_mass: Mass,
    used_volume: Volume,
}

impl Reel {
    /// Build a reel, validating the physical inputs.
    ///
    /// `packing_factor` must be in `(0, 1]`; pass
    /// [`units::DEFAULT_PACKING_FACTOR`] if the input didn't specify one.
    pub fn new(
        code: impl Into<String>,
        inner_diameter: Length,
        outer_diameter: Length,
        flange_width: Length,
        max_mass: Mass,
        packing_factor: f64,
    ) -> Result<Self, ReelError> {
        let di = inner_diameter.get::<meter>();
        let de = outer_diameter.get::<meter>();
        let w = flange_width.get::<meter>();
        let m_max = max_mass.get::<ton>();

        if !(di > 0.0) {
            return Err(ReelError::NonPositiveInnerDiameter(di));
        }
        if !(de > di) {
            return Err(ReelError::OuterNotGreaterThanInner {
                outer: de,
                inner: di,
            });
        }
        if !(w > 0.0) {
            return Err(ReelError::NonPositiveFlangeWidth(w));
        }
        if !(m_max > 0.0) {
            return Err(ReelError::NonPositiveMaxMass(m_max));
        }
        if !(packing_factor > 0.0 && packing_factor <= 1.0) {
            return Err(ReelError::PackingFactorOutOfRange(packing_factor));
        }

        Ok(Reel {
            code: code.into(),
            inner_diameter,
            outer_diameter,
            flange_width,
            max_mass,
            packing_factor,
            layers: Vec::new(),
            current_mass: Mass::new::<ton>(0.0),
            used_volume: Volume::new::<cubic_meter>(0.0),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn inner_diameter(&self) -> Length {
        self.inner_diameter
    }

    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    pub fn flange_width(&self) -> Length {
        self.flange_width
    }

    pub fn max_mass(&self) -> Mass {
        self.max_mass
    }

    pub fn packing_factor(&self) -> f64 {
        self.packing_factor
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn current_mass(&self) -> Mass {
        self.current_mass
    }

    pub fn used_volume(&self) -> Volume {
        self.used_volume
    }

    /// Geometric volume of the reel's annular cavity, ignoring the packing
    /// factor.
    pub fn ring_volume(&self) -> Volume {
        Volume::new::<cubic_meter>(units::ring_volume(
            self.inner_diameter.get::<meter>(),
            self.outer_diameter.get::<meter>(),
            self.flange_width.get::<meter>(),
        ))
    }

    /// Effective usable volume: [`Reel::ring_volume`] scaled by the packing
    /// factor.
    pub fn volume_cap(&self) -> Volume {
        self.ring_volume() * self.packing_factor
    }

    /// Remaining mass budget before [`Reel::max_mass`] is reached.
    pub fn available_mass(&self) -> Mass {
        self.max_mass - self.current_mass
    }

    /// `true` if every layer fits within outer diameter and the mass/volume
    /// accumulators are within their caps (allowing for [`EPS`]).
    pub fn invariants_hold(&self, cables: &CableTable) -> bool {
        if self.current_mass.get::<ton>() > self.max_mass.get::<ton>() + EPS {
            return false;
        }
        if self.used_volume.get::<cubic_meter>() > self.volume_cap().get::<cubic_meter>() + EPS {
            return false;
        }
        let mut radius = self.inner_diameter.get::<meter>() / 2.0;
        for layer in &self.layers {
            radius += layer.thickness().get::<meter>();
            if 2.0 * radius > self.outer_diameter.get::<meter>() + EPS {
                return false;
            }
            if !layer.invariants_hold(cables, self.flange_width.get::<meter>()) {
                return false;
            }
        }
        true
    }

    /// Append a freshly registered layer, updating the mass/volume
    /// accumulators from its placements.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if appending the layer would violate one of
    /// the reel-level invariants in the data model; this can only happen if
    /// the caller (the winder) mis-registered a layer, never from ordinary
    /// input, so it is an assertion rather than a `Result`.
    pub fn add_layer(&mut self, layer: Layer, cables: &CableTable) {
        for placement in layer.placements() {
            let cable = cables.get(placement.cable_id());
            let length_m = placement.allocated_length().get::<meter>();
            self.current_mass +=
                Mass::new::<ton>(cable.linear_mass_kg_per_m() * length_m / 1000.0);
            self.used_volume += Volume::new::<cubic_meter>(units::cable_volume(
                cable.diameter().get::<meter>(),
                length_m,
            ));
        }
        self.layers.push(layer);
        debug_assert!(
            self.current_mass.get::<ton>() <= self.max_mass.get::<ton>() + EPS,
            "add_layer violated the mass cap"
        );
        debug_assert!(
            self.used_volume.get::<cubic_meter>() <= self.volume_cap().get::<cubic_meter>() + EPS,
            "add_layer violated the volume cap"
        );
    }
}
