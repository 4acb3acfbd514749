//! The [`Cable`] entity and the stable handles used to refer to it during
//! allocation.

use crate::errors::CableError;
use uom::si::f64::Length;
use uom::si::length::meter;

/// Flexibility-factor lookup, indexed by [`Cable::flexibility`] (1..=7).
/// Class 1 is the stiffest cable, class 7 the most flexible; the radial
/// winder never reads this (it's legacy, consumed only by [`crate::hex`]),
/// but the class itself still drives bend-radius feasibility through
/// `r_min`.
const FLEXIBILITY_FACTORS: [f64; 7] = [1.0, 0.9, 0.75, 0.6, 0.45, 0.3, 0.15];

/// A stable handle to a [`Cable`], assigned once at load time by a
/// [`CableTable`] and used everywhere else instead of the cable's identity
/// (pointer or reference) — residual-length bookkeeping, placements, and
/// reports all key off this instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CableId(usize);

impl CableId {
    fn new(index: usize) -> Self {
        CableId(index)
    }

    /// The index of this handle into the [`CableTable`] that issued it.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One continuous piece of flexible product to be wound onto a reel.
///
/// Inputs are immutable once constructed; the length already wound onto a
/// reel ("residual") is tracked externally (see [`crate::winder`]), not on
/// the `Cable` itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Cable {
    id: CableId,
    code: String,
    diameter: Length,
    required_length: Length,
    linear_mass_kg_per_m: f64,
    min_bend_radius: Length,
    flexibility: u8,
    effective_diameter: Length,
}

impl Cable {
    /// Build a cable, validating the physical inputs.
    ///
    /// `id` is assigned by the caller (in practice, [`CableTable::push`]) so
    /// that handles stay stable across the lifetime of one allocation run.
    fn new(
        id: CableId,
        code: impl Into<String>,
        diameter: Length,
        required_length: Length,
        linear_mass_kg_per_m: f64,
        min_bend_radius: Length,
    ) -> Result<Self, CableError> {
        let d = diameter.get::<meter>();
        let l = required_length.get::<meter>();
        let r_min = min_bend_radius.get::<meter>();
        if !(d > 0.0) {
            return Err(CableError::NonPositiveDiameter(d));
        }
        if !(l > 0.0) {
            return Err(CableError::NonPositiveLength(l));
        }
        if !(linear_mass_kg_per_m > 0.0) {
            return Err(CableError::NonPositiveLinearMass(linear_mass_kg_per_m));
        }
        if !(r_min > 0.0) {
            return Err(CableError::NonPositiveMinBendRadius(r_min));
        }

        let flexibility = flexibility_class(r_min, d);
        let factor = FLEXIBILITY_FACTORS[usize::from(flexibility) - 1];
        let effective_diameter = diameter * factor;

        Ok(Cable {
            id,
            code: code.into(),
            diameter,
            required_length,
            linear_mass_kg_per_m,
            min_bend_radius,
            flexibility,
            effective_diameter,
        })
    }

    pub fn id(&self) -> CableId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn required_length(&self) -> Length {
        self.required_length
    }

    pub fn linear_mass_kg_per_m(&self) -> f64 {
        self.linear_mass_kg_per_m
    }

    pub fn min_bend_radius(&self) -> Length {
        self.min_bend_radius
    }

    /// Flexibility class in `1..=7`; higher is more flexible.
    pub fn flexibility(&self) -> u8 {
        self.flexibility
    }

    /// Diameter adjusted by the flexibility factor. Legacy: only meaningful
    /// to the honeycomb placer in [`crate::hex`]; the radial core always
    /// uses [`Cable::diameter`].
    pub fn effective_diameter(&self) -> Length {
        self.effective_diameter
    }

    /// Total mass of the cable at its full required length, in metric tons.
    pub fn total_mass_ton(&self) -> f64 {
        self.linear_mass_kg_per_m * self.required_length.get::<meter>() / 1000.0
    }
}

/// Compute the flexibility class (1..=7) from the ratio `r_min / d`, both in
/// metres. Higher ratios (stiffer relative to their own diameter) give a
/// lower, less-flexible class.
fn flexibility_class(min_bend_radius_m: f64, diameter_m: f64) -> u8 {
    let ratio = min_bend_radius_m / diameter_m;
    if ratio <= 1.5 {
        7
    } else if ratio <= 2.5 {
        6
    } else if ratio <= 4.0 {
        5
    } else if ratio <= 6.0 {
        4
    } else if ratio <= 8.0 {
        3
    } else if ratio <= 12.0 {
        2
    } else {
        1
    }
}

/// An append-only table of [`Cable`]s, the single point that assigns
/// [`CableId`] handles and owns the cables for the lifetime of an
/// allocation run.
#[derive(Clone, Debug, Default)]
pub struct CableTable {
    cables: Vec<Cable>,
}

impl CableTable {
    pub fn new() -> Self {
        CableTable { cables: Vec::new() }
    }

    /// Validate and insert a new cable, returning its freshly assigned
    /// handle.
    pub fn push(
        &mut self,
        code: impl Into<String>,
        diameter: Length,
        required_length: Length,
        linear_mass_kg_per_m: f64,
        min_bend_radius: Length,
    ) -> Result<CableId, CableError> {
        let id = CableId::new(self.cables.len());
        let cable = Cable::new(
            id,
            code,
            diameter,
            required_length,
            linear_mass_kg_per_m,
            min_bend_radius,
        )?;
        self.cables.push(cable);
        Ok(id)
    }

    pub fn get(&self, id: CableId) -> &Cable {
        &self.cables[id.index()]
    }

    pub fn len(&self) -> usize {
        self.cables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cable> {
        self.cables.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CableId> + '_ {
        (0..self.cables.len()).map(CableId::new)
    }
}

impl std::ops::Index<CableId> for CableTable {
    type Output = Cable;

    fn index(&self, id: CableId) -> &Cable {
        self.get(id)
    }
}

#[cfg(test)]
mod tests;
