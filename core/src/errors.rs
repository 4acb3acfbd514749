//! Error types produced when building the core entities.
//!
//! These are the core's half of `InvalidInput` (see the crate-level error
//! taxonomy): the loader is responsible for turning a raw row into the
//! typed values passed to [`crate::cable::Cable::new`] and
//! [`crate::reel::Reel::new`], and for adding row/field context on top of
//! whichever of these variants comes back. The allocation engine itself
//! never constructs these once a [`crate::cable::Cable`] or
//! [`crate::reel::Reel`] exists.

use thiserror::Error;

/// The error type returned when a [`crate::cable::Cable`] fails validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CableError {
    #[error("cable diameter must be positive, got `{0}` m")]
    NonPositiveDiameter(f64),
    #[error("cable required length must be positive, got `{0}` m")]
    NonPositiveLength(f64),
    #[error("cable linear mass must be positive, got `{0}` kg/m")]
    NonPositiveLinearMass(f64),
    #[error("cable minimum bend radius must be positive, got `{0}` m")]
    NonPositiveMinBendRadius(f64),
}

/// The error type returned when a [`crate::reel::Reel`] fails validation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ReelError {
    #[error("reel outer diameter `{outer}` m must be greater than inner diameter `{inner}` m")]
    OuterNotGreaterThanInner { outer: f64, inner: f64 },
    #[error("reel inner diameter must be positive, got `{0}` m")]
    NonPositiveInnerDiameter(f64),
    #[error("reel flange width must be positive, got `{0}` m")]
    NonPositiveFlangeWidth(f64),
    #[error("reel maximum mass must be positive, got `{0}` ton")]
    NonPositiveMaxMass(f64),
    #[error("reel packing factor must be in (0, 1], got `{0}`")]
    PackingFactorOutOfRange(f64),
}

/// The `InvalidInput` error kind (§7): a loaded CSV row failed one of the
/// Input Invariants in §6, named by the row's own identifier rather than
/// its position, since that's what a user re-reading the CSV will look for.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("reel `{id}`: {source}")]
    Reel {
        id: String,
        #[source]
        source: ReelError,
    },
    #[error("cable `{id}`: {source}")]
    Cable {
        id: String,
        #[source]
        source: CableError,
    },
}
