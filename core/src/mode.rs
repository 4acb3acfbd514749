//! Selects which single-reel placement strategy a caller wants.
//!
//! [`AllocationMode::RadialWinder`] is the only variant compiled by
//! default; [`AllocationMode::LegacyHexagonal`] only exists behind the
//! `legacy-hex` Cargo feature, matching [`crate::hex`]'s own feature gate —
//! a caller has to opt into both the feature and this variant before the
//! honeycomb placer is reachable at all.

/// Which single-reel placement strategy to run: the radial-layer bounded
/// knapsack (authoritative) or the legacy honeycomb placer (kept only for
/// input-format compatibility).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AllocationMode {
    /// The radial-layer bounded-knapsack winder in [`crate::winder`].
    #[default]
    RadialWinder,
    /// The honeycomb single-cable placer in [`crate::hex`].
    #[cfg(feature = "legacy-hex")]
    LegacyHexagonal,
}
