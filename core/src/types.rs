//! Shared primitive types used across the entire simulation.

/// A 1-based round ordinal. Round 0 means "nothing run yet".
pub type Round = u64;

/// The canonical run identifier.
pub type RunId = String;
