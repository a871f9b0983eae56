//! File output for estimate results.

/// CSV export of the energy breakdown.
pub mod export;
