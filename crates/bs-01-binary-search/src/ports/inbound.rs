//! Inbound Ports (Driving Ports)
//!
//! The API that front ends use to run lookups.

use crate::domain::SearchOutcome;

/// Primary search API (Driving Port)
///
/// Implementations must be thread-safe (`Send + Sync`) and must not keep any
/// state between calls.
pub trait SearchApi: Send + Sync {
    /// Locate `target` in an ascending `sequence`
    ///
    /// # Arguments
    /// * `sequence` - Values sorted in non-decreasing order (not verified)
    /// * `target` - Value to look for
    ///
    /// # Returns
    /// `Found(i)` with `sequence[i] == target`, or `NotFound`
    fn search(&self, sequence: &[i32], target: i32) -> SearchOutcome;
}
