//! Domain Layer - Pure search logic
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Never mutates or retains the caller's sequence

pub mod outcome;
pub mod search;

pub use outcome::{SearchOutcome, NOT_FOUND_SENTINEL};
pub use search::{max_probes, search, search_sentinel, search_with_stats, SearchStats};
