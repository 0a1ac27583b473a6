//! # BS-01 Binary Search
//!
//! Locates a target value inside an ascending sequence of integers.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure search logic, no I/O
//!   - `search`: Bounds-convergence binary search
//!   - `SearchOutcome`: Found index or absence
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `SearchApi`: Driving port (inbound API)
//!
//! - **Service Layer** (`service`): Orchestration
//!   - `BinarySearchService`: Implements `SearchApi`
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `Found(i)` implies `sequence[i] == target`
//! - **INVARIANT-2**: On ascending input, `NotFound` implies the target is absent
//! - **INVARIANT-3**: At most `⌈log2(n+1)⌉` probes per call
//!
//! The sequence is never checked for ordering. On unsorted input the result
//! may be wrong, but the call still terminates and never panics.
//!
//! ## Usage Example
//!
//! ```
//! use bs_01_binary_search::{search, SearchOutcome};
//!
//! let values = [1, 3, 5, 7, 9, 11];
//! assert_eq!(search(&values, &7), SearchOutcome::Found(3));
//! assert_eq!(search(&values, &4), SearchOutcome::NotFound);
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{
    max_probes, search, search_sentinel, search_with_stats, SearchOutcome, SearchStats,
    NOT_FOUND_SENTINEL,
};
pub use ports::SearchApi;
pub use service::BinarySearchService;
