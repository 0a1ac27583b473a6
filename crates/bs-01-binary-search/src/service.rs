//! # Binary Search Service
//!
//! Application service layer that implements the `SearchApi` trait and
//! delegates the lookup itself to the domain layer.

use tracing::debug;

use crate::domain::{search_with_stats, SearchOutcome};
use crate::ports::inbound::SearchApi;

/// Stateless search service.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearchService;

impl BinarySearchService {
    /// Create a new search service.
    pub fn new() -> Self {
        Self
    }
}

impl SearchApi for BinarySearchService {
    fn search(&self, sequence: &[i32], target: i32) -> SearchOutcome {
        let (outcome, stats) = search_with_stats(sequence, &target);

        debug!(
            len = sequence.len(),
            target,
            probes = stats.probes,
            found = ?outcome.index(),
            "Search completed"
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_thread_safe() {
        assert_send_sync::<BinarySearchService>();
    }

    #[test]
    fn test_service_matches_domain() {
        let service = BinarySearchService::new();
        let values = [1, 3, 5, 7, 9, 11];

        assert_eq!(service.search(&values, 9), SearchOutcome::Found(4));
        assert_eq!(service.search(&values, 2), SearchOutcome::NotFound);
        assert_eq!(service.search(&[], 5), SearchOutcome::NotFound);
    }

    #[test]
    fn test_service_behind_trait_object() {
        let api: Box<dyn SearchApi> = Box::new(BinarySearchService::new());
        assert_eq!(api.search(&[2, 2, 2], 2).index().map(|i| i < 3), Some(true));
    }

    #[test]
    fn test_shared_across_threads() {
        let service = Arc::new(BinarySearchService::new());
        let values: Arc<Vec<i32>> = Arc::new((0..1000).map(|i| i * 2).collect());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let service = service.clone();
                let values = values.clone();
                std::thread::spawn(move || service.search(&values, t * 100))
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let outcome = handle.join().expect("search thread panicked");
            assert_eq!(outcome, SearchOutcome::Found(t * 50));
        }
    }
}
