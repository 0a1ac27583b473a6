//! Bounds-convergence binary search
//!
//! Two inclusive bounds `[left, right]` narrow monotonically until the window
//! is empty or the midpoint matches.
//!
//! ## Algorithm
//!
//! 1. `left = 0`, `right = len - 1`
//! 2. While `left <= right`:
//!    - `mid = left + (right - left) / 2`
//!    - equal: return `mid`
//!    - less: `left = mid + 1`
//!    - greater: `right = mid - 1`
//! 3. Window empty: not found
//!
//! The midpoint is never computed as `(left + right) / 2`, which overflows for
//! bounds near the top of the index range.

use std::cmp::Ordering;

use super::outcome::SearchOutcome;

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of midpoint comparisons performed
    pub probes: usize,
}

/// Upper bound on probes for a sequence of `len` elements: `⌈log2(len + 1)⌉`.
pub fn max_probes(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// Find `target` in an ascending `sequence`.
///
/// With duplicates, any matching index may be returned. Ordering of the input
/// is assumed, not checked.
pub fn search<T: Ord>(sequence: &[T], target: &T) -> SearchOutcome {
    search_with_stats(sequence, target).0
}

/// Same as [`search`], also reporting how many probes it took.
pub fn search_with_stats<T: Ord>(sequence: &[T], target: &T) -> (SearchOutcome, SearchStats) {
    let mut stats = SearchStats::default();

    let Some(mut right) = sequence.len().checked_sub(1) else {
        return (SearchOutcome::NotFound, stats);
    };
    let mut left = 0usize;

    while left <= right {
        let mid = left + (right - left) / 2;
        stats.probes += 1;

        match sequence[mid].cmp(target) {
            Ordering::Equal => return (SearchOutcome::Found(mid), stats),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => right = next,
                // right would drop below zero: window is empty
                None => break,
            },
        }
    }

    (SearchOutcome::NotFound, stats)
}

/// Index-or-`-1` variant for callers that still speak the sentinel convention.
pub fn search_sentinel(sequence: &[i32], target: i32) -> i64 {
    search(sequence, &target).to_sentinel()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::NOT_FOUND_SENTINEL;
    use proptest::prelude::*;

    const ODDS: [i32; 6] = [1, 3, 5, 7, 9, 11];

    #[test]
    fn test_finds_interior_element() {
        assert_eq!(search(&ODDS, &7), SearchOutcome::Found(3));
        assert_eq!(search(&ODDS, &5), SearchOutcome::Found(2));
    }

    #[test]
    fn test_missing_element_between_values() {
        assert_eq!(search(&ODDS, &4), SearchOutcome::NotFound);
        assert_eq!(search_sentinel(&ODDS, 4), NOT_FOUND_SENTINEL);
    }

    #[test]
    fn test_missing_element_outside_range() {
        assert_eq!(search(&ODDS, &0), SearchOutcome::NotFound);
        assert_eq!(search(&ODDS, &12), SearchOutcome::NotFound);
        assert_eq!(search(&ODDS, &i32::MIN), SearchOutcome::NotFound);
        assert_eq!(search(&ODDS, &i32::MAX), SearchOutcome::NotFound);
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [i32; 0] = [];
        let (outcome, stats) = search_with_stats(&empty, &5);
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(stats.probes, 0);
        assert_eq!(search_sentinel(&empty, 5), -1);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(search(&[42], &42), SearchOutcome::Found(0));
        assert_eq!(search(&[42], &41), SearchOutcome::NotFound);
        assert_eq!(search(&[42], &43), SearchOutcome::NotFound);
    }

    #[test]
    fn test_first_and_last_boundaries() {
        assert_eq!(search(&ODDS, &1), SearchOutcome::Found(0));
        assert_eq!(search(&ODDS, &11), SearchOutcome::Found(ODDS.len() - 1));
    }

    #[test]
    fn test_duplicates_return_a_matching_index() {
        let twos = [2, 2, 2];
        let index = search(&twos, &2).index().expect("should find a duplicate");
        assert!(index < twos.len());
        assert_eq!(twos[index], 2);
    }

    #[test]
    fn test_midpoint_convergence_order() {
        // [1,3,5,7,9,11] probing for 7: mid=2 (5), mid=4 (9), mid=3 (7)
        let (outcome, stats) = search_with_stats(&ODDS, &7);
        assert_eq!(outcome, SearchOutcome::Found(3));
        assert_eq!(stats.probes, 3);

        // First midpoint hit needs a single probe
        let (outcome, stats) = search_with_stats(&ODDS, &5);
        assert_eq!(outcome, SearchOutcome::Found(2));
        assert_eq!(stats.probes, 1);
    }

    #[test]
    fn test_negative_values() {
        let values = [-40, -7, -3, 0, 12];
        assert_eq!(search(&values, &-7), SearchOutcome::Found(1));
        assert_eq!(search(&values, &-4), SearchOutcome::NotFound);
    }

    #[test]
    fn test_idempotent() {
        let first = search(&ODDS, &9);
        for _ in 0..10 {
            assert_eq!(search(&ODDS, &9), first);
        }
    }

    #[test]
    fn test_unsorted_input_terminates() {
        // Behaviour is unspecified, but the call must finish without panicking.
        let shuffled = [9, 1, 7, 3, 11, 5];
        for target in 0..12 {
            if let SearchOutcome::Found(index) = search(&shuffled, &target) {
                assert_eq!(shuffled[index], target);
            }
        }
    }

    #[test]
    fn test_sequence_is_left_untouched() {
        let values = vec![1, 2, 3, 4, 5];
        let before = values.clone();
        let _ = search(&values, &4);
        assert_eq!(values, before);
    }

    #[test]
    fn test_max_probes() {
        assert_eq!(max_probes(0), 0);
        assert_eq!(max_probes(1), 1);
        assert_eq!(max_probes(2), 2);
        assert_eq!(max_probes(3), 2);
        assert_eq!(max_probes(6), 3);
        assert_eq!(max_probes(7), 3);
        assert_eq!(max_probes(8), 4);
    }

    #[test]
    fn test_works_for_any_ord() {
        let words = ["apple", "kiwi", "mango", "pear"];
        assert_eq!(search(&words, &"mango"), SearchOutcome::Found(2));
        assert_eq!(search(&words, &"fig"), SearchOutcome::NotFound);
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(any::<i32>(), 0..256).prop_map(|mut v| {
            v.sort_unstable();
            v
        })
    }

    proptest! {
        #[test]
        fn prop_present_target_is_found(values in sorted_vec(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!values.is_empty());
            let target = values[pick.index(values.len())];
            match search(&values, &target) {
                SearchOutcome::Found(index) => prop_assert_eq!(values[index], target),
                SearchOutcome::NotFound => prop_assert!(false, "present target reported missing"),
            }
        }

        #[test]
        fn prop_agrees_with_linear_scan(values in sorted_vec(), target in any::<i32>()) {
            let present = values.contains(&target);
            let outcome = search(&values, &target);
            prop_assert_eq!(outcome.is_found(), present);
            if !present {
                prop_assert_eq!(outcome.to_sentinel(), NOT_FOUND_SENTINEL);
            }
        }

        #[test]
        fn prop_probe_count_is_logarithmic(values in sorted_vec(), target in any::<i32>()) {
            let (_, stats) = search_with_stats(&values, &target);
            prop_assert!(stats.probes <= max_probes(values.len()));
        }
    }
}
