//! Search result representation
//!
//! `SearchOutcome` carries absence explicitly. The `-1` sentinel survives only
//! at the edges through `to_sentinel` / `from_sentinel`.

/// Sentinel used by index-returning callers to signal "no match".
pub const NOT_FOUND_SENTINEL: i64 = -1;

/// Result of a single search call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// An element equal to the target sits at this 0-based position.
    Found(usize),
    /// No element equals the target.
    NotFound,
}

impl SearchOutcome {
    /// Matching index, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// Whether a matching element was located.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Convert to the index-or-`-1` convention.
    pub fn to_sentinel(&self) -> i64 {
        match *self {
            // Slice lengths never exceed isize::MAX, so this cannot wrap.
            Self::Found(index) => index as i64,
            Self::NotFound => NOT_FOUND_SENTINEL,
        }
    }

    /// Convert from the index-or-`-1` convention. Any negative value is absence.
    pub fn from_sentinel(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(index) => Self::Found(index),
            Err(_) => Self::NotFound,
        }
    }
}

impl From<SearchOutcome> for Option<usize> {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}
