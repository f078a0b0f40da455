//! Generated Unicode range data.
//!
//! The sparse property sets are data, not logic: each table is a compact
//! sorted list of disjoint `(lo, hi)` intervals, and every classification
//! axis shares the one binary-search membership test below. Inline tests
//! assert the shape invariants the search relies on, so a regenerated
//! table cannot silently break lookups.

#[cfg(feature = "fold")]
pub(crate) mod fold;
#[cfg(feature = "classify")]
pub(crate) mod punct;
#[cfg(feature = "classify")]
pub(crate) mod width;

/// Whether `scalar` falls in one of the sorted, disjoint `ranges`.
#[cfg(feature = "classify")]
pub(crate) fn contains(ranges: &[(u32, u32)], scalar: u32) -> bool {
    use core::cmp::Ordering;

    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < scalar {
                Ordering::Less
            } else if lo > scalar {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
