//! Case folding for case-insensitive comparison.

use alloc::vec::Vec;

use crate::decode::Scalars;
use crate::encode::{REPLACEMENT, encode};
use crate::sink::ByteSink;
use crate::tables::fold::{FOLD_EXPANSIONS, FOLD_RANGES};

enum Folded {
    Identity,
    Single(u32),
    Expansion(&'static [u32]),
}

/// Full Unicode case folding of one code point: zero or one table hit.
fn fold_scalar(scalar: u32) -> Folded {
    if let Ok(idx) = FOLD_EXPANSIONS.binary_search_by_key(&scalar, |&(from, _)| from) {
        return Folded::Expansion(FOLD_EXPANSIONS[idx].1);
    }
    let idx = FOLD_RANGES.partition_point(|range| range.lo <= scalar);
    if idx > 0 {
        let range = &FOLD_RANGES[idx - 1];
        if scalar <= range.hi && (scalar - range.lo) % range.stride == 0 {
            return Folded::Single(scalar.wrapping_add_signed(range.delta));
        }
    }
    Folded::Identity
}

/// Append the case-folded form of `input` to `out`.
///
/// Code points are decoded one at a time, mapped through the full Unicode
/// case-folding table (one code point may fold to several, e.g. U+00DF "ß"
/// to "ss"), and re-encoded. Folding is for case-insensitive comparison
/// and is not the same as lowercasing.
///
/// Well-formed input stays well-formed; malformed sequences never abort
/// the fold — each one becomes a single U+FFFD and scanning resumes past
/// its reported magnitude.
///
/// ```
/// use utf8mend::case_fold;
///
/// let mut out = Vec::new();
/// case_fold("É".as_bytes(), &mut out);
/// assert_eq!(out, "é".as_bytes());
/// ```
pub fn case_fold(input: &[u8], out: &mut impl ByteSink) {
    for step in Scalars::new(input) {
        match step {
            Ok(decoded) => match fold_scalar(decoded.scalar) {
                Folded::Identity => encode(decoded.scalar, out),
                Folded::Single(folded) => encode(folded, out),
                Folded::Expansion(folded) => {
                    for &scalar in folded {
                        encode(scalar, out);
                    }
                }
            },
            Err(_) => out.put(&REPLACEMENT),
        }
    }
}

/// [`case_fold`] into a freshly allocated buffer.
///
/// ```
/// assert_eq!(utf8mend::case_folded("Straße".as_bytes()), b"strasse");
/// ```
#[must_use]
pub fn case_folded(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    case_fold(input, &mut out);
    out
}
