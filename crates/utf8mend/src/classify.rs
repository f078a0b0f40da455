//! Code point classification: whitespace, punctuation, East Asian width.
//!
//! Three independent pure predicates consumed by layout and inline-parsing
//! layers. None of them touch the codec state; they accept any `u32`,
//! including values no decoder would produce, and simply report no
//! membership for them.

use crate::tables::{contains, punct, width};

/// Whether `scalar` is whitespace: Unicode category Zs, plus TAB, LF, FF,
/// and CR.
///
/// ```
/// assert!(utf8mend::is_space(0x20));
/// assert!(utf8mend::is_space(0xA0)); // NO-BREAK SPACE
/// assert!(utf8mend::is_space(0x3000)); // IDEOGRAPHIC SPACE
/// assert!(!utf8mend::is_space(u32::from('A')));
/// ```
#[must_use]
pub fn is_space(scalar: u32) -> bool {
    matches!(
        scalar,
        9 | 10 | 12 | 13 | 32 | 0xA0 | 0x1680 | 0x202F | 0x205F | 0x3000
    ) || (0x2000..=0x200A).contains(&scalar)
}

/// Whether `scalar` is punctuation: Unicode categories Pc, Pd, Pe, Pf,
/// Pi, Po, and Ps.
///
/// Below 128 this defers to the ASCII predicate; everything else is a
/// range-table lookup.
///
/// ```
/// assert!(utf8mend::is_punctuation(u32::from('!')));
/// assert!(utf8mend::is_punctuation(0x00BF)); // INVERTED QUESTION MARK
/// assert!(!utf8mend::is_punctuation(u32::from('a')));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn is_punctuation(scalar: u32) -> bool {
    if scalar < 128 {
        return (scalar as u8).is_ascii_punctuation();
    }
    contains(punct::PUNCTUATION, scalar)
}

/// East Asian width category of a code point.
///
/// `Unknown` is the sentinel for code points in no category's range set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EastAsianWidth {
    Ambiguous,
    Fullwidth,
    Halfwidth,
    Neutral,
    Narrow,
    Wide,
    Unknown,
}

/// Classify `scalar` by East Asian width.
///
/// The category range sets are mutually exclusive; the fixed probe order
/// (Ambiguous, Fullwidth, Halfwidth, Neutral, Narrow, Wide) is kept anyway
/// so any transcription overlap resolves deterministically.
///
/// ```
/// use utf8mend::{EastAsianWidth, east_asian_width};
///
/// assert_eq!(east_asian_width(u32::from('A')), EastAsianWidth::Narrow);
/// assert_eq!(east_asian_width(0xFF21), EastAsianWidth::Fullwidth);
/// assert_eq!(east_asian_width(0x4E00), EastAsianWidth::Wide);
/// assert_eq!(east_asian_width(0x0301), EastAsianWidth::Ambiguous);
/// ```
#[must_use]
pub fn east_asian_width(scalar: u32) -> EastAsianWidth {
    if contains(width::AMBIGUOUS, scalar) {
        EastAsianWidth::Ambiguous
    } else if contains(width::FULLWIDTH, scalar) {
        EastAsianWidth::Fullwidth
    } else if contains(width::HALFWIDTH, scalar) {
        EastAsianWidth::Halfwidth
    } else if contains(width::NEUTRAL, scalar) {
        EastAsianWidth::Neutral
    } else if contains(width::NARROW, scalar) {
        EastAsianWidth::Narrow
    } else if contains(width::WIDE, scalar) {
        EastAsianWidth::Wide
    } else {
        EastAsianWidth::Unknown
    }
}
