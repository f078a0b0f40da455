//! Leading-byte classification and per-sequence validation.
//!
//! [`validate`] is the single source of truth for RFC 3629 validity in this
//! crate: it applies the continuation-pattern check plus the boundary rules
//! that reject overlong encodings, surrogate halves, and values above
//! U+10FFFF, all expressed on raw byte values. [`crate::decode`] assembles a
//! scalar only from sequences this module has already accepted, and the
//! repair pipeline skips exactly the spans it reports.

use crate::error::{Malformed, MalformedKind};

/// Expected sequence length for every possible leading byte: 1 for ASCII,
/// 2–4 for multi-byte leads, 0 for bytes that cannot begin a sequence
/// (bare continuations 0x80..=0xBF and 0xF8..=0xFF).
#[rustfmt::skip]
static SEQUENCE_CLASS: [u8; 256] = [
    // 0x00..=0x7F: ASCII
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    // 0x80..=0xBF: continuation bytes, invalid as a lead
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0xC0..=0xDF: two-byte leads
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    // 0xE0..=0xEF: three-byte leads
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    // 0xF0..=0xF7: four-byte leads; 0xF8..=0xFF invalid
    4, 4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Expected sequence length for a leading byte.
///
/// Pure, total, constant-time; 0 means `byte` cannot begin a sequence.
///
/// ```
/// assert_eq!(utf8mend::sequence_len(b'a'), 1);
/// assert_eq!(utf8mend::sequence_len(0xC3), 2);
/// assert_eq!(utf8mend::sequence_len(0x80), 0);
/// assert_eq!(utf8mend::sequence_len(0xF9), 0);
/// ```
#[must_use]
pub fn sequence_len(byte: u8) -> usize {
    usize::from(SEQUENCE_CLASS[usize::from(byte)])
}

/// Validate one UTF-8 sequence at the start of `input` per RFC 3629.
///
/// Returns the sequence length on success. On failure the [`Malformed`]
/// carries the number of bytes confirmed invalid or insufficient:
///
/// - invalid leading byte → 1
/// - truncated sequence at end of input → the available length
/// - continuation mismatch at offset `k` → `k`
/// - overlong / surrogate / out-of-range sequence → the declared length
///
/// The last three classes are detected on raw byte values (for instance a
/// lead of 0xC0/0xC1 is always overlong, and 0xED requires its first
/// continuation below 0xA0 to stay out of the surrogate range), so no
/// scalar is materialized here.
///
/// ```
/// use utf8mend::{validate, MalformedKind};
///
/// assert_eq!(validate("é".as_bytes()), Ok(2));
/// let overlong = validate(b"\xC0\x80").unwrap_err();
/// assert_eq!((overlong.kind, overlong.len), (MalformedKind::Overlong, 2));
/// ```
///
/// # Errors
///
/// Returns [`Malformed`] as described above; empty input reports
/// [`MalformedKind::Truncated`] with `len == 0`.
pub fn validate(input: &[u8]) -> Result<usize, Malformed> {
    let Some(&lead) = input.first() else {
        return Err(Malformed {
            kind: MalformedKind::Truncated,
            len: 0,
        });
    };
    let len = sequence_len(lead);
    if len == 0 {
        return Err(Malformed {
            kind: MalformedKind::InvalidLeadingByte,
            len: 1,
        });
    }
    if input.len() < len {
        return Err(Malformed {
            kind: MalformedKind::Truncated,
            len: input.len(),
        });
    }
    for (k, &byte) in input.iter().enumerate().take(len).skip(1) {
        if byte & 0xC0 != 0x80 {
            return Err(Malformed {
                kind: MalformedKind::BadContinuation,
                len: k,
            });
        }
    }
    let reject = |kind| Err(Malformed { kind, len });
    match len {
        2 if lead < 0xC2 => reject(MalformedKind::Overlong),
        3 if lead == 0xE0 && input[1] < 0xA0 => reject(MalformedKind::Overlong),
        3 if lead == 0xED && input[1] >= 0xA0 => reject(MalformedKind::Surrogate),
        4 if lead == 0xF0 && input[1] < 0x90 => reject(MalformedKind::Overlong),
        4 if lead > 0xF4 || (lead == 0xF4 && input[1] >= 0x90) => {
            reject(MalformedKind::OutOfRange)
        }
        _ => Ok(len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_table_shape() {
        assert!((0x00..=0x7F).all(|b| sequence_len(b) == 1));
        assert!((0x80..=0xBF).all(|b| sequence_len(b) == 0));
        assert!((0xC0..=0xDF).all(|b| sequence_len(b) == 2));
        assert!((0xE0..=0xEF).all(|b| sequence_len(b) == 3));
        assert!((0xF0..=0xF7).all(|b| sequence_len(b) == 4));
        assert!((0xF8..=0xFF).all(|b| sequence_len(b) == 0));
    }

    #[test]
    fn truncation_reports_available_length() {
        let err = validate(b"\xE2\x82").unwrap_err();
        assert_eq!((err.kind, err.len), (MalformedKind::Truncated, 2));
        let err = validate(b"\xF0").unwrap_err();
        assert_eq!((err.kind, err.len), (MalformedKind::Truncated, 1));
        let err = validate(b"").unwrap_err();
        assert_eq!((err.kind, err.len), (MalformedKind::Truncated, 0));
    }

    #[test]
    fn continuation_mismatch_reports_offset() {
        let err = validate(b"\xE2\x82Z").unwrap_err();
        assert_eq!((err.kind, err.len), (MalformedKind::BadContinuation, 2));
        let err = validate(b"\xE2Z\x82").unwrap_err();
        assert_eq!((err.kind, err.len), (MalformedKind::BadContinuation, 1));
    }

    #[test]
    fn boundary_leads() {
        // lowest legal two-byte lead
        assert_eq!(validate(b"\xC2\x80"), Ok(2));
        // E0 requires first continuation >= A0
        assert_eq!(validate(b"\xE0\xA0\x80"), Ok(3));
        assert_eq!(
            validate(b"\xE0\x9F\xBF").unwrap_err().kind,
            MalformedKind::Overlong
        );
        // ED requires first continuation < A0
        assert_eq!(validate(b"\xED\x9F\xBF"), Ok(3));
        assert_eq!(
            validate(b"\xED\xA0\x80").unwrap_err().kind,
            MalformedKind::Surrogate
        );
        // F0 requires first continuation >= 90
        assert_eq!(validate(b"\xF0\x90\x80\x80"), Ok(4));
        assert_eq!(
            validate(b"\xF0\x8F\xBF\xBF").unwrap_err().kind,
            MalformedKind::Overlong
        );
        // F4 caps the code space at U+10FFFF
        assert_eq!(validate(b"\xF4\x8F\xBF\xBF"), Ok(4));
        assert_eq!(
            validate(b"\xF4\x90\x80\x80").unwrap_err().kind,
            MalformedKind::OutOfRange
        );
        assert_eq!(
            validate(b"\xF5\x80\x80\x80").unwrap_err().kind,
            MalformedKind::OutOfRange
        );
    }
}
