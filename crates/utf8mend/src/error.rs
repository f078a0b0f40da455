use thiserror::Error;

/// A byte sequence the codec refuses to pass through.
///
/// This is a sentinel, not a fatal error: `len` is the number of bytes the
/// caller must skip to resume scanning past the offending span. The looping
/// consumers ([`crate::repair`], [`crate::case_fold`]) substitute one
/// replacement marker per `Malformed` and continue.
///
/// `len` is at least 1 whenever the input was non-empty; a truncated report
/// on empty input carries `len == 0`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} spanning {len} byte(s)")]
pub struct Malformed {
    /// Which validity rule the sequence broke.
    pub kind: MalformedKind,
    /// Number of bytes confirmed invalid or insufficient.
    pub len: usize,
}

/// The validity rule a [`Malformed`] sequence broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedKind {
    /// The byte cannot begin any UTF-8 sequence (a bare continuation byte,
    /// or 0xF8..=0xFF).
    #[error("invalid leading byte")]
    InvalidLeadingByte,
    /// Fewer bytes remain than the leading byte promises.
    #[error("truncated sequence")]
    Truncated,
    /// A byte inside the sequence does not match the 10xxxxxx continuation
    /// pattern.
    #[error("malformed continuation byte")]
    BadContinuation,
    /// The sequence encodes a value representable in fewer bytes.
    #[error("overlong encoding")]
    Overlong,
    /// A three-byte sequence encoding a UTF-16 surrogate half.
    #[error("surrogate encoding")]
    Surrogate,
    /// The assembled value exceeds U+10FFFF.
    #[error("value above U+10FFFF")]
    OutOfRange,
    /// ASCII NUL: technically well-formed, rejected unconditionally by the
    /// repair pipeline.
    #[error("embedded NUL")]
    EmbeddedNul,
}
