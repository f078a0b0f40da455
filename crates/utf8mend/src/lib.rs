//! A validating, repairing UTF-8 codec.
//!
//! `utf8mend` accepts byte streams that are *claimed* to be UTF-8 but may not
//! be, and repairs them into guaranteed-valid UTF-8 by substituting U+FFFD
//! for every malformed sequence and every embedded NUL. Around that pipeline
//! it provides the primitives the repair scan is built from: per-sequence
//! [`validate`]/[`decode`], a canonical [`encode`], full Unicode
//! [`case_fold`]ing, and code point classification (whitespace, punctuation,
//! East Asian width).
//!
//! Malformed input is a first-class expected case, not an exceptional one:
//! [`decode`] and [`validate`] report how many bytes to skip instead of
//! failing the caller, and [`repair`]/[`case_fold`] never fail at all.
//!
//! ```
//! use utf8mend::repaired;
//!
//! let fixed = repaired(b"caf\xC3\xA9 \xFF au lait");
//! assert_eq!(fixed, "café \u{FFFD} au lait".as_bytes());
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod error;
mod repair;
mod scan;
mod sink;

#[cfg(any(feature = "classify", feature = "fold"))]
mod tables;

#[cfg(feature = "classify")]
mod classify;
#[cfg(feature = "fold")]
mod fold;

#[cfg(test)]
mod tests;

pub use decode::{Decoded, Scalars, decode};
pub use encode::{REPLACEMENT, encode};
pub use error::{Malformed, MalformedKind};
pub use repair::{repair, repaired};
pub use scan::{sequence_len, validate};
pub use sink::ByteSink;

#[cfg(feature = "classify")]
pub use classify::{EastAsianWidth, east_asian_width, is_punctuation, is_space};
#[cfg(feature = "fold")]
pub use fold::{case_fold, case_folded};
