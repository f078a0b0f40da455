//! The growable output buffer the codec appends to.
//!
//! Every producing operation in this crate ([`crate::encode`],
//! [`crate::repair`], [`crate::case_fold`]) writes through [`ByteSink`]
//! rather than returning freshly allocated buffers, so callers keep control
//! of allocation and can interleave codec output with their own writes. The
//! codec only ever appends; it never reads a sink back and never assumes
//! anything about its growth strategy.
//!
//! Output is raw bytes, not `str`: the encoder's historical single-byte
//! forms for U+FFFE/U+FFFF fall outside UTF-8, so a `String` sink would be
//! unsound. [`Vec<u8>`] and [`bstr::BString`] are the provided impls.

use alloc::vec::Vec;

use bstr::BString;

/// An append-only byte buffer owned by the caller.
pub trait ByteSink {
    /// Append `bytes` to the end of the sink, preserving order.
    fn put(&mut self, bytes: &[u8]);
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl ByteSink for BString {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn put(&mut self, bytes: &[u8]) {
        (**self).put(bytes);
    }
}
