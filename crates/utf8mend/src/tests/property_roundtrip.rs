use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::{decode, encode};

fn encoded(scalar: u32) -> Vec<u8> {
    let mut out = Vec::new();
    encode(scalar, &mut out);
    out
}

/// Every scalar the decoder can produce survives an encode/decode trip.
/// The two historical noncharacters are excluded: their single raw bytes
/// are deliberately not decodable UTF-8.
#[test]
fn exhaustive_round_trip() {
    for scalar in (0u32..=0x10_FFFF)
        .filter(|s| !(0xD800..0xE000).contains(s))
        .filter(|s| *s != 0xFFFE && *s != 0xFFFF)
    {
        let bytes = encoded(scalar);
        let back = decode(&bytes).unwrap_or_else(|flaw| {
            panic!("U+{scalar:04X} encoded to undecodable bytes: {flaw}")
        });
        assert_eq!(back.scalar, scalar);
        assert_eq!(back.len, bytes.len());
    }
}

#[quickcheck]
fn encoding_matches_core_utf8(c: char) -> bool {
    let scalar = u32::from(c);
    if scalar == 0xFFFE || scalar == 0xFFFF {
        return true; // historical single-byte forms, checked elsewhere
    }
    let mut reference = [0u8; 4];
    c.encode_utf8(&mut reference);
    encoded(scalar) == reference[..c.len_utf8()]
}

#[quickcheck]
fn decode_agrees_with_core_str(s: alloc::string::String) -> bool {
    let bytes = s.as_bytes();
    let mut offset = 0;
    for expected in s.chars() {
        let Ok(decoded) = decode(&bytes[offset..]) else {
            return false;
        };
        if decoded.scalar != u32::from(expected) || decoded.len != expected.len_utf8() {
            return false;
        }
        offset += decoded.len;
    }
    offset == bytes.len()
}
