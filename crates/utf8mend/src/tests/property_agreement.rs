//! Cross-check between the two natural formulations of RFC 3629 validity:
//! the byte-boundary rules `validate` applies, and the assembled-value
//! limits a decoder would check instead. Keeping both in the library is how
//! the rules drift apart; the second formulation therefore survives only as
//! this test's reference model.

use alloc::vec::Vec;

use quickcheck::TestResult;

use crate::{sequence_len, validate};

/// Reference model: assemble the value, then apply the numeric limits.
fn assembled_value_check(input: &[u8]) -> Result<usize, usize> {
    let Some(&lead) = input.first() else {
        return Err(0);
    };
    let len = sequence_len(lead);
    if len == 0 {
        return Err(1);
    }
    if input.len() < len {
        return Err(input.len());
    }
    for (k, &byte) in input.iter().enumerate().take(len).skip(1) {
        if byte & 0xC0 != 0x80 {
            return Err(k);
        }
    }
    let mut value = u32::from(lead)
        & match len {
            1 => 0x7F,
            2 => 0x1F,
            3 => 0x0F,
            _ => 0x07,
        };
    for &byte in &input[1..len] {
        value = (value << 6) | u32::from(byte & 0x3F);
    }
    let in_range = match len {
        1 => true,
        2 => value >= 0x80,
        3 => value >= 0x800 && !(0xD800..0xE000).contains(&value),
        _ => value >= 0x1_0000 && value < 0x11_0000,
    };
    if in_range { Ok(len) } else { Err(len) }
}

fn agrees(window: &[u8]) -> bool {
    let reference = assembled_value_check(window);
    match validate(window) {
        Ok(len) => reference == Ok(len),
        Err(flaw) => reference == Err(flaw.len),
    }
}

#[test]
fn agreement_on_all_two_byte_sequences() {
    for lead in 0xC0..=0xDFu8 {
        for next in 0x00..=0xFFu8 {
            assert!(agrees(&[lead, next]), "disagree on {lead:#X} {next:#X}");
        }
    }
}

#[test]
fn agreement_on_all_three_byte_sequences() {
    for lead in 0xE0..=0xEFu8 {
        for c1 in 0x00..=0xFFu8 {
            for c2 in [0x00, 0x7F, 0x80, 0x9F, 0xA0, 0xBF, 0xC0, 0xFF] {
                assert!(
                    agrees(&[lead, c1, c2]),
                    "disagree on {lead:#X} {c1:#X} {c2:#X}"
                );
            }
        }
    }
}

#[test]
fn agreement_on_four_byte_edges() {
    let edges = [0x00u8, 0x7F, 0x80, 0x8F, 0x90, 0xBF, 0xC0, 0xFF];
    for lead in 0xF0..=0xF7u8 {
        for c1 in 0x00..=0xFFu8 {
            for c2 in edges {
                for c3 in edges {
                    assert!(agrees(&[lead, c1, c2, c3]));
                }
            }
        }
    }
}

#[test]
fn agreement_on_arbitrary_windows() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        for start in 0..bytes.len() {
            if !agrees(&bytes[start..]) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }
    super::qc().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}
