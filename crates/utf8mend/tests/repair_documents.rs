#![allow(missing_docs)]

mod common;

use bstr::ByteSlice;
use common::{FIXTURES, spliced};
use rstest::rstest;
use utf8mend::{Scalars, case_folded, east_asian_width, is_space, repaired};

#[test]
fn fixtures_pass_through_untouched() {
    for text in FIXTURES {
        assert_eq!(
            repaired(text.as_bytes()).as_bstr(),
            text.as_bytes().as_bstr(),
            "fixture mangled: {text}"
        );
    }
}

#[rstest]
#[case(&[0xFF])]
#[case(&[0xC0, 0x80])]
#[case(&[0xED, 0xA0, 0x80])]
#[case(&[0x00])]
#[case(&[0xF4, 0x90, 0x80, 0x80])]
fn damage_anywhere_yields_one_marker(#[case] damage: &[u8]) {
    for text in FIXTURES {
        for at in [0, 1, text.len() / 2, text.len()] {
            let (bytes, boundary) = spliced(text, at, damage);
            let out = repaired(&bytes);
            let expected: Vec<u8> = [
                &text.as_bytes()[..boundary],
                "\u{FFFD}".as_bytes(),
                &text.as_bytes()[boundary..],
            ]
            .concat();
            assert_eq!(
                out.as_bstr(),
                expected.as_bstr(),
                "damage {damage:X?} at {at} in {text}"
            );
        }
    }
}

#[test]
fn repaired_fixtures_decode_end_to_end() {
    for text in FIXTURES {
        let (bytes, _) = spliced(text, 3, &[0x80, 0x80]);
        let out = repaired(&bytes);
        // every scalar in the repaired stream decodes cleanly
        assert!(Scalars::new(&out).all(|step| step.is_ok()));
    }
}

#[test]
fn folding_fixtures_is_caseless() {
    for text in FIXTURES {
        let folded = case_folded(text.as_bytes());
        let upper_then_folded = case_folded(text.to_uppercase().as_bytes());
        // uppercasing first must not change the folded form for these
        // fixtures (no fixture hits the locale-dependent exceptions)
        assert_eq!(
            folded.as_bstr(),
            upper_then_folded.as_bstr(),
            "fold not caseless for: {text}"
        );
    }
}

#[test]
fn classification_drives_simple_layout() {
    // a toy layout pass over a CJK fixture: columns = 2 per Wide/Fullwidth
    let text = "全角：ＡＢＣ　半角：ｱｲｳ";
    let mut columns = 0usize;
    for step in Scalars::new(text.as_bytes()) {
        let scalar = step.unwrap().scalar;
        if is_space(scalar) {
            columns += 1;
            continue;
        }
        columns += match east_asian_width(scalar) {
            utf8mend::EastAsianWidth::Wide | utf8mend::EastAsianWidth::Fullwidth => 2,
            _ => 1,
        };
    }
    // every non-space char in this fixture is Wide, Fullwidth, or
    // Halfwidth, so the column count must exceed the char count
    assert_eq!(columns, 22);
    assert!(columns > text.chars().count());
}
