#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8mend::{Scalars, case_folded, repaired};

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    fold_first: bool,
}

fuzz_target!(|input: Input| {
    let subject = if input.fold_first {
        // folding is total on byte soup; its output goes through repair
        // like any other untrusted buffer
        case_folded(&input.bytes)
    } else {
        input.bytes.clone()
    };

    let fixed = repaired(&subject);

    // repair output must always parse as UTF-8 and carry no NUL
    let text = std::str::from_utf8(&fixed).expect("repair emitted invalid UTF-8");
    assert!(!text.bytes().any(|b| b == 0), "repair let a NUL through");

    // and must be a fixpoint
    assert_eq!(repaired(&fixed), fixed, "repair is not idempotent");

    // the scalar iterator must terminate and agree with the repaired view
    let steps = Scalars::new(&input.bytes).count();
    assert!(steps <= input.bytes.len());
});
