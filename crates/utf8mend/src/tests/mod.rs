use quickcheck::QuickCheck;

mod property_agreement;
mod property_roundtrip;


/// Property-test budget: generous locally, trimmed on CI.
fn qc() -> QuickCheck {
    let tests = if is_ci::cached() { 100 } else { 400 };
    QuickCheck::new().tests(tests)
}
