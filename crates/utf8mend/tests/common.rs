#![allow(missing_docs, dead_code)]

/// Multilingual fixture documents, all valid NUL-free UTF-8.
pub const FIXTURES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Le cœur a ses raisons que la raison ne connaît point.",
    "Größenwahn: ÄÖÜ äöü ß ẞ",
    "Καλημέρα κόσμε — ΚΑΛΗΜΕΡΑ ΚΟΣΜΕ",
    "Привет, мир! ПРИВЕТ, МИР!",
    "こんにちは世界。カタカナ、ひらがな、漢字。",
    "全角：ＡＢＣ　半角：ｱｲｳ",
    "🦀 emoji and flags 🇺🇳 and ZWJ 👩‍🚀 sequences",
    "mixed: tab\tnewline\nและข้อความไทย وعربي",
];

/// Corrupt `text` by splicing `damage` in at `at` (clamped to a char
/// boundary), returning the damaged byte buffer and the two clean halves.
pub fn spliced(text: &str, mut at: usize, damage: &[u8]) -> (Vec<u8>, usize) {
    at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    let mut bytes = Vec::with_capacity(text.len() + damage.len());
    bytes.extend_from_slice(&text.as_bytes()[..at]);
    bytes.extend_from_slice(damage);
    bytes.extend_from_slice(&text.as_bytes()[at..]);
    (bytes, at)
}
