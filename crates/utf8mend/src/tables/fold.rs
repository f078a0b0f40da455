//! Full Unicode case folding data (statuses C and F of `CaseFolding.txt`),
//! compressed for binary search.
//!
//! One-to-one folds are stride runs: every code point `lo + k * stride`
//! up to `hi` folds to itself plus `delta`. One-to-many folds (for
//! instance U+00DF to "ss") live in the expansion list. Code points in
//! neither table fold to themselves.

/// A run of code points whose folds share one offset.
pub(crate) struct FoldRange {
    pub lo: u32,
    pub hi: u32,
    pub stride: u32,
    pub delta: i32,
}

pub(crate) static FOLD_RANGES: &[FoldRange] = &[
    FoldRange { lo: 0x0041, hi: 0x005A, stride: 1, delta: 32 },
    FoldRange { lo: 0x00B5, hi: 0x00B5, stride: 1, delta: 775 },
    FoldRange { lo: 0x00C0, hi: 0x00D6, stride: 1, delta: 32 },
    FoldRange { lo: 0x00D8, hi: 0x00DE, stride: 1, delta: 32 },
    FoldRange { lo: 0x0100, hi: 0x012E, stride: 2, delta: 1 },
    FoldRange { lo: 0x0132, hi: 0x0136, stride: 2, delta: 1 },
    FoldRange { lo: 0x0139, hi: 0x0147, stride: 2, delta: 1 },
    FoldRange { lo: 0x014A, hi: 0x0176, stride: 2, delta: 1 },
    FoldRange { lo: 0x0178, hi: 0x0178, stride: 1, delta: -121 },
    FoldRange { lo: 0x0179, hi: 0x017D, stride: 2, delta: 1 },
    FoldRange { lo: 0x017F, hi: 0x017F, stride: 1, delta: -268 },
    FoldRange { lo: 0x0181, hi: 0x0181, stride: 1, delta: 210 },
    FoldRange { lo: 0x0182, hi: 0x0184, stride: 2, delta: 1 },
    FoldRange { lo: 0x0186, hi: 0x0186, stride: 1, delta: 206 },
    FoldRange { lo: 0x0187, hi: 0x0187, stride: 1, delta: 1 },
    FoldRange { lo: 0x0189, hi: 0x018A, stride: 1, delta: 205 },
    FoldRange { lo: 0x018B, hi: 0x018B, stride: 1, delta: 1 },
    FoldRange { lo: 0x018E, hi: 0x018E, stride: 1, delta: 79 },
    FoldRange { lo: 0x018F, hi: 0x018F, stride: 1, delta: 202 },
    FoldRange { lo: 0x0190, hi: 0x0190, stride: 1, delta: 203 },
    FoldRange { lo: 0x0191, hi: 0x0191, stride: 1, delta: 1 },
    FoldRange { lo: 0x0193, hi: 0x0193, stride: 1, delta: 205 },
    FoldRange { lo: 0x0194, hi: 0x0194, stride: 1, delta: 207 },
    FoldRange { lo: 0x0196, hi: 0x0196, stride: 1, delta: 211 },
    FoldRange { lo: 0x0197, hi: 0x0197, stride: 1, delta: 209 },
    FoldRange { lo: 0x0198, hi: 0x0198, stride: 1, delta: 1 },
    FoldRange { lo: 0x019C, hi: 0x019C, stride: 1, delta: 211 },
    FoldRange { lo: 0x019D, hi: 0x019D, stride: 1, delta: 213 },
    FoldRange { lo: 0x019F, hi: 0x019F, stride: 1, delta: 214 },
    FoldRange { lo: 0x01A0, hi: 0x01A4, stride: 2, delta: 1 },
    FoldRange { lo: 0x01A6, hi: 0x01A6, stride: 1, delta: 218 },
    FoldRange { lo: 0x01A7, hi: 0x01A7, stride: 1, delta: 1 },
    FoldRange { lo: 0x01A9, hi: 0x01A9, stride: 1, delta: 218 },
    FoldRange { lo: 0x01AC, hi: 0x01AC, stride: 1, delta: 1 },
    FoldRange { lo: 0x01AE, hi: 0x01AE, stride: 1, delta: 218 },
    FoldRange { lo: 0x01AF, hi: 0x01AF, stride: 1, delta: 1 },
    FoldRange { lo: 0x01B1, hi: 0x01B2, stride: 1, delta: 217 },
    FoldRange { lo: 0x01B3, hi: 0x01B5, stride: 2, delta: 1 },
    FoldRange { lo: 0x01B7, hi: 0x01B7, stride: 1, delta: 219 },
    FoldRange { lo: 0x01B8, hi: 0x01B8, stride: 1, delta: 1 },
    FoldRange { lo: 0x01BC, hi: 0x01BC, stride: 1, delta: 1 },
    FoldRange { lo: 0x01C4, hi: 0x01C4, stride: 1, delta: 2 },
    FoldRange { lo: 0x01C5, hi: 0x01C5, stride: 1, delta: 1 },
    FoldRange { lo: 0x01C7, hi: 0x01C7, stride: 1, delta: 2 },
    FoldRange { lo: 0x01C8, hi: 0x01C8, stride: 1, delta: 1 },
    FoldRange { lo: 0x01CA, hi: 0x01CA, stride: 1, delta: 2 },
    FoldRange { lo: 0x01CB, hi: 0x01DB, stride: 2, delta: 1 },
    FoldRange { lo: 0x01DE, hi: 0x01EE, stride: 2, delta: 1 },
    FoldRange { lo: 0x01F1, hi: 0x01F1, stride: 1, delta: 2 },
    FoldRange { lo: 0x01F2, hi: 0x01F4, stride: 2, delta: 1 },
    FoldRange { lo: 0x01F6, hi: 0x01F6, stride: 1, delta: -97 },
    FoldRange { lo: 0x01F7, hi: 0x01F7, stride: 1, delta: -56 },
    FoldRange { lo: 0x01F8, hi: 0x021E, stride: 2, delta: 1 },
    FoldRange { lo: 0x0220, hi: 0x0220, stride: 1, delta: -130 },
    FoldRange { lo: 0x0222, hi: 0x0232, stride: 2, delta: 1 },
    FoldRange { lo: 0x023A, hi: 0x023A, stride: 1, delta: 10795 },
    FoldRange { lo: 0x023B, hi: 0x023B, stride: 1, delta: 1 },
    FoldRange { lo: 0x023D, hi: 0x023D, stride: 1, delta: -163 },
    FoldRange { lo: 0x023E, hi: 0x023E, stride: 1, delta: 10792 },
    FoldRange { lo: 0x0241, hi: 0x0241, stride: 1, delta: 1 },
    FoldRange { lo: 0x0243, hi: 0x0243, stride: 1, delta: -195 },
    FoldRange { lo: 0x0244, hi: 0x0244, stride: 1, delta: 69 },
    FoldRange { lo: 0x0245, hi: 0x0245, stride: 1, delta: 71 },
    FoldRange { lo: 0x0246, hi: 0x024E, stride: 2, delta: 1 },
    FoldRange { lo: 0x0345, hi: 0x0345, stride: 1, delta: 116 },
    FoldRange { lo: 0x0370, hi: 0x0372, stride: 2, delta: 1 },
    FoldRange { lo: 0x0376, hi: 0x0376, stride: 1, delta: 1 },
    FoldRange { lo: 0x037F, hi: 0x037F, stride: 1, delta: 116 },
    FoldRange { lo: 0x0386, hi: 0x0386, stride: 1, delta: 38 },
    FoldRange { lo: 0x0388, hi: 0x038A, stride: 1, delta: 37 },
    FoldRange { lo: 0x038C, hi: 0x038C, stride: 1, delta: 64 },
    FoldRange { lo: 0x038E, hi: 0x038F, stride: 1, delta: 63 },
    FoldRange { lo: 0x0391, hi: 0x03A1, stride: 1, delta: 32 },
    FoldRange { lo: 0x03A3, hi: 0x03AB, stride: 1, delta: 32 },
    FoldRange { lo: 0x03C2, hi: 0x03C2, stride: 1, delta: 1 },
    FoldRange { lo: 0x03CF, hi: 0x03CF, stride: 1, delta: 8 },
    FoldRange { lo: 0x03D0, hi: 0x03D0, stride: 1, delta: -30 },
    FoldRange { lo: 0x03D1, hi: 0x03D1, stride: 1, delta: -25 },
    FoldRange { lo: 0x03D5, hi: 0x03D5, stride: 1, delta: -15 },
    FoldRange { lo: 0x03D6, hi: 0x03D6, stride: 1, delta: -22 },
    FoldRange { lo: 0x03D8, hi: 0x03EE, stride: 2, delta: 1 },
    FoldRange { lo: 0x03F0, hi: 0x03F0, stride: 1, delta: -54 },
    FoldRange { lo: 0x03F1, hi: 0x03F1, stride: 1, delta: -48 },
    FoldRange { lo: 0x03F4, hi: 0x03F4, stride: 1, delta: -60 },
    FoldRange { lo: 0x03F5, hi: 0x03F5, stride: 1, delta: -64 },
    FoldRange { lo: 0x03F7, hi: 0x03F7, stride: 1, delta: 1 },
    FoldRange { lo: 0x03F9, hi: 0x03F9, stride: 1, delta: -7 },
    FoldRange { lo: 0x03FA, hi: 0x03FA, stride: 1, delta: 1 },
    FoldRange { lo: 0x03FD, hi: 0x03FF, stride: 1, delta: -130 },
    FoldRange { lo: 0x0400, hi: 0x040F, stride: 1, delta: 80 },
    FoldRange { lo: 0x0410, hi: 0x042F, stride: 1, delta: 32 },
    FoldRange { lo: 0x0460, hi: 0x0480, stride: 2, delta: 1 },
    FoldRange { lo: 0x048A, hi: 0x04BE, stride: 2, delta: 1 },
    FoldRange { lo: 0x04C0, hi: 0x04C0, stride: 1, delta: 15 },
    FoldRange { lo: 0x04C1, hi: 0x04CD, stride: 2, delta: 1 },
    FoldRange { lo: 0x04D0, hi: 0x052E, stride: 2, delta: 1 },
    FoldRange { lo: 0x0531, hi: 0x0556, stride: 1, delta: 48 },
    FoldRange { lo: 0x10A0, hi: 0x10C5, stride: 1, delta: 7264 },
    FoldRange { lo: 0x10C7, hi: 0x10C7, stride: 1, delta: 7264 },
    FoldRange { lo: 0x10CD, hi: 0x10CD, stride: 1, delta: 7264 },
    FoldRange { lo: 0x13F8, hi: 0x13FD, stride: 1, delta: -8 },
    FoldRange { lo: 0x1C80, hi: 0x1C80, stride: 1, delta: -6222 },
    FoldRange { lo: 0x1C81, hi: 0x1C81, stride: 1, delta: -6221 },
    FoldRange { lo: 0x1C82, hi: 0x1C82, stride: 1, delta: -6212 },
    FoldRange { lo: 0x1C83, hi: 0x1C84, stride: 1, delta: -6210 },
    FoldRange { lo: 0x1C85, hi: 0x1C85, stride: 1, delta: -6211 },
    FoldRange { lo: 0x1C86, hi: 0x1C86, stride: 1, delta: -6204 },
    FoldRange { lo: 0x1C87, hi: 0x1C87, stride: 1, delta: -6180 },
    FoldRange { lo: 0x1C88, hi: 0x1C88, stride: 1, delta: 35267 },
    FoldRange { lo: 0x1C90, hi: 0x1CBA, stride: 1, delta: -3008 },
    FoldRange { lo: 0x1CBD, hi: 0x1CBF, stride: 1, delta: -3008 },
    FoldRange { lo: 0x1E00, hi: 0x1E94, stride: 2, delta: 1 },
    FoldRange { lo: 0x1E9B, hi: 0x1E9B, stride: 1, delta: -58 },
    FoldRange { lo: 0x1EA0, hi: 0x1EFE, stride: 2, delta: 1 },
    FoldRange { lo: 0x1F08, hi: 0x1F0F, stride: 1, delta: -8 },
    FoldRange { lo: 0x1F18, hi: 0x1F1D, stride: 1, delta: -8 },
    FoldRange { lo: 0x1F28, hi: 0x1F2F, stride: 1, delta: -8 },
    FoldRange { lo: 0x1F38, hi: 0x1F3F, stride: 1, delta: -8 },
    FoldRange { lo: 0x1F48, hi: 0x1F4D, stride: 1, delta: -8 },
    FoldRange { lo: 0x1F59, hi: 0x1F5F, stride: 2, delta: -8 },
    FoldRange { lo: 0x1F68, hi: 0x1F6F, stride: 1, delta: -8 },
    FoldRange { lo: 0x1FB8, hi: 0x1FB9, stride: 1, delta: -8 },
    FoldRange { lo: 0x1FBA, hi: 0x1FBB, stride: 1, delta: -74 },
    FoldRange { lo: 0x1FBE, hi: 0x1FBE, stride: 1, delta: -7173 },
    FoldRange { lo: 0x1FC8, hi: 0x1FCB, stride: 1, delta: -86 },
    FoldRange { lo: 0x1FD8, hi: 0x1FD9, stride: 1, delta: -8 },
    FoldRange { lo: 0x1FDA, hi: 0x1FDB, stride: 1, delta: -100 },
    FoldRange { lo: 0x1FE8, hi: 0x1FE9, stride: 1, delta: -8 },
    FoldRange { lo: 0x1FEA, hi: 0x1FEB, stride: 1, delta: -112 },
    FoldRange { lo: 0x1FEC, hi: 0x1FEC, stride: 1, delta: -7 },
    FoldRange { lo: 0x1FF8, hi: 0x1FF9, stride: 1, delta: -128 },
    FoldRange { lo: 0x1FFA, hi: 0x1FFB, stride: 1, delta: -126 },
    FoldRange { lo: 0x2126, hi: 0x2126, stride: 1, delta: -7517 },
    FoldRange { lo: 0x212A, hi: 0x212A, stride: 1, delta: -8383 },
    FoldRange { lo: 0x212B, hi: 0x212B, stride: 1, delta: -8262 },
    FoldRange { lo: 0x2132, hi: 0x2132, stride: 1, delta: 28 },
    FoldRange { lo: 0x2160, hi: 0x216F, stride: 1, delta: 16 },
    FoldRange { lo: 0x2183, hi: 0x2183, stride: 1, delta: 1 },
    FoldRange { lo: 0x24B6, hi: 0x24CF, stride: 1, delta: 26 },
    FoldRange { lo: 0x2C00, hi: 0x2C2F, stride: 1, delta: 48 },
    FoldRange { lo: 0x2C60, hi: 0x2C60, stride: 1, delta: 1 },
    FoldRange { lo: 0x2C62, hi: 0x2C62, stride: 1, delta: -10743 },
    FoldRange { lo: 0x2C63, hi: 0x2C63, stride: 1, delta: -3814 },
    FoldRange { lo: 0x2C64, hi: 0x2C64, stride: 1, delta: -10727 },
    FoldRange { lo: 0x2C67, hi: 0x2C6B, stride: 2, delta: 1 },
    FoldRange { lo: 0x2C6D, hi: 0x2C6D, stride: 1, delta: -10780 },
    FoldRange { lo: 0x2C6E, hi: 0x2C6E, stride: 1, delta: -10749 },
    FoldRange { lo: 0x2C6F, hi: 0x2C6F, stride: 1, delta: -10783 },
    FoldRange { lo: 0x2C70, hi: 0x2C70, stride: 1, delta: -10782 },
    FoldRange { lo: 0x2C72, hi: 0x2C72, stride: 1, delta: 1 },
    FoldRange { lo: 0x2C75, hi: 0x2C75, stride: 1, delta: 1 },
    FoldRange { lo: 0x2C7E, hi: 0x2C7F, stride: 1, delta: -10815 },
    FoldRange { lo: 0x2C80, hi: 0x2CE2, stride: 2, delta: 1 },
    FoldRange { lo: 0x2CEB, hi: 0x2CED, stride: 2, delta: 1 },
    FoldRange { lo: 0x2CF2, hi: 0x2CF2, stride: 1, delta: 1 },
    FoldRange { lo: 0xA640, hi: 0xA66C, stride: 2, delta: 1 },
    FoldRange { lo: 0xA680, hi: 0xA69A, stride: 2, delta: 1 },
    FoldRange { lo: 0xA722, hi: 0xA72E, stride: 2, delta: 1 },
    FoldRange { lo: 0xA732, hi: 0xA76E, stride: 2, delta: 1 },
    FoldRange { lo: 0xA779, hi: 0xA77B, stride: 2, delta: 1 },
    FoldRange { lo: 0xA77D, hi: 0xA77D, stride: 1, delta: -35332 },
    FoldRange { lo: 0xA77E, hi: 0xA786, stride: 2, delta: 1 },
    FoldRange { lo: 0xA78B, hi: 0xA78B, stride: 1, delta: 1 },
    FoldRange { lo: 0xA78D, hi: 0xA78D, stride: 1, delta: -42280 },
    FoldRange { lo: 0xA790, hi: 0xA792, stride: 2, delta: 1 },
    FoldRange { lo: 0xA796, hi: 0xA7A8, stride: 2, delta: 1 },
    FoldRange { lo: 0xA7AA, hi: 0xA7AA, stride: 1, delta: -42308 },
    FoldRange { lo: 0xA7AB, hi: 0xA7AB, stride: 1, delta: -42319 },
    FoldRange { lo: 0xA7AC, hi: 0xA7AC, stride: 1, delta: -42315 },
    FoldRange { lo: 0xA7AD, hi: 0xA7AD, stride: 1, delta: -42305 },
    FoldRange { lo: 0xA7AE, hi: 0xA7AE, stride: 1, delta: -42308 },
    FoldRange { lo: 0xA7B0, hi: 0xA7B0, stride: 1, delta: -42258 },
    FoldRange { lo: 0xA7B1, hi: 0xA7B1, stride: 1, delta: -42282 },
    FoldRange { lo: 0xA7B2, hi: 0xA7B2, stride: 1, delta: -42261 },
    FoldRange { lo: 0xA7B3, hi: 0xA7B3, stride: 1, delta: 928 },
    FoldRange { lo: 0xA7B4, hi: 0xA7C2, stride: 2, delta: 1 },
    FoldRange { lo: 0xA7C4, hi: 0xA7C4, stride: 1, delta: -48 },
    FoldRange { lo: 0xA7C5, hi: 0xA7C5, stride: 1, delta: -42307 },
    FoldRange { lo: 0xA7C6, hi: 0xA7C6, stride: 1, delta: -35384 },
    FoldRange { lo: 0xA7C7, hi: 0xA7C9, stride: 2, delta: 1 },
    FoldRange { lo: 0xA7D0, hi: 0xA7D0, stride: 1, delta: 1 },
    FoldRange { lo: 0xA7D6, hi: 0xA7D8, stride: 2, delta: 1 },
    FoldRange { lo: 0xA7F5, hi: 0xA7F5, stride: 1, delta: 1 },
    FoldRange { lo: 0xAB70, hi: 0xABBF, stride: 1, delta: -38864 },
    FoldRange { lo: 0xFF21, hi: 0xFF3A, stride: 1, delta: 32 },
    FoldRange { lo: 0x10400, hi: 0x10427, stride: 1, delta: 40 },
    FoldRange { lo: 0x104B0, hi: 0x104D3, stride: 1, delta: 40 },
    FoldRange { lo: 0x10570, hi: 0x1057A, stride: 1, delta: 39 },
    FoldRange { lo: 0x1057C, hi: 0x1058A, stride: 1, delta: 39 },
    FoldRange { lo: 0x1058C, hi: 0x10592, stride: 1, delta: 39 },
    FoldRange { lo: 0x10594, hi: 0x10595, stride: 1, delta: 39 },
    FoldRange { lo: 0x10C80, hi: 0x10CB2, stride: 1, delta: 64 },
    FoldRange { lo: 0x118A0, hi: 0x118BF, stride: 1, delta: 32 },
    FoldRange { lo: 0x16E40, hi: 0x16E5F, stride: 1, delta: 32 },
    FoldRange { lo: 0x1E900, hi: 0x1E921, stride: 1, delta: 34 },
];

pub(crate) static FOLD_EXPANSIONS: &[(u32, &[u32])] = &[
    (0x00DF, &[0x0073, 0x0073]),
    (0x0130, &[0x0069, 0x0307]),
    (0x0149, &[0x02BC, 0x006E]),
    (0x01F0, &[0x006A, 0x030C]),
    (0x0390, &[0x03B9, 0x0308, 0x0301]),
    (0x03B0, &[0x03C5, 0x0308, 0x0301]),
    (0x0587, &[0x0565, 0x0582]),
    (0x1E96, &[0x0068, 0x0331]),
    (0x1E97, &[0x0074, 0x0308]),
    (0x1E98, &[0x0077, 0x030A]),
    (0x1E99, &[0x0079, 0x030A]),
    (0x1E9A, &[0x0061, 0x02BE]),
    (0x1E9E, &[0x0073, 0x0073]),
    (0x1F50, &[0x03C5, 0x0313]),
    (0x1F52, &[0x03C5, 0x0313, 0x0300]),
    (0x1F54, &[0x03C5, 0x0313, 0x0301]),
    (0x1F56, &[0x03C5, 0x0313, 0x0342]),
    (0x1F80, &[0x1F00, 0x03B9]),
    (0x1F81, &[0x1F01, 0x03B9]),
    (0x1F82, &[0x1F02, 0x03B9]),
    (0x1F83, &[0x1F03, 0x03B9]),
    (0x1F84, &[0x1F04, 0x03B9]),
    (0x1F85, &[0x1F05, 0x03B9]),
    (0x1F86, &[0x1F06, 0x03B9]),
    (0x1F87, &[0x1F07, 0x03B9]),
    (0x1F88, &[0x1F00, 0x03B9]),
    (0x1F89, &[0x1F01, 0x03B9]),
    (0x1F8A, &[0x1F02, 0x03B9]),
    (0x1F8B, &[0x1F03, 0x03B9]),
    (0x1F8C, &[0x1F04, 0x03B9]),
    (0x1F8D, &[0x1F05, 0x03B9]),
    (0x1F8E, &[0x1F06, 0x03B9]),
    (0x1F8F, &[0x1F07, 0x03B9]),
    (0x1F90, &[0x1F20, 0x03B9]),
    (0x1F91, &[0x1F21, 0x03B9]),
    (0x1F92, &[0x1F22, 0x03B9]),
    (0x1F93, &[0x1F23, 0x03B9]),
    (0x1F94, &[0x1F24, 0x03B9]),
    (0x1F95, &[0x1F25, 0x03B9]),
    (0x1F96, &[0x1F26, 0x03B9]),
    (0x1F97, &[0x1F27, 0x03B9]),
    (0x1F98, &[0x1F20, 0x03B9]),
    (0x1F99, &[0x1F21, 0x03B9]),
    (0x1F9A, &[0x1F22, 0x03B9]),
    (0x1F9B, &[0x1F23, 0x03B9]),
    (0x1F9C, &[0x1F24, 0x03B9]),
    (0x1F9D, &[0x1F25, 0x03B9]),
    (0x1F9E, &[0x1F26, 0x03B9]),
    (0x1F9F, &[0x1F27, 0x03B9]),
    (0x1FA0, &[0x1F60, 0x03B9]),
    (0x1FA1, &[0x1F61, 0x03B9]),
    (0x1FA2, &[0x1F62, 0x03B9]),
    (0x1FA3, &[0x1F63, 0x03B9]),
    (0x1FA4, &[0x1F64, 0x03B9]),
    (0x1FA5, &[0x1F65, 0x03B9]),
    (0x1FA6, &[0x1F66, 0x03B9]),
    (0x1FA7, &[0x1F67, 0x03B9]),
    (0x1FA8, &[0x1F60, 0x03B9]),
    (0x1FA9, &[0x1F61, 0x03B9]),
    (0x1FAA, &[0x1F62, 0x03B9]),
    (0x1FAB, &[0x1F63, 0x03B9]),
    (0x1FAC, &[0x1F64, 0x03B9]),
    (0x1FAD, &[0x1F65, 0x03B9]),
    (0x1FAE, &[0x1F66, 0x03B9]),
    (0x1FAF, &[0x1F67, 0x03B9]),
    (0x1FB2, &[0x1F70, 0x03B9]),
    (0x1FB3, &[0x03B1, 0x03B9]),
    (0x1FB4, &[0x03AC, 0x03B9]),
    (0x1FB6, &[0x03B1, 0x0342]),
    (0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
    (0x1FBC, &[0x03B1, 0x03B9]),
    (0x1FC2, &[0x1F74, 0x03B9]),
    (0x1FC3, &[0x03B7, 0x03B9]),
    (0x1FC4, &[0x03AE, 0x03B9]),
    (0x1FC6, &[0x03B7, 0x0342]),
    (0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
    (0x1FCC, &[0x03B7, 0x03B9]),
    (0x1FD2, &[0x03B9, 0x0308, 0x0300]),
    (0x1FD3, &[0x03B9, 0x0308, 0x0301]),
    (0x1FD6, &[0x03B9, 0x0342]),
    (0x1FD7, &[0x03B9, 0x0308, 0x0342]),
    (0x1FE2, &[0x03C5, 0x0308, 0x0300]),
    (0x1FE3, &[0x03C5, 0x0308, 0x0301]),
    (0x1FE4, &[0x03C1, 0x0313]),
    (0x1FE6, &[0x03C5, 0x0342]),
    (0x1FE7, &[0x03C5, 0x0308, 0x0342]),
    (0x1FF2, &[0x1F7C, 0x03B9]),
    (0x1FF3, &[0x03C9, 0x03B9]),
    (0x1FF4, &[0x03CE, 0x03B9]),
    (0x1FF6, &[0x03C9, 0x0342]),
    (0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
    (0x1FFC, &[0x03C9, 0x03B9]),
    (0xFB00, &[0x0066, 0x0066]),
    (0xFB01, &[0x0066, 0x0069]),
    (0xFB02, &[0x0066, 0x006C]),
    (0xFB03, &[0x0066, 0x0066, 0x0069]),
    (0xFB04, &[0x0066, 0x0066, 0x006C]),
    (0xFB05, &[0x0073, 0x0074]),
    (0xFB06, &[0x0073, 0x0074]),
    (0xFB13, &[0x0574, 0x0576]),
    (0xFB14, &[0x0574, 0x0565]),
    (0xFB15, &[0x0574, 0x056B]),
    (0xFB16, &[0x057E, 0x0576]),
    (0xFB17, &[0x0574, 0x056D]),
];
