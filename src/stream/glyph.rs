//! Weighted glyph sampling for rain streams.
//!
//! Streams draw from four character buckets: digits (30%), lowercase
//! letters (20%), uppercase letters (20%), and the broad printable range
//! U+0020..U+00FF (30%). The last bucket skips DEL, the C1 control
//! block `[U+007F, U+00A0)`, and U+00AD SOFT HYPHEN: legacy consoles
//! mapped those bytes through a codepage to box glyphs, but in a UTF-8
//! ANSI stream U+009B *is* CSI and would corrupt the display, and a soft
//! hyphen may render zero-width.

use rand::Rng;

/// Printable characters below DEL: U+0020..U+007F.
const LOW_PRINTABLE: u8 = 95;
/// Printable characters above the C1 block, minus the soft hyphen:
/// U+00A0..U+00FF without U+00AD.
const HIGH_PRINTABLE: u8 = 94;

/// Sample one glyph from the weighted buckets.
///
/// Every glyph this returns occupies exactly one terminal column.
pub fn sample<R: Rng>(rng: &mut R) -> char {
    let decile = rng.gen_range(0..10u8);
    let glyph = match decile {
        0..=2 => char::from(b'0' + rng.gen_range(0..10u8)),
        3..=4 => char::from(b'a' + rng.gen_range(0..26u8)),
        5..=6 => char::from(b'A' + rng.gen_range(0..26u8)),
        _ => printable(rng.gen_range(0..LOW_PRINTABLE + HIGH_PRINTABLE)),
    };
    debug_assert_eq!(
        unicode_width::UnicodeWidthChar::width(glyph),
        Some(1),
        "sampled glyph must occupy exactly one column"
    );
    glyph
}

/// Map an index into the printable subset of U+0020..U+00FF.
const fn printable(index: u8) -> char {
    let byte = if index < LOW_PRINTABLE {
        0x20 + index
    } else {
        let high = 0xA0 + (index - LOW_PRINTABLE);
        // Step over U+00AD.
        if high >= 0xAD {
            high + 1
        } else {
            high
        }
    };
    byte as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_printable_covers_both_ranges() {
        assert_eq!(printable(0), ' ');
        assert_eq!(printable(LOW_PRINTABLE - 1), '~');
        assert_eq!(printable(LOW_PRINTABLE), '\u{a0}');
        assert_eq!(printable(LOW_PRINTABLE + HIGH_PRINTABLE - 1), '\u{fe}');
    }

    #[test]
    fn test_printable_steps_over_soft_hyphen() {
        assert_eq!(printable(LOW_PRINTABLE + 12), '\u{ac}');
        assert_eq!(printable(LOW_PRINTABLE + 13), '\u{ae}');
    }

    #[test]
    fn test_no_control_characters() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..10_000 {
            let glyph = sample(&mut rng);
            assert!(!glyph.is_control(), "control glyph {glyph:?}");
            assert_ne!(glyph, '\u{ad}');
            assert!(('\u{20}'..'\u{100}').contains(&glyph));
        }
    }

    /// Bucket frequencies over a large seeded draw.
    ///
    /// The 30% printable bucket itself contains digits and letters, so the
    /// observed shares sit slightly above the raw bucket weights: digits at
    /// ~31.6%, each letter case at ~24.1%, and the remainder at ~20.2%.
    #[test]
    fn test_bucket_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000u32;
        let mut digits = 0usize;
        let mut lower = 0usize;
        let mut upper = 0usize;
        let mut other = 0usize;
        for _ in 0..n {
            let glyph = sample(&mut rng);
            if glyph.is_ascii_digit() {
                digits += 1;
            } else if glyph.is_ascii_lowercase() {
                lower += 1;
            } else if glyph.is_ascii_uppercase() {
                upper += 1;
            } else {
                other += 1;
            }
        }

        let share = |count: usize| count as f64 / f64::from(n);
        assert!((0.28..=0.35).contains(&share(digits)), "digits {}", share(digits));
        assert!((0.21..=0.27).contains(&share(lower)), "lower {}", share(lower));
        assert!((0.21..=0.27).contains(&share(upper)), "upper {}", share(upper));
        assert!((0.17..=0.24).contains(&share(other)), "other {}", share(other));
    }
}
