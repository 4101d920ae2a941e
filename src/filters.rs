//! Tick predicates: noise rejection and percentage-change significance.
//! Arithmetic is single-precision to match the host's binary boundary.

/// Returns true when a tick carries usable values: positive price and
/// non-negative volume. Zero volume is accepted (quote-only updates);
/// zero or negative price is noise.
///
/// NaN inputs fail both comparisons under IEEE 754 and therefore pass.
/// Whether non-finite ticks should be screened is an open product
/// question; callers that care must check upstream.
pub fn is_valid(price: f32, volume: f32) -> bool {
    if price <= 0.0 {
        return false;
    }
    if volume < 0.0 {
        return false;
    }
    true
}

/// Returns true when `current` moved at least `threshold_percent` percent
/// away from the reference value `last`. The boundary is inclusive.
///
/// A zero reference always counts as significant: the percentage change is
/// undefined there, so the guard fires before any division.
///
/// Only the numerator difference is made absolute, not the quotient. With a
/// negative `last` the change percentage comes out negative and never clears
/// a positive threshold. Kept as-is pending clarification from the pipeline
/// owners; do not symmetrize.
pub fn is_significant(current: f32, last: f32, threshold_percent: f32) -> bool {
    if last == 0.0 {
        return true;
    }
    let diff = (current - last).abs();
    let change_percent = (diff / last) * 100.0;
    change_percent >= threshold_percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_accepts_positive_price_nonnegative_volume() {
        assert!(is_valid(1.0, 0.0));
        assert!(is_valid(0.01, 1_000_000.0));
        assert!(is_valid(f32::MAX, 0.5));
    }

    #[test]
    fn test_valid_rejects_non_positive_price() {
        assert!(!is_valid(0.0, 100.0));
        assert!(!is_valid(-1.0, 100.0));
        assert!(!is_valid(-0.01, 0.0));
    }

    #[test]
    fn test_valid_rejects_negative_volume() {
        assert!(!is_valid(100.0, -1.0));
        assert!(!is_valid(100.0, -0.001));
    }

    #[test]
    fn test_valid_nan_price_passes() {
        // IEEE 754: NaN <= 0 is false, so a NaN price is classified valid.
        // Pinned until the upstream question on non-finite ticks is settled.
        assert!(is_valid(f32::NAN, 1.0));
    }

    #[test]
    fn test_significant_zero_reference_always_true() {
        assert!(is_significant(0.0, 0.0, 5.0));
        assert!(is_significant(123.4, 0.0, 99.0));
        assert!(is_significant(-7.0, 0.0, 0.0));
    }

    #[test]
    fn test_significant_threshold_comparison() {
        assert!(is_significant(110.0, 100.0, 5.0)); // 10% >= 5%
        assert!(!is_significant(102.0, 100.0, 5.0)); // 2% < 5%
        assert!(is_significant(90.0, 100.0, 5.0)); // drop of 10%, numerator absolute
    }

    #[test]
    fn test_significant_inclusive_boundary() {
        assert!(is_significant(105.0, 100.0, 5.0)); // exactly 5%
    }

    #[test]
    fn test_significant_negative_reference_quirk() {
        // diff = |90 - (-100)| = 190, change = (190 / -100) * 100 = -190.
        // Negative change never clears a positive threshold. Regression pin
        // for the literal arithmetic; not a symmetric percentage.
        assert!(!is_significant(90.0, -100.0, 5.0));
        // A negative threshold still compares against the raw quotient.
        assert!(is_significant(90.0, -100.0, -200.0));
    }

    #[test]
    fn test_predicates_are_pure() {
        for _ in 0..3 {
            assert!(is_valid(10.0, 10.0));
            assert!(!is_significant(102.0, 100.0, 5.0));
        }
    }
}
