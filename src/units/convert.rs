//! Blender <-> Source unit conversion
//!
//! Two Blender units span 128 Source units. Both functions are total: any `f32`
//! goes in, including NaN and infinities, and propagates without validation.
//!
//! # Round-trip domain
//!
//! Both steps scale by powers of two, so a round trip returns the input
//! bit-for-bit as long as no intermediate leaves the normal range:
//!
//! - Blender values: zero, or `2 * f32::MIN_POSITIVE <= |x| <= f32::MAX / 64`
//! - Source values: zero, or `128 * f32::MIN_POSITIVE <= |y| <= f32::MAX`
//!
//! Above `f32::MAX / 64` a Blender value overflows to infinity in Source units.
//! Subnormal inputs lose low bits when halved (or divided by 128) and come back
//! rounded to an even bit pattern.

/// Blender units in one conversion step
const BLENDER_STEP: f32 = 2.0;

/// Source units in one conversion step
const SOURCE_STEP: f32 = 128.0;

/// Number of Source units in one Blender unit
pub const SOURCE_UNITS_PER_BLENDER_UNIT: f32 = SOURCE_STEP / BLENDER_STEP;

/// Convert a Blender-unit value to Source units
#[inline]
pub fn blender_to_source(blender: f32) -> f32 {
    (blender / BLENDER_STEP) * SOURCE_STEP
}

/// Convert a Source-unit value to Blender units
///
/// Inverse of [`blender_to_source`]; exact within the round-trip domain above.
#[inline]
pub fn source_to_blender(source: f32) -> f32 {
    (source / SOURCE_STEP) * BLENDER_STEP
}

#[cfg(test)]
#[expect(clippy::float_cmp, reason = "Exact powers of two convert without rounding")]
mod tests {
    use super::*;

    /// Largest Blender value whose Source equivalent is finite
    const MAX_BLENDER: f32 = f32::MAX / SOURCE_UNITS_PER_BLENDER_UNIT;

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(blender_to_source(0.0), 0.0);
        assert_eq!(source_to_blender(0.0), 0.0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(blender_to_source(2.0), 128.0);
        assert_eq!(source_to_blender(128.0), 2.0);
        assert_eq!(blender_to_source(4.0), 256.0);
        assert_eq!(source_to_blender(64.0), 1.0);
    }

    #[test]
    fn test_sign_is_preserved() {
        assert_eq!(blender_to_source(-2.0), -128.0);
        assert_eq!(source_to_blender(-128.0), -2.0);
    }

    #[test]
    fn test_scale_factor() {
        assert_eq!(SOURCE_UNITS_PER_BLENDER_UNIT, 64.0);
        assert_eq!(blender_to_source(1.0), SOURCE_UNITS_PER_BLENDER_UNIT);
    }

    #[test]
    fn test_non_finite_values_propagate() {
        assert!(blender_to_source(f32::NAN).is_nan());
        assert!(source_to_blender(f32::NAN).is_nan());
        assert_eq!(blender_to_source(f32::INFINITY), f32::INFINITY);
        assert_eq!(source_to_blender(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_upper_domain_edge() {
        let source = blender_to_source(MAX_BLENDER);
        assert!(source.is_finite());
        assert_eq!(source_to_blender(source), MAX_BLENDER);

        assert!(blender_to_source(f32::MAX).is_infinite());
        assert!(blender_to_source(-f32::MAX).is_infinite());
        assert!(blender_to_source(1.0e37).is_infinite());

        // Source -> Blender shrinks, so the whole finite range survives
        assert_eq!(blender_to_source(source_to_blender(f32::MAX)), f32::MAX);
    }

    #[test]
    fn test_lower_domain_edge() {
        let smallest_exact = 2.0 * f32::MIN_POSITIVE;
        assert_eq!(source_to_blender(blender_to_source(smallest_exact)), smallest_exact);

        let smallest_exact_source = 128.0 * f32::MIN_POSITIVE;
        assert_eq!(
            blender_to_source(source_to_blender(smallest_exact_source)),
            smallest_exact_source
        );
    }

    #[test]
    fn test_subnormal_inputs_round() {
        // 3 ulp halves to 1.5 ulp, which rounds to the even pattern 2 ulp
        let tiny = f32::from_bits(3);
        let back = source_to_blender(blender_to_source(tiny));
        assert_eq!(back.to_bits(), 4);

        // Dividing by 128 flushes the smallest subnormal to zero
        assert_eq!(source_to_blender(f32::from_bits(1)), 0.0);
    }

    // Property-based tests using proptest
    mod proptests {
        use super::super::*;
        use super::MAX_BLENDER;
        use proptest::prelude::*;

        proptest! {
            /// Property: Blender -> Source -> Blender is exact inside the domain
            #[test]
            fn blender_round_trip(x in proptest::num::f32::NORMAL) {
                prop_assume!(x.abs() >= 2.0 * f32::MIN_POSITIVE && x.abs() <= MAX_BLENDER);
                let back = source_to_blender(blender_to_source(x));
                prop_assert_eq!(back.to_bits(), x.to_bits(), "{} came back as {}", x, back);
            }

            /// Property: Source -> Blender -> Source is exact inside the domain
            #[test]
            fn source_round_trip(y in proptest::num::f32::NORMAL) {
                prop_assume!(y.abs() >= 128.0 * f32::MIN_POSITIVE);
                let back = blender_to_source(source_to_blender(y));
                prop_assert_eq!(back.to_bits(), y.to_bits(), "{} came back as {}", y, back);
            }

            /// Property: conversion is odd, negating the input negates the output
            #[test]
            fn conversion_is_odd(x in proptest::num::f32::ANY) {
                prop_assume!(!x.is_nan());
                prop_assert_eq!(blender_to_source(-x), -blender_to_source(x));
                prop_assert_eq!(source_to_blender(-x), -source_to_blender(x));
            }
        }
    }
}
