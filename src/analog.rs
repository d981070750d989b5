//! Integer scaling primitives for raw analog samples.
//!
//! These replace the hardware library's `map`/`constrain` pair so the
//! quantization path is fully specified: [`map_range`] uses **floor
//! division**, so its rounding behavior at non-exact midpoints does not
//! depend on the sign of the intermediate product.

/// Linearly map `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Integer interpolation with floor division (`div_euclid`). Values
/// outside the input range extrapolate; callers that need a bounded
/// result follow up with [`constrain`].
///
/// # Examples
///
/// ```
/// use style_dial::analog::map_range;
///
/// assert_eq!(map_range(10, 10, 1020, -1, 8), -1);
/// assert_eq!(map_range(1020, 10, 1020, -1, 8), 8);
/// ```
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let scaled = (value - in_min) * (out_max - out_min);
    scaled.div_euclid(in_max - in_min) + out_min
}

/// Clamp `value` into the inclusive range `[low, high]`.
///
/// Requires `low <= high`.
pub fn constrain(value: i32, low: i32, high: i32) -> i32 {
    value.clamp(low, high)
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── map_range ────────────────────────────────────────────────────

    #[test]
    fn map_range_endpoints() {
        assert_eq!(map_range(0, 0, 100, 0, 10), 0);
        assert_eq!(map_range(100, 0, 100, 0, 10), 10);
    }

    #[test]
    fn map_range_interior() {
        assert_eq!(map_range(50, 0, 100, 0, 10), 5);
        assert_eq!(map_range(25, 0, 100, 0, 10), 2);
    }

    #[test]
    fn map_range_widened_codomain() {
        // The pot mapping used by StyleSetting: one unit wider than the
        // valid ordinal range on each side.
        assert_eq!(map_range(10, 10, 1020, -1, 8), -1);
        assert_eq!(map_range(1020, 10, 1020, -1, 8), 8);
        assert_eq!(map_range(515, 10, 1020, -1, 8), 3);
    }

    #[test]
    fn map_range_floors_negative_intermediates() {
        // (5 - 10) * 9 = -45; floor(-45 / 1010) = -1, so the result is
        // -2. Truncation toward zero would give -1 here instead.
        assert_eq!(map_range(5, 10, 1020, -1, 8), -2);
        assert_eq!(map_range(0, 0, 100, -5, 5), -5);
        assert_eq!(map_range(49, 0, 100, -5, 5), -1);
        assert_eq!(map_range(50, 0, 100, -5, 5), 0);
    }

    #[test]
    fn map_range_extrapolates_out_of_range_input() {
        assert_eq!(map_range(200, 0, 100, 0, 10), 20);
        assert_eq!(map_range(-100, 0, 100, 0, 10), -10);
    }

    // ── constrain ────────────────────────────────────────────────────

    #[test]
    fn constrain_passes_through_in_range() {
        assert_eq!(constrain(5, 0, 10), 5);
        assert_eq!(constrain(0, 0, 10), 0);
        assert_eq!(constrain(10, 0, 10), 10);
    }

    #[test]
    fn constrain_clamps_both_rails() {
        assert_eq!(constrain(-3, 0, 7), 0);
        assert_eq!(constrain(42, 0, 7), 7);
    }
}
