//! Minimum slot count so that the fullest bin fits within the canvas height.

use crate::error::{LayoutError, Result};

/// Smallest number of slots `s` such that `ceil(n / s)` balls of diameter `w / s`
/// stacked in one slot fit into `h`.
///
/// The closed form `ceil((w + sqrt(w² + 4hwn)) / 2h)` is the root of the continuous
/// relaxation and is always sufficient, but it reserves one extra row and can overshoot.
/// It is evaluated on the ratio `a = w / h` as `a/2 * (1 + sqrt(1 + 4n/a))` so it cannot
/// overflow, then tightened by bisection against the exact fit test, which is monotone
/// in `s`. A slot count that does not fit in `usize` is reported as invalid input.
pub fn min_slots(bin_width: f64, canvas_height: f64, max_items: usize) -> Result<usize> {
    let invalid = LayoutError::InvalidSlotInput {
        bin_width,
        canvas_height,
    };
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if !ok(bin_width) || !ok(canvas_height) {
        return Err(invalid);
    }
    if max_items == 0 {
        return Ok(1);
    }

    let (w, h, n) = (bin_width, canvas_height, max_items as f64);
    let a = w / h;
    let closed = (0.5 * a * (1.0 + (1.0 + 4.0 * n / a).sqrt())).ceil();
    if !closed.is_finite() || closed >= usize::MAX as f64 {
        return Err(invalid);
    }
    let mut hi = (closed as usize).max(1);

    // float guard; the closed form is sufficient in exact arithmetic
    while !fits(w, h, max_items, hi) {
        hi = hi.checked_add(1).ok_or_else(|| invalid.clone())?;
    }

    // smallest fitting count in [1, hi]
    let mut lo = 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if fits(w, h, max_items, mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(hi)
}

/// Exact packing test: `ceil(n / s) * (w / s) <= h`.
pub fn fits(bin_width: f64, canvas_height: f64, items: usize, slots: usize) -> bool {
    if slots == 0 {
        return items == 0;
    }
    let rows = items.div_ceil(slots);
    rows as f64 * (bin_width / slots as f64) <= canvas_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_in_wide_bin_need_one_slot() {
        assert_eq!(min_slots(120.0, 400.0, 3).unwrap(), 1);
    }

    #[test]
    fn empty_bins_still_get_one_slot() {
        assert_eq!(min_slots(120.0, 400.0, 0).unwrap(), 1);
    }

    #[test]
    fn result_is_minimal_and_sufficient() {
        for &(w, h) in &[(120.0, 400.0), (60.0, 400.0), (300.0, 50.0), (7.5, 33.0)] {
            for n in 1..300 {
                let s = min_slots(w, h, n).unwrap();
                assert!(fits(w, h, n, s), "w={w} h={h} n={n} s={s}");
                if s > 1 {
                    assert!(!fits(w, h, n, s - 1), "w={w} h={h} n={n} s={s}");
                }
            }
        }
    }

    #[test]
    fn wide_short_canvas_needs_more_slots_than_items() {
        // a single ball of diameter w/s must fit in h = 1
        assert_eq!(min_slots(1000.0, 1.0, 1).unwrap(), 1000);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(min_slots(0.0, 400.0, 3).is_err());
        assert!(min_slots(120.0, 0.0, 3).is_err());
        assert!(min_slots(f64::NAN, 400.0, 3).is_err());
    }

    #[test]
    fn unrepresentable_slot_count_is_an_error() {
        assert!(matches!(
            min_slots(1e10, 1e-10, 3),
            Err(LayoutError::InvalidSlotInput { .. })
        ));
        assert!(matches!(
            min_slots(1e300, 1.0, 1),
            Err(LayoutError::InvalidSlotInput { .. })
        ));
        assert!(min_slots(f64::MAX, f64::MIN_POSITIVE, 7).is_err());
    }

    #[test]
    fn extreme_aspect_ratio_resolves_quickly() {
        // one ball per slot; each ball of diameter w / s must fit in h = 1
        assert_eq!(min_slots(1e12, 1.0, 5).unwrap(), 1_000_000_000_000);
        assert_eq!(min_slots(1e6, 1.0, 1_000_000).unwrap(), 1_000_000);
    }
}
