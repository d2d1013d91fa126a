// Copyright 2026 the Swipecell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band mapping from raw drag displacement to content offset.

/// Exponent applied to the overshoot past the fully-open position.
///
/// Values below `1.0` make the overshoot grow sub-linearly, so dragging
/// further past the open position yields diminishing visual movement.
const RUBBER_BAND_EXPONENT: f64 = 0.85;

#[cfg(feature = "std")]
#[inline]
fn powf(x: f64, e: f64) -> f64 {
    x.powf(e)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn powf(x: f64, e: f64) -> f64 {
    libm::pow(x, e)
}

/// Maps a raw horizontal displacement to the content panel's visual offset.
///
/// `limit` is the fully-open offset for the direction being dragged: the
/// left region's width for positive displacement, or the right region's
/// width negated for negative displacement. Within the limit the mapping is
/// the identity (the content tracks the finger 1:1); past it, the overshoot
/// is compressed to `|raw - limit|^0.85`, producing the rubber-band feel.
///
/// The result always has the same sign as `raw` and is strictly monotonic
/// in it.
///
/// ```rust
/// use swipecell::rubber_band;
///
/// // Identity within the region width.
/// assert_eq!(rubber_band(50.0, 80.0), 50.0);
/// assert_eq!(rubber_band(-120.0, -120.0), -120.0);
///
/// // Sub-linear past it.
/// let eased = rubber_band(100.0, 80.0);
/// assert!(eased > 80.0 && eased < 100.0);
/// ```
#[must_use]
pub fn rubber_band(raw: f64, limit: f64) -> f64 {
    if raw < 0.0 && raw < limit {
        limit - powf(limit - raw, RUBBER_BAND_EXPONENT)
    } else if raw > 0.0 && raw > limit {
        limit + powf(raw - limit, RUBBER_BAND_EXPONENT)
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_within_the_limit() {
        assert_eq!(rubber_band(0.0, 80.0), 0.0);
        assert_eq!(rubber_band(30.0, 80.0), 30.0);
        assert_eq!(rubber_band(80.0, 80.0), 80.0);
        assert_eq!(rubber_band(-45.0, -60.0), -45.0);
        assert_eq!(rubber_band(-60.0, -60.0), -60.0);
    }

    #[test]
    fn overshoot_is_compressed_but_keeps_direction() {
        let eased = rubber_band(100.0, 80.0);
        assert!(eased > 80.0, "must keep moving past the open position");
        assert!(eased < 100.0, "overshoot must be sub-linear");

        let eased = rubber_band(-100.0, -80.0);
        assert!(eased < -80.0, "must keep moving past the open position");
        assert!(eased > -100.0, "overshoot must be sub-linear");
    }

    #[test]
    fn overshoot_is_strictly_monotonic() {
        let mut previous = rubber_band(80.0, 80.0);
        for raw in [81.0, 90.0, 120.0, 200.0, 500.0] {
            let eased = rubber_band(raw, 80.0);
            assert!(eased > previous, "easing must grow with displacement");
            previous = eased;
        }

        let mut previous = rubber_band(-80.0, -80.0);
        for raw in [-81.0, -90.0, -120.0, -200.0, -500.0] {
            let eased = rubber_band(raw, -80.0);
            assert!(eased < previous, "easing must grow with displacement");
            previous = eased;
        }
    }

    #[test]
    fn mirrored_inputs_produce_mirrored_offsets() {
        for raw in [10.0, 79.0, 80.0, 81.0, 150.0] {
            let left = rubber_band(raw, 80.0);
            let right = rubber_band(-raw, -80.0);
            assert!(
                (left + right).abs() < 1e-12,
                "easing must be symmetric in direction"
            );
        }
    }
}
