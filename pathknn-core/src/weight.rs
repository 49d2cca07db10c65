//! Conversion from raw closeness weights to path distances.

/// Numerator of the closeness-to-distance transform.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Converts a raw closeness weight into a positive edge distance.
///
/// Larger raw weights mean closer vertices, so the transform
/// `DISTANCE_SCALE / ln(raw + 1)` is strictly decreasing. Returns `None` for
/// `raw <= 0`, where the logarithm is zero or undefined.
///
/// # Examples
/// ```
/// use pathknn_core::weight_to_distance;
///
/// let near = weight_to_distance(99).expect("positive weight");
/// let far = weight_to_distance(1).expect("positive weight");
/// assert!(near < far);
/// assert!(weight_to_distance(0).is_none());
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "raw weights are small closeness counts and the transform is approximate"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "the transform is defined in floating point"
)]
pub fn weight_to_distance(raw: i64) -> Option<f64> {
    if raw <= 0 {
        return None;
    }
    Some(DISTANCE_SCALE / (raw as f64 + 1.0).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn rejects_non_positive_weights(#[case] raw: i64) {
        assert!(weight_to_distance(raw).is_none());
    }

    #[rstest]
    fn matches_reference_values() {
        let distance = weight_to_distance(9).expect("positive weight");
        assert!((distance - 100.0 / 10.0_f64.ln()).abs() < 1e-12);
        let unit = weight_to_distance(1).expect("positive weight");
        assert!((unit - 100.0 / 2.0_f64.ln()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn transform_is_strictly_decreasing(low in 1_i64..1_000_000, step in 1_i64..1_000) {
            let high = low + step;
            let near = weight_to_distance(high).expect("positive weight");
            let far = weight_to_distance(low).expect("positive weight");
            prop_assert!(far > near);
            prop_assert!(near > 0.0 && near.is_finite());
        }
    }
}
