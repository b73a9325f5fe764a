use crate::error::ProfileError;

/// Linearly interpolate `y` at `x_desired`.
///
/// `x` must be ascending. The bracket is found by scanning for the first
/// index whose position exceeds `x_desired`, so an exact hit on `x[i]`
/// uses the bracket `(i, i + 1)`, i.e. the one ending at the next higher
/// index. This upper-bracket tie-break is kept deliberately.
///
/// Targets at or beyond the last position, or before the first, are
/// reported as [`ProfileError::OutOfRange`].
pub fn linear_interpolate(x: &[f64], y: &[f64], x_desired: f64) -> Result<f64, ProfileError> {
    let out_of_range = || ProfileError::OutOfRange {
        target: x_desired,
        min: x.first().copied().unwrap_or(f64::NAN),
        max: x.last().copied().unwrap_or(f64::NAN),
    };

    let index = x
        .iter()
        .position(|&xi| xi > x_desired)
        .ok_or_else(out_of_range)?;
    if index == 0 || index >= y.len() {
        return Err(out_of_range());
    }

    let (x_left, x_right) = (x[index - 1], x[index]);
    let y_interp =
        (y[index - 1] * (x_right - x_desired) + y[index] * (x_desired - x_left)) / (x_right - x_left);
    Ok(y_interp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_between_neighbours() {
        let x = [0.0, 1.0, 2.0];
        let y = [10.0, 20.0, 0.0];
        assert_relative_eq!(linear_interpolate(&x, &y, 0.25).unwrap(), 12.5);
        assert_relative_eq!(linear_interpolate(&x, &y, 1.5).unwrap(), 10.0);
    }

    #[test]
    fn result_lies_between_bracketing_values() {
        let x = [0.0, 0.1, 0.35, 0.4, 0.9, 1.0];
        let y = [5.0, -3.0, 8.0, 8.5, 100.0, 1.0];
        for w in 0..x.len() - 1 {
            for k in 1..10 {
                let t = x[w] + (x[w + 1] - x[w]) * k as f64 / 10.0;
                let v = linear_interpolate(&x, &y, t).unwrap();
                let (lo, hi) = (y[w].min(y[w + 1]), y[w].max(y[w + 1]));
                assert!(v >= lo - 1e-12 && v <= hi + 1e-12, "{v} not in [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn exact_hit_uses_upper_bracket() {
        // y[0] is only read by the lower bracket (0, 1).
        let x = [0.0, 1.0, 2.0];
        let y = [f64::NAN, 7.0, 9.0];
        assert_relative_eq!(linear_interpolate(&x, &y, 1.0).unwrap(), 7.0);
    }

    #[test]
    fn first_position_is_in_range() {
        let x = [0.0, 0.5, 1.0];
        let y = [4.0, 2.0, 0.0];
        assert_relative_eq!(linear_interpolate(&x, &y, 0.0).unwrap(), 4.0);
    }

    #[test]
    fn rejects_targets_outside_range() {
        let x = [0.0, 0.5, 1.0];
        let y = [4.0, 2.0, 0.0];
        assert!(matches!(
            linear_interpolate(&x, &y, 1.0),
            Err(ProfileError::OutOfRange { .. })
        ));
        assert!(matches!(
            linear_interpolate(&x, &y, -0.1),
            Err(ProfileError::OutOfRange { .. })
        ));
        assert!(matches!(
            linear_interpolate(&[], &[], 0.0),
            Err(ProfileError::OutOfRange { .. })
        ));
    }
}
