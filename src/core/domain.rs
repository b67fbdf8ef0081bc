/// Relative padding applied around zero when a multi-point series is flat.
pub const FLAT_DOMAIN_PADDING_RATIO: f64 = 0.01;

/// Resolves the y domain for a sparkline.
///
/// Single samples keep their raw extent. Longer series always include zero and
/// never produce a zero-width domain.
#[must_use]
pub fn resolve_y_domain(y_data: &[Option<f64>]) -> (f64, f64) {
    let (mut min_y, mut max_y) = find_min_and_max(y_data).unwrap_or((0.0, 0.0));

    if y_data.len() > 1 {
        min_y = min_y.min(0.0);

        if min_y == max_y {
            let padding = (min_y * FLAT_DOMAIN_PADDING_RATIO).abs();
            if padding > 0.0 {
                max_y = padding;
                min_y -= padding;
            } else {
                max_y = 1.0;
            }
        }
    }

    (min_y, max_y)
}

/// Extent of the present values, ignoring missing samples.
#[must_use]
pub fn find_min_and_max(y_data: &[Option<f64>]) -> Option<(f64, f64)> {
    y_data
        .iter()
        .flatten()
        .fold(None, |extent, &value| match extent {
            None => Some((value, value)),
            Some((min, max)) => Some((value.min(min), value.max(max))),
        })
}

#[cfg(test)]
mod tests {
    use super::{find_min_and_max, resolve_y_domain};

    #[test]
    fn extent_skips_missing_values() {
        assert_eq!(
            find_min_and_max(&[None, Some(3.0), Some(-1.0), None]),
            Some((-1.0, 3.0))
        );
        assert_eq!(find_min_and_max(&[None, None]), None);
    }

    #[test]
    fn negative_flat_series_is_padded_around_zero() {
        let (min, max) = resolve_y_domain(&[Some(-50.0), Some(-50.0)]);
        assert!((min - -50.5).abs() <= 1e-9);
        assert!((max - 0.5).abs() <= 1e-9);
    }

    #[test]
    fn all_zero_series_falls_back_to_unit_domain() {
        assert_eq!(resolve_y_domain(&[Some(0.0), Some(0.0), None]), (0.0, 1.0));
        assert_eq!(resolve_y_domain(&[None, None]), (0.0, 1.0));
    }

    #[test]
    fn single_sample_keeps_raw_extent() {
        assert_eq!(resolve_y_domain(&[Some(7.0)]), (7.0, 7.0));
        assert_eq!(resolve_y_domain(&[]), (0.0, 0.0));
    }
}
