use crate::core::Sample;

/// Population variance of `values`: mean of squared deviations from the
/// arithmetic mean, divided by the count (not `count - 1`).
///
/// Returns `0.0` for an empty slice.
pub fn population_variance(values: &[Sample]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Floor median of `values`: the middle element for odd counts, the floored
/// average of the two middle elements for even counts.
pub fn floor_median(values: &[Sample]) -> Option<Sample> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]).div_euclid(2))
    } else {
        Some(sorted[mid])
    }
}

/// Index-based Tukey-style fences at 1x IQR.
///
/// Quartiles are taken at positions `q1 = floor(n / 4)` and `q3 = 3 * q1`
/// of the sorted data, without interpolation. With fewer than 4 values both
/// indices collapse to 0 and the fences degenerate to the minimum.
pub fn iqr_fences(values: &[Sample]) -> Option<(Sample, Sample)> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let q1_index = sorted.len() / 4;
    let q3_index = q1_index * 3;

    let iqr = sorted[q3_index] - sorted[q1_index];
    Some((sorted[q1_index] - iqr, sorted[q3_index] + iqr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_of_empty_is_zero() {
        assert_eq!(population_variance(&[]), 0.0);
    }

    #[test]
    fn variance_of_constants_is_zero() {
        assert_eq!(population_variance(&[7, 7, 7, 7]), 0.0);
    }

    #[test]
    fn variance_divides_by_count() {
        // mean = 50.5, deviations +-49.5 => (2 * 49.5^2) / 2
        assert!((population_variance(&[1, 100]) - 2450.25).abs() < 1e-9);
        // mean = 2, squared deviations 4, 0, 4 => 8 / 3
        assert!((population_variance(&[0, 2, 4]) - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn variance_is_non_negative() {
        for vals in [vec![-5, 3], vec![0, 0, 1], vec![-10, -20, -30, 40]] {
            assert!(population_variance(&vals) >= 0.0);
        }
    }

    #[test]
    fn median_of_odd_count_is_middle_element() {
        assert_eq!(floor_median(&[9, 1, 5]), Some(5));
        assert_eq!(floor_median(&[2]), Some(2));
    }

    #[test]
    fn median_of_even_count_floors_the_middle_average() {
        assert_eq!(floor_median(&[1, 100]), Some(50));
        assert_eq!(floor_median(&[1, 2, 3, 4]), Some(2));
        // floor(-2.5) = -3, not the truncation -2
        assert_eq!(floor_median(&[-3, -2]), Some(-3));
    }

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(floor_median(&[]), None);
    }

    #[test]
    fn fences_with_two_values_collapse_to_the_minimum() {
        // n = 2 => q1 = q3 = 0, iqr = 0
        assert_eq!(iqr_fences(&[1, 100]), Some((1, 1)));
    }

    #[test]
    fn fences_use_index_quartiles_and_unit_multiplier() {
        // sorted: [1..8], n = 8 => q1_index = 2, q3_index = 6
        // q1 = 3, q3 = 7, iqr = 4 => fences (-1, 11)
        let values = [8, 3, 5, 1, 7, 2, 6, 4];
        assert_eq!(iqr_fences(&values), Some((-1, 11)));
    }

    #[test]
    fn fences_of_empty_are_none() {
        assert_eq!(iqr_fences(&[]), None);
    }
}
