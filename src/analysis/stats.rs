//! Small numeric helpers behind the dashboard aggregates.
//!
//! Every function accepts empty or constant input and reports the
//! degenerate case through `Option` or an empty result instead of
//! producing NaN.

use crate::core::constants::stats::WHISKER_IQR;

/// Five-number summary plus the points beyond the whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest value within 1.5 IQR below `q1`
    pub whisker_low: f64,
    /// Highest value within 1.5 IQR above `q3`
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted(values);
        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_limit = q1 - WHISKER_IQR * iqr;
        let high_limit = q3 + WHISKER_IQR * iqr;

        let inside = || sorted.iter().copied().filter(|v| (low_limit..=high_limit).contains(v));
        // The median always lies inside the limits, so both are present
        let whisker_low = inside().next().unwrap_or(median);
        let whisker_high = inside().last().unwrap_or(median);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !(low_limit..=high_limit).contains(v))
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    /// Smallest and largest value drawn for this box
    pub fn extent(&self) -> (f64, f64) {
        self.outliers.iter().fold(
            (self.whisker_low, self.whisker_high),
            |(lo, hi), &v| (lo.min(v), hi.max(v)),
        )
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of sorted, non-empty values with linear interpolation between
/// closest ranks.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let position = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Pearson correlation, undefined below two pairs or with a constant side.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let divisor = (sxx * syy).sqrt();
    if divisor == 0.0 {
        return None;
    }
    Some((sxy / divisor).clamp(-1.0, 1.0))
}

/// Gaussian kernel bandwidth by Scott's rule.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std(values)?;
    if std <= 0.0 {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density evaluated on `grid_size` evenly spaced points
/// reaching `cut` bandwidths past the data on each side.
///
/// Returns `(x, density)` pairs; empty when the bandwidth is undefined.
pub fn gaussian_kde(values: &[f64], cut: f64, grid_size: usize) -> Vec<(f64, f64)> {
    let Some(bw) = scott_bandwidth(values) else {
        return Vec::new();
    };
    if grid_size < 2 {
        return Vec::new();
    }
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let start = min - cut * bw;
    let end = max + cut * bw;
    let step = (end - start) / (grid_size - 1) as f64;
    let norm = 1.0 / (values.len() as f64 * bw * (2.0 * std::f64::consts::PI).sqrt());

    (0..grid_size)
        .map(|i| {
            let x = start + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bw).powi(2)).exp())
                .sum();
            (x, density * norm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(quantile_sorted(&values, 0.25), 1.75));
        assert!(approx(quantile_sorted(&values, 0.5), 2.5));
        assert!(approx(quantile_sorted(&values, 0.75), 3.25));
        assert!(approx(quantile_sorted(&values, 1.0), 4.0));
    }

    #[test]
    fn test_quantile_of_unsorted_input() {
        assert!(approx(quantile_sorted(&sorted(&[9.0, 1.0, 5.0]), 0.5), 5.0));
        assert_eq!(BoxStats::from_values(&[]), None);
    }

    #[test]
    fn test_box_stats_single_value() {
        let stats = BoxStats::from_values(&[7.0]).unwrap();
        assert_eq!(stats.q1, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.whisker_low, 7.0);
        assert_eq!(stats.whisker_high, 7.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_detects_outliers() {
        let stats = BoxStats::from_values(&[10.0, 11.0, 12.0, 13.0, 14.0, 100.0]).unwrap();
        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.whisker_low, 10.0);
        assert_eq!(stats.whisker_high, 14.0);
        assert_eq!(stats.extent(), (10.0, 100.0));
    }

    #[test]
    fn test_box_stats_empty() {
        assert_eq!(BoxStats::from_values(&[]), None);
    }

    #[test]
    fn test_mean_and_std() {
        assert_eq!(mean(&[]), None);
        assert!(approx(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0));
        assert_eq!(sample_std(&[5.0]), None);
        assert!(approx(sample_std(&[2.0, 4.0]).unwrap(), 2f64.sqrt()));
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0];
        assert!(approx(pearson(&xs, &[2.0, 4.0, 6.0]).unwrap(), 1.0));
        assert!(approx(pearson(&xs, &[3.0, 2.0, 1.0]).unwrap(), -1.0));
    }

    #[test]
    fn test_pearson_degenerate() {
        assert_eq!(pearson(&[], &[]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 1.0], &[2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn test_kde_degenerate_inputs_are_empty() {
        assert!(gaussian_kde(&[], 3.0, 200).is_empty());
        assert!(gaussian_kde(&[4.0], 3.0, 200).is_empty());
        assert!(gaussian_kde(&[4.0, 4.0, 4.0], 3.0, 200).is_empty());
    }

    #[test]
    fn test_kde_grid_and_mass() {
        let values = [10.0, 12.0, 15.0, 20.0, 21.0];
        let curve = gaussian_kde(&values, 3.0, 200);
        assert_eq!(curve.len(), 200);

        let bw = scott_bandwidth(&values).unwrap();
        assert!(approx(curve[0].0, 10.0 - 3.0 * bw));
        assert!(approx(curve[199].0, 21.0 + 3.0 * bw));

        // Trapezoidal integral over +-3 bandwidths holds nearly all the mass
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 0.01, "area was {area}");
        assert!(curve.iter().all(|(_, d)| *d >= 0.0));
    }
}
