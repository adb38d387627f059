use anyhow::Context;
use statrs::statistics::{Distribution as StatrsDistribution, Max, Median, Min, OrderStatistics};
use std::fmt::{Display, Formatter};

/// Summary of one measurement series, enough to draw a box and its whiskers.
/// The whisker ends are the most extreme samples still inside the 1.5 IQR
/// fences, so everything outside them is an outlier.
#[derive(Debug, Copy, Clone)]
pub struct Distribution {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q25: f64,
    pub q75: f64,
    pub min_without_outliers: f64,
    pub max_without_outliers: f64,
}

impl Display for Distribution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Min: {}\nMax: {}\nMean: {}\nMedian: {}\nQ25: {}\nQ75: {}",
            self.min, self.max, self.mean, self.median, self.q25, self.q75
        )
    }
}

/// Plain arithmetic mean. Callers pass non-empty value sets only.
pub fn calculate_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn calculate_distribution(points: &[f64]) -> anyhow::Result<Distribution> {
    anyhow::ensure!(
        !points.is_empty(),
        "cannot calculate a distribution of zero samples"
    );

    let mut data = statrs::statistics::Data::new(points.to_vec());

    let min = data.min();
    let max = data.max();
    let mean = data.mean().context("cannot calculate mean")?;
    let median = data.median();
    let q25 = data.percentile(25);
    let q75 = data.percentile(75);
    let iqr = data.interquartile_range();

    let considered_min_without_outliers = q25 - 1.5 * iqr;
    let considered_max_without_outliers = q75 + 1.5 * iqr;

    let min_without_outliers = *data
        .iter()
        .filter(|&x| *x >= considered_min_without_outliers)
        .min_by(|a, b| a.total_cmp(b))
        .context("cannot calculate min without outliers")?;
    let max_without_outliers = *data
        .iter()
        .filter(|&x| *x <= considered_max_without_outliers)
        .max_by(|a, b| a.total_cmp(b))
        .context("cannot calculate max without outliers")?;

    Ok(Distribution {
        min,
        max,
        mean,
        median,
        q25,
        q75,
        min_without_outliers,
        max_without_outliers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_mean() {
        assert_eq!(calculate_mean(&[10.0, 12.0]), 11.0);
        assert_eq!(calculate_mean(&[7.5]), 7.5);
        assert_eq!(calculate_mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_distribution_of_clean_series() {
        let d = calculate_distribution(&[10.0, 11.0, 12.0, 13.0, 14.0]).unwrap();

        assert_eq!(d.min, 10.0);
        assert_eq!(d.max, 14.0);
        assert_eq!(d.mean, 12.0);
        assert_eq!(d.median, 12.0);
        assert!(d.min <= d.q25 && d.q25 <= d.median);
        assert!(d.median <= d.q75 && d.q75 <= d.max);

        // no outliers, so the whiskers reach the raw extremes
        assert_eq!(d.min_without_outliers, 10.0);
        assert_eq!(d.max_without_outliers, 14.0);
    }

    #[test]
    fn test_distribution_excludes_outlier_from_whiskers() {
        let d = calculate_distribution(&[10.0, 11.0, 12.0, 13.0, 1000.0]).unwrap();

        assert_eq!(d.max, 1000.0);
        assert_eq!(d.min_without_outliers, 10.0);
        assert_eq!(d.max_without_outliers, 13.0);
    }

    #[test]
    fn test_three_point_distribution() {
        // the synthesized [min, mean, max] stand-in used for summary files
        let d = calculate_distribution(&[5.0, 11.0, 20.0]).unwrap();

        assert_eq!(d.min, 5.0);
        assert_eq!(d.max, 20.0);
        assert_eq!(d.median, 11.0);
        assert_eq!(d.min_without_outliers, 5.0);
        assert_eq!(d.max_without_outliers, 20.0);
    }

    #[test]
    fn test_single_sample_distribution() {
        let d = calculate_distribution(&[7.0]).unwrap();

        assert_eq!(d.min, 7.0);
        assert_eq!(d.max, 7.0);
        assert_eq!(d.median, 7.0);
        assert_eq!(d.min_without_outliers, 7.0);
        assert_eq!(d.max_without_outliers, 7.0);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        assert!(calculate_distribution(&[]).is_err());
    }
}
