//! Statistics Calculator Module
//! Aggregates clean records per county and derives descriptive statistics.

use polars::prelude::*;
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Summary of the per-county polling place counts.
///
/// `std` is the sample standard deviation (divisor n-1) and is NaN for
/// fewer than two counties; all statistics are NaN when no county exists.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
        }
    }
}

/// Handles the county aggregation and the statistics over it.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Count polling places per county.
    ///
    /// One row per distinct `county_name` with its `num_polling_places`.
    /// Sorted by county name so the output is reproducible regardless of
    /// input row order. Counties without records simply do not appear.
    pub fn count_per_county(df: &DataFrame) -> Result<DataFrame, PolarsError> {
        df.clone()
            .lazy()
            .group_by([col("county_name")])
            .agg([col("polling_place_id")
                .count()
                .alias("num_polling_places")])
            .sort(["county_name"], Default::default())
            .collect()
    }

    /// County names from the counts frame, in frame order.
    pub fn county_names(df_counts: &DataFrame) -> Result<Vec<String>, PolarsError> {
        Ok(df_counts
            .column("county_name")?
            .str()?
            .into_no_null_iter()
            .map(String::from)
            .collect())
    }

    /// Per-county count values from the counts frame, in frame order.
    pub fn count_values(df_counts: &DataFrame) -> Result<Vec<u32>, PolarsError> {
        let counts = df_counts
            .column("num_polling_places")?
            .cast(&DataType::UInt32)?;
        Ok(counts.u32()?.into_no_null_iter().collect())
    }

    /// Mean, median, and sample standard deviation of the counts.
    ///
    /// Pure in the multiset of values: shuffling the input changes nothing.
    pub fn compute_summary(values: &[f64]) -> SummaryStats {
        if values.is_empty() {
            return SummaryStats::default();
        }

        let mean = values.iter().mean();
        let std = values.iter().std_dev();
        let mut data = Data::new(values.to_vec());
        let median = data.median();

        SummaryStats {
            count: values.len(),
            mean,
            median,
            std,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("polling_place_id".into(), vec![1i32, 2, 3, 4, 5]),
            Column::new(
                "county_name".into(),
                ["County 1", "County 2", "County 1", "County 2", "County 3"].to_vec(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn counts_polling_places_per_county() {
        let df_counts = StatsCalculator::count_per_county(&clean_frame()).unwrap();
        assert_eq!(df_counts.height(), 3);

        let counties = StatsCalculator::county_names(&df_counts).unwrap();
        let counts = StatsCalculator::count_values(&df_counts).unwrap();
        assert_eq!(counties, ["County 1", "County 2", "County 3"]);
        assert_eq!(counts, [2, 2, 1]);
        // Counts account for every clean record.
        assert_eq!(counts.iter().sum::<u32>(), 5);
    }

    #[test]
    fn aggregation_ignores_input_row_order() {
        let shuffled = DataFrame::new(vec![
            Column::new("polling_place_id".into(), vec![5i32, 3, 1, 4, 2]),
            Column::new(
                "county_name".into(),
                ["County 3", "County 1", "County 1", "County 2", "County 2"].to_vec(),
            ),
        ])
        .unwrap();

        let a = StatsCalculator::count_per_county(&clean_frame()).unwrap();
        let b = StatsCalculator::count_per_county(&shuffled).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn reference_scenario_statistics() {
        let df_counts = StatsCalculator::count_per_county(&clean_frame()).unwrap();
        let values: Vec<f64> = StatsCalculator::count_values(&df_counts)
            .unwrap()
            .iter()
            .map(|&c| f64::from(c))
            .collect();
        let summary = StatsCalculator::compute_summary(&values);

        assert_eq!(summary.count, 3);
        assert!((summary.mean - 1.67).abs() < 0.01);
        assert!((summary.median - 2.0).abs() < f64::EPSILON);
        assert!((summary.std - 0.577).abs() < 0.01);
        // mean * n ~= sum of counts
        assert!((summary.mean * summary.count as f64 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn even_cardinality_median_averages_the_middle() {
        let summary = StatsCalculator::compute_summary(&[1.0, 2.0, 3.0, 4.0]);
        assert!((summary.median - 2.5).abs() < 1e-9);
    }

    #[test]
    fn undefined_statistics_are_nan() {
        let empty = StatsCalculator::compute_summary(&[]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());
        assert!(empty.median.is_nan());
        assert!(empty.std.is_nan());

        // A single county has a mean but no sample deviation.
        let single = StatsCalculator::compute_summary(&[4.0]);
        assert!((single.mean - 4.0).abs() < f64::EPSILON);
        assert!(single.std.is_nan());
    }
}
