//! Stats module - county aggregation and summary statistics

mod calculator;

pub use calculator::{StatsCalculator, SummaryStats};
