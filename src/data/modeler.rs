//! Data Modeler Module
//! Filters incomplete records and coerces the raw text columns to their types.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelerError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("type coercion failed for column '{column}': {source}")]
    TypeCoercion {
        column: String,
        source: PolarsError,
    },
}

/// Turns raw records into clean records.
///
/// Rows missing `polling_place_id` or `polling_place_name` are dropped;
/// `polling_place_id` and `zip` become Int32 and `election_dt` becomes a
/// Date parsed from `MM/DD/YYYY` text. All transforms return a new frame;
/// the input is never mutated.
pub struct DataModeler;

impl DataModeler {
    pub fn model(df_raw: &DataFrame) -> Result<DataFrame, ModelerError> {
        let filtered = df_raw
            .clone()
            .lazy()
            .filter(
                col("polling_place_id")
                    .is_not_null()
                    .and(col("polling_place_id").neq(lit("")))
                    .and(col("polling_place_name").is_not_null())
                    .and(col("polling_place_name").neq(lit(""))),
            )
            .collect()?;

        // Casts run one column at a time so a failure names its column.
        let df = Self::cast_int32(filtered, "polling_place_id")?;
        let df = Self::cast_int32(df, "zip")?;
        Self::parse_election_date(df)
    }

    fn cast_int32(df: DataFrame, column: &str) -> Result<DataFrame, ModelerError> {
        df.lazy()
            .with_columns([col(column).strict_cast(DataType::Int32)])
            .collect()
            .map_err(|source| ModelerError::TypeCoercion {
                column: column.to_string(),
                source,
            })
    }

    fn parse_election_date(df: DataFrame) -> Result<DataFrame, ModelerError> {
        df.lazy()
            .with_columns([col("election_dt").str().to_date(StrptimeOptions {
                format: Some("%m/%d/%Y".into()),
                strict: true,
                ..Default::default()
            })])
            .collect()
            .map_err(|source| ModelerError::TypeCoercion {
                column: "election_dt".to_string(),
                source,
            })
    }
}
