//! Dataset Loader Module
//! Handles loading the polling place export (UTF-16, tab-separated) using Polars.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_16LE;
use polars::prelude::*;
use thiserror::Error;

/// File name of the reference polling place export.
pub const DEFAULT_DATASET_FILE: &str = "polling_place_20240514.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("dataset file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid UTF-16: {0}")]
    Encoding(PathBuf),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Reads the delimited export into an all-text DataFrame.
///
/// Schema inference is disabled so every column arrives as a string; typing
/// is the modeler's job. The export is UTF-16 with a BOM, so the bytes are
/// decoded up front and the CSV reader works on the transcoded buffer.
pub struct DatasetLoader {
    ignore_errors: bool,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Tolerant loader: rows with the wrong column count or unparsable
    /// fields are skipped instead of aborting the load.
    pub fn new() -> Self {
        Self {
            ignore_errors: true,
        }
    }

    /// Strict loader: any malformed row fails the load.
    pub fn strict() -> Self {
        Self {
            ignore_errors: false,
        }
    }

    /// Load the dataset at `path` into a DataFrame of raw records.
    pub fn load(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        // BOM sniffing picks UTF-16BE/LE when present; BOM-less input is
        // treated as little-endian like the original export.
        let (text, _, had_errors) = UTF_16LE.decode(&bytes);
        if had_errors {
            return Err(LoaderError::Encoding(path.to_path_buf()));
        }

        let cursor = Cursor::new(text.into_owned().into_bytes());
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(self.ignore_errors)
            .with_parse_options(
                CsvParseOptions::default()
                    .with_separator(b'\t')
                    .with_truncate_ragged_lines(self.ignore_errors),
            )
            .into_reader_with_file_handle(cursor)
            .finish()?;

        Ok(df)
    }
}
