//! Data module - dataset loading and modeling

mod loader;
mod modeler;

pub use loader::{DatasetLoader, LoaderError, DEFAULT_DATASET_FILE};
pub use modeler::{DataModeler, ModelerError};
