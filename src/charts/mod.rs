//! Charts module - static chart rendering

mod renderer;

pub use renderer::{ChartError, ChartRenderer, CHART_FILE_NAME};
