//! Static Chart Renderer
//! Draws the polling-places-per-county bar chart to a PNG file.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::FontTransform;
use thiserror::Error;

/// File name of the rendered chart inside the output directory.
pub const CHART_FILE_NAME: &str = "polling_places_per_county.png";

const CHART_SIZE: (u32, u32) = (1200, 600);
const BAR_COLOR: RGBColor = RGBColor(52, 152, 219);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Renders the per-county bar chart.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw one bar per county into `<output_dir>/polling_places_per_county.png`.
    ///
    /// The output directory is created if absent. An empty counts table
    /// produces a blank canvas instead of an error.
    pub fn render_county_bar_chart(
        counties: &[String],
        counts: &[u32],
        output_dir: &Path,
    ) -> Result<PathBuf, ChartError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(CHART_FILE_NAME);

        let render_path = path.clone();
        let root = BitMapBackend::new(&render_path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| ChartError::Render(e.to_string()))?;

        if counties.is_empty() {
            root.present().map_err(|e| ChartError::Render(e.to_string()))?;
            return Ok(path);
        }

        let y_max = counts.iter().copied().max().unwrap_or(0).max(1);
        let n = counties.len() as u32;

        let mut chart = ChartBuilder::on(&root)
            .caption("Number of Polling Places per County", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(140)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max + 1)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(counties.len())
            .x_label_formatter(&|seg| match seg {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => counties
                    .get(*i as usize)
                    .cloned()
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            // County names are long; stand them upright so they stay legible.
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_desc("County Name")
            .y_desc("Number of Polling Places")
            .draw()
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(4)
                    .data(counts.iter().enumerate().map(|(i, &c)| (i as u32, c))),
            )
            .map_err(|e| ChartError::Render(e.to_string()))?;

        root.present().map_err(|e| ChartError::Render(e.to_string()))?;
        Ok(path)
    }
}
