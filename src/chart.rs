//! Bar-chart rendering of flair tallies.

use crate::count::FlairCounter;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

// Wide canvas, elongated horizontally so long flair labels fit.
const CANVAS_SIZE: (u32, u32) = (2000, 1000);

/// A chart rendering error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The counter has no labels to plot.
    #[error("no flair data to plot")]
    EmptyChart,

    /// The graphics backend failed to draw or write the chart.
    #[error("could not render chart: {0}")]
    Backend(String),
}

/// Renders a horizontal bar chart of flair counts to an image at `path`.
///
/// One bar is drawn per distinct label, in ranked order, with the count as
/// the bar length. The image format is implied by the path's extension.
///
/// Returns [`RenderError::EmptyChart`], without creating a file, if the
/// counter is empty.
// TODO: Scale the label area to the longest label instead of fixing it.
pub fn render<P: AsRef<Path>>(counter: &FlairCounter, path: P) -> Result<(), RenderError> {
    if counter.is_empty() {
        return Err(RenderError::EmptyChart);
    }

    let ranked: Vec<_> = counter.ranked().collect();
    let max_count = ranked.iter().map(|(_, count)| *count).max().unwrap_or(1);

    let root = BitMapBackend::new(path.as_ref(), CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("FLAIRS OF REDDIT USERS", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(240)
        .build_cartesian_2d(0..max_count + 1, (0..ranked.len()).into_segmented())
        .map_err(backend)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Flair Count")
        .axis_desc_style(("sans-serif", 24))
        .y_labels(ranked.len())
        .y_label_formatter(&|position| match position {
            SegmentValue::CenterOf(index) => ranked
                .get(*index)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(backend)?;

    chart
        .draw_series(ranked.iter().enumerate().map(|(index, (_, count))| {
            Rectangle::new(
                [
                    (0, SegmentValue::Exact(index)),
                    (*count, SegmentValue::Exact(index + 1)),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(backend)?;

    root.present().map_err(backend)?;
    Ok(())
}

fn backend<E: std::fmt::Display>(error: E) -> RenderError {
    RenderError::Backend(error.to_string())
}
