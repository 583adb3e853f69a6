use std::path::PathBuf;

use gnuplot::{AxesCommon, Caption, Figure, LineWidth};
use log::{debug, info};

use crate::chart::Chart;
use crate::errors::PlotError;

const LINE_WIDTH: f64 = 1.5;

/// Where a chart ends up.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutput {
    Png {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// Interactive gnuplot window, kept open after the gnuplot process exits.
    Window,
}

impl PlotOutput {
    pub fn validate(&self) -> Result<(), PlotError> {
        match self {
            PlotOutput::Png { width, height, .. } if *width == 0 || *height == 0 => Err(
                PlotError::InvalidOutput(format!("image size {}x{} is empty", width, height)),
            ),
            _ => Ok(()),
        }
    }
}

/// Lays the chart out as vertically stacked subplots.
pub fn build_figure(chart: &Chart) -> Figure {
    let mut figure = Figure::new();
    figure.set_title(&chart.title);

    let n_panels = chart.panels.len() as u32;
    for (idx, panel) in chart.panels.iter().enumerate() {
        let axes = figure.axes2d();
        axes.set_pos_grid(n_panels, 1, idx as u32)
            .set_y_label(&panel.y_label, &[])
            .set_x_grid(true)
            .set_y_grid(true);
        // time axis is shared, label it once under the bottom panel
        if idx as u32 + 1 == n_panels {
            axes.set_x_label(&chart.x_label, &[]);
        }
        for series in &panel.series {
            axes.lines(
                series.timestamps.iter().copied(),
                series.values.iter().copied(),
                &[Caption(series.name.as_str()), LineWidth(LINE_WIDTH)],
            );
        }
    }
    figure
}

/// Draws `chart` to `output`.
pub fn render(chart: &Chart, output: &PlotOutput) -> Result<(), PlotError> {
    output.validate()?;
    if chart.panels.iter().all(|p| p.series.is_empty()) {
        return Err(PlotError::NoData(chart.title.clone()));
    }
    debug!(
        "Rendering '{}': {} panels, time range {:?}",
        chart.title,
        chart.panels.len(),
        chart.time_range()
    );

    let mut figure = build_figure(chart);
    match output {
        PlotOutput::Png {
            path,
            width,
            height,
        } => {
            figure.save_to_png(path, *width, *height)?;
            figure.close();
            info!("Plot written to {}", path.display());
        }
        PlotOutput::Window => {
            info!("Opening plot window");
            let _sentinel = figure.show()?;
        }
    }
    Ok(())
}
