use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::config::FigureSettings;
use crate::data::model::Study;
use crate::scour::comparison::Comparison;
use crate::scour::equations::Equation;

use super::style::{draw_marker, study_style};

const FONT: &str = "sans-serif";
const X_LABEL_AREA: i32 = 50;
const Y_LABEL_AREA: i32 = 65;
const PANEL_PAD: i32 = 12;
const LEGEND_COLUMNS: usize = 3;
const IDENTITY_LABEL: &str = "Computed = Measured";

// ---------------------------------------------------------------------------
// Layout helpers
// ---------------------------------------------------------------------------

/// Margins (vertical, horizontal) that make the plotting box of a panel
/// square, once the axis label areas are taken out.
pub fn square_margins(width: u32, height: u32) -> (i32, i32) {
    let plot_w = width as i32 - Y_LABEL_AREA - 2 * PANEL_PAD;
    let plot_h = height as i32 - X_LABEL_AREA - 2 * PANEL_PAD;
    let side = plot_w.min(plot_h).max(0);
    (
        PANEL_PAD + (plot_h - side).max(0) / 2,
        PANEL_PAD + (plot_w - side).max(0) / 2,
    )
}

/// A point is drawn only when both coordinates are finite and inside the
/// fixed axis range.
pub fn is_plottable(measured: f64, computed: f64, axis_max: f64) -> bool {
    let inside = |v: f64| v.is_finite() && (0.0..=axis_max).contains(&v);
    inside(measured) && inside(computed)
}

// ---------------------------------------------------------------------------
// Comparison figure
// ---------------------------------------------------------------------------

/// Render the 2×2 measured-vs-computed grid and write it as a PNG,
/// overwriting `out_path`.
pub fn render_comparison(cmp: &Comparison, settings: &FigureSettings, out_path: &Path) -> Result<()> {
    if let Some(dir) = out_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let size = settings.image_size();
    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (grid, legend) = root.split_vertically((2 * settings.panel_size) as i32);
    let panels = grid.split_evenly((2, 2));

    for (panel, eq) in panels.iter().zip(Equation::ALL) {
        draw_panel(panel, cmp, eq, settings)?;
    }
    draw_legend(&legend, settings)?;

    root.present()
        .with_context(|| format!("writing figure to {}", out_path.display()))?;
    log::info!("figure written to {}", out_path.display());
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, plotters::coord::Shift>,
    cmp: &Comparison,
    eq: Equation,
    settings: &FigureSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let titled = panel.titled(eq.title(), (FONT, 28))?;
    let (w, h) = titled.dim_in_pixel();
    let (v, hz) = square_margins(w, h);
    let area = titled.margin(v, v, hz, hz);

    let max = settings.axis_max;
    let mut chart = ChartBuilder::on(&area)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0.0..max, 0.0..max)?;

    chart
        .configure_mesh()
        .x_desc("Measured y2 [m]")
        .y_desc("Computed y2 [m]")
        .x_labels(6)
        .y_labels(6)
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .axis_desc_style((FONT, 18))
        .label_style((FONT, 15))
        .draw()?;

    chart.draw_series(LineSeries::new(
        vec![(0.0, 0.0), (max, max)],
        BLACK.stroke_width(2),
    ))?;

    let plot_area = chart.plotting_area();
    let mut drawn = 0usize;
    let mut skipped = 0usize;
    for study in Study::ALL {
        let style = study_style(study);
        for (m, c) in cmp.pairs(study, eq) {
            if !is_plottable(m, c, max) {
                skipped += 1;
                continue;
            }
            draw_marker(plot_area, (m, c), &style, settings.marker_size)?;
            drawn += 1;
        }
    }

    log::debug!("{eq}: {drawn} points drawn, {skipped} skipped (NaN or off-axis)");
    Ok(())
}

/// Consolidated legend under the grid: the identity line, then one entry
/// per study, filled row by row.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    settings: &FigureSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (w, _) = area.dim_in_pixel();
    let col_width = w as i32 / LEGEND_COLUMNS as i32;
    let anchor = |i: usize| {
        let col = (i % LEGEND_COLUMNS) as i32;
        let row = (i / LEGEND_COLUMNS) as i32;
        (col * col_width + 40, 25 + row * 36)
    };
    let text_style = (FONT, 22).into_font();

    let (x, y) = anchor(0);
    area.draw(&PathElement::new(
        vec![(x - 14, y), (x + 14, y)],
        BLACK.stroke_width(2),
    ))?;
    area.draw(&Text::new(IDENTITY_LABEL, (x + 24, y - 11), text_style.clone()))?;

    for (i, study) in Study::ALL.into_iter().enumerate() {
        let style = study_style(study);
        let (x, y) = anchor(i + 1);
        draw_marker(area, (x, y), &style, settings.marker_size + 1)?;
        area.draw(&Text::new(style.label, (x + 24, y - 11), text_style.clone()))?;
    }
    Ok(())
}
