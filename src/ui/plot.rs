use eframe::egui::Ui;
use egui_plot::{GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::GeoColors;
use crate::state::{AxisScale, LineChart, ScatterChart};

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Map a value onto the axis. Log axes carry log10 of the value; a
/// non-positive value has no position there and yields `None`.
fn axis_value(value: f64, scale: AxisScale) -> Option<f64> {
    match scale {
        AxisScale::Linear => Some(value),
        AxisScale::Log => (value > 0.0).then(|| value.log10()),
    }
}

/// Tick labels for a log10-transformed axis: label the decades, leave
/// intermediate marks blank.
fn log_tick_label(mark: GridMark) -> String {
    if (mark.value - mark.value.round()).abs() < 1e-6 {
        format!("1e{}", mark.value.round() as i64)
    } else {
        String::new()
    }
}

/// Tick labels for the year axis: whole years only.
fn year_tick_label(mark: GridMark) -> String {
    if (mark.value - mark.value.round()).abs() < 1e-6 {
        format!("{}", mark.value.round() as i64)
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Cross-indicator scatter chart
// ---------------------------------------------------------------------------

/// Render the scatter chart: one point per country, hover shows the name.
pub fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, colors: &GeoColors) {
    let mut plot = Plot::new("indicator_scatter")
        .height(320.0)
        .x_axis_label(chart.x_title.clone())
        .y_axis_label(chart.y_title.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if chart.x_scale == AxisScale::Log {
        plot = plot.x_axis_formatter(|mark, _range| log_tick_label(mark));
    }
    if chart.y_scale == AxisScale::Log {
        plot = plot.y_axis_formatter(|mark, _range| log_tick_label(mark));
    }

    plot.show(ui, |plot_ui| {
        let series = &chart.series;
        for ((&x, &y), geo) in series.xs.iter().zip(&series.ys).zip(&series.labels) {
            let (Some(px), Some(py)) = (axis_value(x, chart.x_scale), axis_value(y, chart.y_scale))
            else {
                continue;
            };
            plot_ui.points(
                Points::new(vec![[px, py]])
                    .name(geo)
                    .color(colors.color_for(geo))
                    .shape(MarkerShape::Circle)
                    .radius(5.0),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Per-country time-series chart
// ---------------------------------------------------------------------------

/// Render the time-series chart for the selected country.
pub fn country_chart(ui: &mut Ui, chart: &LineChart, colors: &GeoColors) {
    let points: Vec<[f64; 2]> = chart
        .series
        .times
        .iter()
        .zip(&chart.series.values)
        .map(|(&t, &v)| [f64::from(t), v])
        .collect();
    let color = colors.color_for(&chart.geo);

    Plot::new("country_series")
        .height(320.0)
        .x_axis_label("Years")
        .y_axis_label(chart.y_title.clone())
        .x_axis_formatter(|mark, _range| year_tick_label(mark))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name(&chart.geo)
                    .color(color)
                    .width(1.5),
            );
            // markers on top of the line, matching the lines+markers style
            plot_ui.points(
                Points::new(points)
                    .name(&chart.geo)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .radius(4.0),
            );
        });
}
