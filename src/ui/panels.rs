use eframe::egui::{self, ComboBox, RichText, Slider, Ui};

use crate::state::{AppState, AxisScale};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Eurostat GDP components").strong());
        ui.separator();

        let ds = &state.dataset;
        let years = ds
            .year_range()
            .map(|(min, max)| format!("{min}-{max}"))
            .unwrap_or_default();
        ui.label(format!(
            "{} observations, {} indicators, {} countries, {years}",
            ds.len(),
            ds.indicators.len(),
            ds.geos.len(),
        ));
    });
}

// ---------------------------------------------------------------------------
// Scatter chart controls (y/x indicator, scales, unit)
// ---------------------------------------------------------------------------

/// The dropdown/radio row feeding the scatter chart. Committing a new
/// y-indicator or unit here also overwrites the country chart's matching
/// dropdown; the country chart's own controls never feed back.
pub fn scatter_controls(ui: &mut Ui, state: &mut AppState) {
    let indicators = state.dataset.indicators.clone();
    let units = state.dataset.units.clone();

    ui.columns(3, |cols| {
        cols[0].strong("Y-axis");
        let mut y_indicator = state.y_indicator.clone();
        if vocab_combo(&mut cols[0], "y_indicator", &indicators, &mut y_indicator) {
            state.set_y_indicator(y_indicator);
        }
        scale_radio(&mut cols[0], &mut state.y_scale);

        cols[1].strong("X-axis");
        let mut x_indicator = state.x_indicator.clone();
        if vocab_combo(&mut cols[1], "x_indicator", &indicators, &mut x_indicator) {
            state.x_indicator = x_indicator;
        }
        scale_radio(&mut cols[1], &mut state.x_scale);

        cols[2].strong("Metric");
        let mut unit = state.scatter_unit.clone();
        if vocab_combo(&mut cols[2], "scatter_unit", &units, &mut unit) {
            state.set_scatter_unit(unit);
        }
    });
}

// ---------------------------------------------------------------------------
// Year slider
// ---------------------------------------------------------------------------

/// Year slider under the scatter chart, snapping to observed years.
pub fn year_slider(ui: &mut Ui, state: &mut AppState) {
    let Some((min, max)) = state.dataset.year_range() else {
        return;
    };
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Year");
        let response = ui.add(Slider::new(&mut state.year, min..=max));
        if response.changed() {
            state.year = state.dataset.snap_year(state.year);
        }
    });
}

// ---------------------------------------------------------------------------
// Country chart controls (indicator, country, unit)
// ---------------------------------------------------------------------------

/// The dropdown row feeding the per-country time-series chart.
pub fn country_controls(ui: &mut Ui, state: &mut AppState) {
    let indicators = state.dataset.indicators.clone();
    let geos = state.dataset.geos.clone();
    let units = state.dataset.units.clone();

    ui.columns(3, |cols| {
        cols[0].strong("Indicator");
        vocab_combo(&mut cols[0], "line_indicator", &indicators, &mut state.line_indicator);

        cols[1].strong("Country");
        vocab_combo(&mut cols[1], "line_geo", &geos, &mut state.line_geo);

        cols[2].strong("Metric");
        vocab_combo(&mut cols[2], "line_unit", &units, &mut state.line_unit);
    });
}

// ---------------------------------------------------------------------------
// Widget helpers
// ---------------------------------------------------------------------------

/// Dropdown over a vocabulary. Returns true when a different value was picked.
fn vocab_combo(ui: &mut Ui, id: &str, vocab: &[String], current: &mut String) -> bool {
    let mut changed = false;
    ComboBox::from_id_salt(id)
        .selected_text(current.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for item in vocab {
                if ui.selectable_label(current == item, item).clicked() && current != item {
                    *current = item.clone();
                    changed = true;
                }
            }
        });
    changed
}

/// Linear/Log radio pair.
fn scale_radio(ui: &mut Ui, scale: &mut AxisScale) {
    ui.horizontal(|ui: &mut Ui| {
        for option in AxisScale::ALL {
            ui.radio_value(scale, option, option.label());
        }
    });
}
