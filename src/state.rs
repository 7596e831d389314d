use crate::color::GeoColors;
use crate::data::filter::{self, ScatterSeries, TimeSeries};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Axis scale
// ---------------------------------------------------------------------------

/// Axis scale choice. Presentation-only: never affects filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    pub const ALL: [AxisScale; 2] = [AxisScale::Linear, AxisScale::Log];

    pub fn label(self) -> &'static str {
        match self {
            AxisScale::Linear => "Linear",
            AxisScale::Log => "Log",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart description records – one per binding, rebuilt every frame
// ---------------------------------------------------------------------------

/// Everything the cross-indicator scatter chart needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub series: ScatterSeries,
    pub x_title: String,
    pub y_title: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
}

/// Everything the per-country time-series chart needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub series: TimeSeries,
    pub geo: String,
    pub y_title: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Default selections; each falls back to the first vocabulary entry when
/// the extract does not carry the value.
const DEFAULT_Y_INDICATOR: &str = "Gross domestic product at market prices";
const DEFAULT_X_INDICATOR: &str = "Value added, gross";
const DEFAULT_UNIT: &str = "Current prices, million euro";
const DEFAULT_GEO: &str = "European Union - 28 countries";

/// The full UI state, independent of rendering.
///
/// `dataset` is loaded once at startup and read-only afterwards; everything
/// else is the current value of one control.
pub struct AppState {
    pub dataset: Dataset,
    /// Stable geo → colour assignment shared by both charts.
    pub geo_colors: GeoColors,

    // -- scatter chart controls --
    pub x_indicator: String,
    pub y_indicator: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub scatter_unit: String,
    pub year: i32,

    // -- country chart controls --
    pub line_indicator: String,
    pub line_geo: String,
    pub line_unit: String,
}

fn pick(vocab: &[String], preferred: &str) -> String {
    vocab
        .iter()
        .find(|v| v.as_str() == preferred)
        .or_else(|| vocab.first())
        .cloned()
        .unwrap_or_default()
}

impl AppState {
    /// Build the initial state from a freshly loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let geo_colors = GeoColors::new(&dataset.geos);
        let y_indicator = pick(&dataset.indicators, DEFAULT_Y_INDICATOR);
        let unit = pick(&dataset.units, DEFAULT_UNIT);

        Self {
            geo_colors,
            x_indicator: pick(&dataset.indicators, DEFAULT_X_INDICATOR),
            line_indicator: y_indicator.clone(),
            y_indicator,
            x_scale: AxisScale::default(),
            y_scale: AxisScale::default(),
            line_unit: unit.clone(),
            scatter_unit: unit,
            year: dataset.years.last().copied().unwrap_or(0),
            line_geo: pick(&dataset.geos, DEFAULT_GEO),
            dataset,
        }
    }

    // -- linked-control setters (the scatter chart drives the country chart) --

    /// Choose the scatter y-indicator; the country chart's indicator follows.
    pub fn set_y_indicator(&mut self, indicator: String) {
        self.line_indicator = indicator.clone();
        self.y_indicator = indicator;
    }

    /// Choose the scatter unit; the country chart's unit follows.
    pub fn set_scatter_unit(&mut self, unit: String) {
        self.line_unit = unit.clone();
        self.scatter_unit = unit;
    }

    // -- chart bindings: pure functions of the current control values --

    /// Recompute the scatter chart for the current selection.
    pub fn scatter_chart(&self) -> ScatterChart {
        ScatterChart {
            series: filter::scatter_series(
                &self.dataset,
                &self.x_indicator,
                &self.y_indicator,
                &self.scatter_unit,
                self.year,
            ),
            x_title: self.x_indicator.clone(),
            y_title: self.y_indicator.clone(),
            x_scale: self.x_scale,
            y_scale: self.y_scale,
        }
    }

    /// Recompute the country time series for the current selection.
    pub fn country_chart(&self) -> LineChart {
        LineChart {
            series: filter::time_series(
                &self.dataset,
                &self.line_indicator,
                &self.line_geo,
                &self.line_unit,
            ),
            geo: self.line_geo.clone(),
            y_title: self.line_indicator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn obs(geo: &str, na_item: &str, unit: &str, time: i32, value: Option<f64>) -> Observation {
        Observation {
            geo: geo.to_string(),
            na_item: na_item.to_string(),
            unit: unit.to_string(),
            time,
            value,
        }
    }

    fn state() -> AppState {
        AppState::new(Dataset::from_observations(vec![
            obs("France", "Value added, gross", "Current prices, million euro", 2010, Some(80.0)),
            obs("France", "Gross domestic product at market prices", "Current prices, million euro", 2010, Some(100.0)),
            obs("France", "Gross domestic product at market prices", "Current prices, million euro", 2011, Some(110.0)),
            obs("Spain", "Gross domestic product at market prices", "Current prices, million euro", 2011, Some(60.0)),
        ]))
    }

    #[test]
    fn defaults_come_from_the_vocabulary() {
        let st = state();
        assert_eq!(st.y_indicator, "Gross domestic product at market prices");
        assert_eq!(st.x_indicator, "Value added, gross");
        assert_eq!(st.scatter_unit, "Current prices, million euro");
        // the preferred default geo is absent: fall back to the first one
        assert_eq!(st.line_geo, "France");
        // year slider starts at the latest observed year
        assert_eq!(st.year, 2011);
        // the country chart mirrors the scatter defaults
        assert_eq!(st.line_indicator, st.y_indicator);
        assert_eq!(st.line_unit, st.scatter_unit);
    }

    #[test]
    fn scatter_controls_drive_the_country_chart() {
        let mut st = state();
        st.set_y_indicator("Value added, gross".to_string());
        assert_eq!(st.line_indicator, "Value added, gross");

        st.set_scatter_unit("Chain linked volumes".to_string());
        assert_eq!(st.line_unit, "Chain linked volumes");
    }

    #[test]
    fn country_controls_stay_independent() {
        let mut st = state();
        st.line_indicator = "Value added, gross".to_string();
        st.line_geo = "Spain".to_string();
        assert_eq!(st.y_indicator, "Gross domestic product at market prices");
        assert_eq!(st.line_geo, "Spain");
    }

    #[test]
    fn chart_bindings_reflect_current_controls() {
        let mut st = state();
        st.year = 2010;
        let scatter = st.scatter_chart();
        assert_eq!(scatter.series.labels, vec!["France"]);
        assert_eq!(scatter.series.xs, vec![80.0]);
        assert_eq!(scatter.series.ys, vec![100.0]);
        assert_eq!(scatter.x_title, "Value added, gross");

        let line = st.country_chart();
        assert_eq!(line.series.times, vec![2010, 2011]);
        assert_eq!(line.series.values, vec![100.0, 110.0]);
        assert_eq!(line.geo, "France");
    }

    #[test]
    fn empty_selection_renders_as_empty_chart() {
        let mut st = state();
        st.year = 1900;
        let scatter = st.scatter_chart();
        assert!(scatter.series.xs.is_empty());

        st.line_geo = "Atlantis".to_string();
        let line = st.country_chart();
        assert!(line.series.times.is_empty());
    }
}
