use std::collections::BTreeMap;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// FilterQuery – exact-match conjunctive predicate
// ---------------------------------------------------------------------------

/// Exact-match constraints over the categorical/time columns.
/// A field left as `None` matches every row; all present fields must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub geo: Option<String>,
    pub na_item: Option<String>,
    pub unit: Option<String>,
    pub time: Option<i32>,
}

impl FilterQuery {
    /// Whether the observation satisfies every present constraint.
    pub fn matches(&self, obs: &Observation) -> bool {
        fn field_ok(constraint: &Option<String>, actual: &str) -> bool {
            constraint.as_deref().map_or(true, |want| want == actual)
        }
        field_ok(&self.geo, &obs.geo)
            && field_ok(&self.na_item, &obs.na_item)
            && field_ok(&self.unit, &obs.unit)
            && self.time.map_or(true, |want| want == obs.time)
    }
}

/// Return indices of observations passing the query, in source order.
///
/// An empty query returns every index; no match returns an empty list,
/// which downstream renders as an empty chart rather than an error.
pub fn filtered_indices(dataset: &Dataset, query: &FilterQuery) -> Vec<usize> {
    dataset
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| query.matches(obs))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Chart projections
// ---------------------------------------------------------------------------

/// Point data for the cross-indicator scatter chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub xs: Vec<f64>,
    /// Same length as `xs`.
    pub ys: Vec<f64>,
    /// Geo label per point, same length as `xs`.
    pub labels: Vec<String>,
}

/// Pair two indicators for one unit and year, joined on geo.
///
/// Geos enumerate in the order the y-indicator subset lists them; a geo
/// missing either indicator's value (absent row or null) contributes no
/// point, so `xs`, `ys` and `labels` always stay aligned.
pub fn scatter_series(
    dataset: &Dataset,
    x_indicator: &str,
    y_indicator: &str,
    unit: &str,
    time: i32,
) -> ScatterSeries {
    let query = FilterQuery {
        unit: Some(unit.to_string()),
        time: Some(time),
        ..FilterQuery::default()
    };
    let slice = filtered_indices(dataset, &query);

    // x-indicator value per geo; a duplicate row overwrites in source order
    let mut x_by_geo: BTreeMap<&str, f64> = BTreeMap::new();
    for &i in &slice {
        let obs = &dataset.observations[i];
        if obs.na_item == x_indicator {
            if let Some(v) = obs.value {
                x_by_geo.insert(obs.geo.as_str(), v);
            }
        }
    }

    let mut series = ScatterSeries::default();
    for &i in &slice {
        let obs = &dataset.observations[i];
        if obs.na_item != y_indicator {
            continue;
        }
        let (Some(y), Some(&x)) = (obs.value, x_by_geo.get(obs.geo.as_str())) else {
            continue;
        };
        series.xs.push(x);
        series.ys.push(y);
        series.labels.push(obs.geo.clone());
    }
    series
}

/// Line data for the per-country time-series chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub times: Vec<i32>,
    /// Same length as `times`.
    pub values: Vec<f64>,
}

/// All (year, value) pairs for one geo/indicator/unit triple, in dataset
/// order, with null values skipped.
pub fn time_series(dataset: &Dataset, indicator: &str, geo: &str, unit: &str) -> TimeSeries {
    let query = FilterQuery {
        geo: Some(geo.to_string()),
        na_item: Some(indicator.to_string()),
        unit: Some(unit.to_string()),
        ..FilterQuery::default()
    };

    let mut series = TimeSeries::default();
    for i in filtered_indices(dataset, &query) {
        let obs = &dataset.observations[i];
        if let Some(v) = obs.value {
            series.times.push(obs.time);
            series.values.push(v);
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(geo: &str, na_item: &str, unit: &str, time: i32, value: Option<f64>) -> Observation {
        Observation {
            geo: geo.to_string(),
            na_item: na_item.to_string(),
            unit: unit.to_string(),
            time,
            value,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_observations(vec![
            obs("A", "GDP", "U", 2010, Some(100.0)),
            obs("B", "GDP", "U", 2010, Some(200.0)),
            obs("A", "VA", "U", 2010, Some(80.0)),
            obs("B", "VA", "U", 2010, None),
            obs("C", "GDP", "U", 2010, Some(300.0)),
            obs("A", "GDP", "U", 2011, Some(110.0)),
            obs("A", "GDP", "V", 2010, Some(1.0)),
        ])
    }

    #[test]
    fn empty_query_is_identity() {
        let ds = sample();
        let indices = filtered_indices(&ds, &FilterQuery::default());
        assert_eq!(indices, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn conjunctive_filter_preserves_source_order() {
        let ds = sample();
        let query = FilterQuery {
            unit: Some("U".to_string()),
            time: Some(2010),
            ..FilterQuery::default()
        };
        let indices = filtered_indices(&ds, &query);
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        for &i in &indices {
            let obs = &ds.observations[i];
            assert_eq!(obs.unit, "U");
            assert_eq!(obs.time, 2010);
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let ds = sample();
        let query = FilterQuery {
            na_item: Some("GDP".to_string()),
            ..FilterQuery::default()
        };
        let first: Vec<Observation> = filtered_indices(&ds, &query)
            .into_iter()
            .map(|i| ds.observations[i].clone())
            .collect();

        let refiltered = Dataset::from_observations(first.clone());
        let second: Vec<Observation> = filtered_indices(&refiltered, &query)
            .into_iter()
            .map(|i| refiltered.observations[i].clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn time_series_pairs_stay_aligned() {
        let ds = sample();
        let series = time_series(&ds, "GDP", "A", "U");
        assert_eq!(series.times, vec![2010, 2011]);
        assert_eq!(series.values, vec![100.0, 110.0]);
    }

    #[test]
    fn time_series_skips_null_values() {
        let ds = sample();
        let series = time_series(&ds, "VA", "B", "U");
        assert!(series.times.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn scatter_joins_on_geo() {
        let ds = sample();
        let series = scatter_series(&ds, "VA", "GDP", "U", 2010);
        // B's VA is null and C has no VA row: only A survives the join
        assert_eq!(series.labels, vec!["A"]);
        assert_eq!(series.xs, vec![80.0]);
        assert_eq!(series.ys, vec![100.0]);
    }

    #[test]
    fn scatter_enumerates_in_y_subset_order() {
        let ds = Dataset::from_observations(vec![
            obs("B", "VA", "U", 2010, Some(2.0)),
            obs("A", "VA", "U", 2010, Some(1.0)),
            obs("A", "GDP", "U", 2010, Some(10.0)),
            obs("B", "GDP", "U", 2010, Some(20.0)),
        ]);
        let series = scatter_series(&ds, "VA", "GDP", "U", 2010);
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.xs, vec![1.0, 2.0]);
        assert_eq!(series.ys, vec![10.0, 20.0]);
    }

    #[test]
    fn no_match_yields_empty_series_not_error() {
        let ds = sample();
        let series = scatter_series(&ds, "VA", "GDP", "U", 1900);
        assert!(series.xs.is_empty());
        assert!(series.ys.is_empty());
        assert!(series.labels.is_empty());
    }
}
