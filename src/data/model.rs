// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single Eurostat observation (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Country or region name (`GEO`).
    pub geo: String,
    /// Economic indicator (`NA_ITEM`), e.g. "Gross domestic product at market prices".
    pub na_item: String,
    /// Measurement unit (`UNIT`), e.g. "Current prices, million euro".
    pub unit: String,
    /// Year (`TIME`).
    pub time: i32,
    /// Measured value. `None` for the `:` sentinel or unparseable text;
    /// never reaches a chart.
    pub value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with vocabularies derived once at load time.
///
/// Immutable after construction: the vocabularies always cover every
/// observation's `na_item`/`geo`/`unit`/`time`.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All observations in source order.
    pub observations: Vec<Observation>,
    /// Distinct `na_item` values, first-seen order.
    pub indicators: Vec<String>,
    /// Distinct `geo` values, first-seen order.
    pub geos: Vec<String>,
    /// Distinct `unit` values, first-seen order.
    pub units: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
}

impl Dataset {
    /// Build the vocabulary indices from the loaded observations.
    ///
    /// String vocabularies keep first-seen order so the dropdowns enumerate
    /// values the way the source file introduces them; years sort ascending
    /// for the slider.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut indicators: Vec<String> = Vec::new();
        let mut geos: Vec<String> = Vec::new();
        let mut units: Vec<String> = Vec::new();
        let mut years: Vec<i32> = Vec::new();

        fn push_unique(vocab: &mut Vec<String>, value: &str) {
            if !vocab.iter().any(|v| v == value) {
                vocab.push(value.to_string());
            }
        }

        for obs in &observations {
            push_unique(&mut indicators, &obs.na_item);
            push_unique(&mut geos, &obs.geo);
            push_unique(&mut units, &obs.unit);
            if !years.contains(&obs.time) {
                years.push(obs.time);
            }
        }
        years.sort_unstable();

        Dataset {
            observations,
            indicators,
            geos,
            units,
            years,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Smallest and largest observed year, if any data exists.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        match (self.years.first(), self.years.last()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }

    /// The observed year closest to `year` (ties resolve to the earlier one).
    pub fn snap_year(&self, year: i32) -> i32 {
        self.years
            .iter()
            .copied()
            .min_by_key(|&y| (y - year).abs())
            .unwrap_or(year)
    }
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

    #[test]
    fn vocabularies_keep_first_seen_order() {
        let ds = Dataset::from_observations(vec![
            obs("Spain", "GDP", "Million euro", 2012, Some(1.0)),
            obs("France", "Value added", "Million euro", 2010, Some(2.0)),
            obs("Spain", "GDP", "Per capita", 2011, Some(3.0)),
        ]);

        assert_eq!(ds.geos, vec!["Spain", "France"]);
        assert_eq!(ds.indicators, vec!["GDP", "Value added"]);
        assert_eq!(ds.units, vec!["Million euro", "Per capita"]);
        // years sort ascending regardless of appearance order
        assert_eq!(ds.years, vec![2010, 2011, 2012]);
        assert_eq!(ds.year_range(), Some((2010, 2012)));
    }

    #[test]
    fn snap_year_picks_nearest_observed() {
        let ds = Dataset::from_observations(vec![
            obs("Spain", "GDP", "Million euro", 2008, Some(1.0)),
            obs("Spain", "GDP", "Million euro", 2014, Some(2.0)),
        ]);

        assert_eq!(ds.snap_year(2009), 2008);
        assert_eq!(ds.snap_year(2013), 2014);
        // equidistant: earlier year wins
        assert_eq!(ds.snap_year(2011), 2008);
    }

    #[test]
    fn empty_dataset_has_no_year_range() {
        let ds = Dataset::from_observations(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_range(), None);
    }
}
