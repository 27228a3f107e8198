use serde::Serialize;

use super::{TidyDataset, TidyRecord};

/// Fixed axis ranges for the bubble chart, computed over the full dataset so
/// the rendered view keeps consistent scales while the year selection moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    /// GNI per capita axis, `[1, max]`; rendered logarithmic downstream.
    pub x: (f64, f64),
    /// Life expectancy axis, `[min, max]`.
    pub y: (f64, f64),
}

impl TidyDataset {
    /// Unique country names, sorted.
    pub fn countries(&self) -> Vec<String> {
        let mut out: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        out.sort();
        out.dedup();
        out
    }

    /// Smallest and largest year present, for the year slider.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Records for one year, restricted to the selected countries. An empty
    /// selection means every country.
    pub fn filter(&self, year: i32, countries: &[String]) -> Vec<&TidyRecord> {
        self.records
            .iter()
            .filter(|r| r.year == year)
            .filter(|r| countries.is_empty() || countries.contains(&r.country))
            .collect()
    }

    /// Axis ranges over all non-null values, or `None` when either axis has
    /// no data at all.
    pub fn axis_bounds(&self) -> Option<AxisBounds> {
        let gni_max = self
            .records
            .iter()
            .filter_map(|r| r.gni_per_capita)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))?;
        let life: Vec<f64> = self
            .records
            .iter()
            .filter_map(|r| r.life_expectancy)
            .collect();
        let life_min = life.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.min(v)))
        })?;
        let life_max = life.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        })?;

        Some(AxisBounds {
            x: (1.0, gni_max),
            y: (life_min, life_max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32, pop: f64, life: f64, gni: f64) -> TidyRecord {
        TidyRecord {
            country: country.to_string(),
            year,
            population: Some(pop),
            life_expectancy: Some(life),
            gni_per_capita: Some(gni),
        }
    }

    fn dataset() -> TidyDataset {
        TidyDataset {
            records: vec![
                record("A", 2000, 1e6, 62.0, 500.0),
                record("A", 2001, 1.1e6, 63.0, 550.0),
                record("B", 2000, 2e6, 75.0, 30_000.0),
                record("B", 2001, 2.1e6, 76.0, 31_000.0),
            ],
        }
    }

    #[test]
    fn countries_are_unique_and_sorted() {
        assert_eq!(dataset().countries(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn year_bounds_span_the_dataset() {
        assert_eq!(dataset().year_bounds(), Some((2000, 2001)));
        let empty = TidyDataset { records: vec![] };
        assert_eq!(empty.year_bounds(), None);
    }

    #[test]
    fn filter_selects_year_and_countries() {
        let data = dataset();

        let all_2000 = data.filter(2000, &[]);
        assert_eq!(all_2000.len(), 2);

        let only_b = data.filter(2000, &["B".to_string()]);
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0].country, "B");

        assert!(data.filter(1999, &[]).is_empty());
    }

    #[test]
    fn axis_bounds_are_fixed_to_the_full_dataset() {
        let bounds = dataset().axis_bounds().unwrap();
        assert_eq!(bounds.x, (1.0, 31_000.0));
        assert_eq!(bounds.y, (62.0, 76.0));
    }

    #[test]
    fn axis_bounds_skip_nulls_and_need_both_axes() {
        let mut records = vec![record("A", 2000, 1e6, 62.0, 500.0)];
        records.push(TidyRecord {
            country: "B".to_string(),
            year: 2000,
            population: None,
            life_expectancy: None,
            gni_per_capita: None,
        });
        let data = TidyDataset { records };
        let bounds = data.axis_bounds().unwrap();
        assert_eq!(bounds.x, (1.0, 500.0));
        assert_eq!(bounds.y, (62.0, 62.0));

        let gni_only = TidyDataset {
            records: vec![TidyRecord {
                country: "C".to_string(),
                year: 2000,
                population: None,
                life_expectancy: None,
                gni_per_capita: Some(100.0),
            }],
        };
        assert_eq!(gni_only.axis_bounds(), None);
    }
}
