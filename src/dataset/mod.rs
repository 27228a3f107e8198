// src/dataset/mod.rs
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::table::{self, WideTable};

pub mod join;
pub mod view;

pub use view::AxisBounds;

/// Column name shared by all three source tables.
pub const KEY_COLUMN: &str = "country";

/// Locations of the three source tables.
#[derive(Debug, Clone)]
pub struct Sources {
    pub population: PathBuf,
    pub life_expectancy: PathBuf,
    pub gni_per_capita: PathBuf,
}

impl Sources {
    /// Bind the conventional file names under `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            population: dir.join("population.csv"),
            life_expectancy: dir.join("life_expectancy.csv"),
            gni_per_capita: dir.join("gni.csv"),
        }
    }
}

/// One (country, year) observation across all three metrics. A `None` metric
/// is a value that was still missing after forward-fill, or cell text the
/// parser could not interpret.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TidyRecord {
    pub country: String,
    pub year: i32,
    pub population: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub gni_per_capita: Option<f64>,
}

/// The merged tidy table, ordered by (country, year).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TidyDataset {
    pub records: Vec<TidyRecord>,
}

/// Build the tidy dataset: load each source, forward-fill it, melt it to
/// long format, parse the values, and inner-join the three on
/// (country, year).
///
/// A missing or malformed source file aborts the build; malformed cells
/// never do, they come through as `None` values.
#[tracing::instrument(level = "info", skip(sources))]
pub fn build(sources: &Sources) -> Result<TidyDataset> {
    let population = load_filled(&sources.population)?;
    let life_expectancy = load_filled(&sources.life_expectancy)?;
    let gni_per_capita = load_filled(&sources.gni_per_capita)?;

    let records = join::inner_join(
        join::value_map(&population),
        join::value_map(&life_expectancy),
        join::value_map(&gni_per_capita),
    );

    info!(rows = records.len(), "built tidy dataset");
    Ok(TidyDataset { records })
}

fn load_filled(path: &Path) -> Result<WideTable> {
    let mut table = table::load_wide_csv(path, KEY_COLUMN)
        .with_context(|| format!("loading source table {}", path.display()))?;
    table::forward_fill(&mut table);
    Ok(table)
}

static SHARED: OnceCell<TidyDataset> = OnceCell::new();

/// Process-wide memoized [`build`]: computed on the first successful call,
/// then returned as-is forever after. The sources of that first call win;
/// invalidation is process restart.
pub fn shared(sources: &Sources) -> Result<&'static TidyDataset> {
    SHARED.get_or_try_init(|| build(sources))
}
