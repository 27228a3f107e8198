use std::collections::BTreeMap;

use super::TidyRecord;
use crate::parse::{self, RawValue};
use crate::table::{self, WideTable};

/// Parsed long-format view of one source table, keyed by (country, year).
pub type ValueMap = BTreeMap<(String, i32), Option<f64>>;

/// Melt a filled wide table and run every raw cell through the value parser.
pub fn value_map(table: &WideTable) -> ValueMap {
    table::melt(table)
        .into_iter()
        .map(|obs| {
            let value = obs
                .raw
                .and_then(|raw| parse::parse_value(&RawValue::Text(raw)));
            ((obs.country, obs.year), value)
        })
        .collect()
}

/// Inner join on (country, year): a record exists only for keys present in
/// all three maps. Null metric values pass through untouched: they affect
/// what a record holds, never whether it exists.
pub fn inner_join(
    population: ValueMap,
    life_expectancy: ValueMap,
    gni_per_capita: ValueMap,
) -> Vec<TidyRecord> {
    population
        .into_iter()
        .filter_map(|((country, year), population)| {
            let key = (country, year);
            let life_expectancy = *life_expectancy.get(&key)?;
            let gni_per_capita = *gni_per_capita.get(&key)?;
            Some(TidyRecord {
                country: key.0,
                year,
                population,
                life_expectancy,
                gni_per_capita,
            })
        })
        .collect()
}
