use super::WideTable;

/// One melted (key, year, raw cell) triple. The cell text is untouched here;
/// numeric interpretation happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub country: String,
    pub year: i32,
    pub raw: Option<String>,
}

/// Reshape wide → long: one observation per (row, year column) pair, year
/// columns in source order.
pub fn melt(table: &WideTable) -> Vec<RawObservation> {
    let mut out = Vec::with_capacity(table.rows.len() * table.years.len());
    for (country, cells) in &table.rows {
        for (i, year) in table.years.iter().enumerate() {
            out.push(RawObservation {
                country: country.clone(),
                year: *year,
                raw: cells.get(i).cloned().flatten(),
            });
        }
    }
    out
}

/// Inverse of [`melt`]: rebuild a wide table from observations. Years and
/// keys come out in first-seen order, so pivoting a freshly melted table
/// reproduces it exactly.
pub fn pivot(observations: &[RawObservation], key_column: &str) -> WideTable {
    let mut years: Vec<i32> = Vec::new();
    for obs in observations {
        if !years.contains(&obs.year) {
            years.push(obs.year);
        }
    }

    let mut rows: Vec<(String, Vec<Option<String>>)> = Vec::new();
    for obs in observations {
        let col = years
            .iter()
            .position(|y| *y == obs.year)
            .expect("year collected above");
        let row = match rows.iter_mut().find(|(k, _)| k == &obs.country) {
            Some(row) => row,
            None => {
                rows.push((obs.country.clone(), vec![None; years.len()]));
                rows.last_mut().expect("row pushed above")
            }
        };
        row.1[col] = obs.raw.clone();
    }

    WideTable {
        key_column: key_column.to_string(),
        years,
        rows,
    }
}
