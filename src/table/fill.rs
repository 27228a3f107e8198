use super::WideTable;

/// Replace each missing cell with the nearest preceding value in the same
/// row, walking the columns in ascending year order. Each key's series is
/// filled independently; leading gaps stay missing.
///
/// Filling an already-complete table is a no-op.
pub fn forward_fill(table: &mut WideTable) {
    let mut order: Vec<usize> = (0..table.years.len()).collect();
    order.sort_by_key(|&i| table.years[i]);

    for (_, cells) in &mut table.rows {
        let mut last: Option<String> = None;
        for &i in &order {
            match &cells[i] {
                Some(v) => last = Some(v.clone()),
                None => cells[i] = last.clone(),
            }
        }
    }
}
