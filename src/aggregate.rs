use crate::structs::{GroupField, Record, ValueField};
use std::collections::HashMap;

/// Counts record occurrences per label of a categorical field.
///
/// The result is ordered by descending count, ties broken by
/// first-encountered label order; downstream ranking displays consume this
/// ordering as-is. Labels with no occurrences are absent. An empty input
/// yields an empty vector.
///
/// # Arguments
///
/// * `records` - The (usually range-filtered) records to count over
/// * `field` - The categorical field to group by
pub fn count_by(records: &[Record], field: GroupField) -> Vec<(&'static str, u64)> {
    let mut counts: HashMap<&'static str, u64> = HashMap::new();
    let mut order: Vec<&'static str> = Vec::new();

    for record in records {
        let label = field.label_of(record);
        match counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                counts.insert(label, 1);
                order.push(label);
            }
        }
    }

    let mut result: Vec<(&'static str, u64)> =
        order.into_iter().map(|label| (label, counts[label])).collect();
    // Stable sort keeps first-encountered order for equal counts.
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Computes the arithmetic mean of a numeric field per label of a
/// categorical field.
///
/// One entry per label present in the data, in first-encountered order;
/// labels absent from the input are omitted, never zero-filled. A present
/// label has at least one contributing row, so no division by zero can
/// occur. An empty input yields an empty vector.
///
/// # Arguments
///
/// * `records` - The (usually range-filtered) records to average over
/// * `group_field` - The categorical field to group by
/// * `value_field` - The numeric field to average
pub fn mean_by(
    records: &[Record],
    group_field: GroupField,
    value_field: ValueField,
) -> Vec<(&'static str, f64)> {
    let mut sums: HashMap<&'static str, (f64, u64)> = HashMap::new();
    let mut order: Vec<&'static str> = Vec::new();

    for record in records {
        let label = group_field.label_of(record);
        let value = value_field.value_of(record);
        match sums.get_mut(label) {
            Some((sum, count)) => {
                *sum += value;
                *count += 1;
            }
            None => {
                sums.insert(label, (value, 1));
                order.push(label);
            }
        }
    }

    order
        .into_iter()
        .map(|label| {
            let (sum, count) = sums[label];
            (label, sum / count as f64)
        })
        .collect()
}
