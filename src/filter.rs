use crate::structs::Dataset;
use chrono::NaiveDate;

/// Restricts a dataset to rows dated within `[start_date, end_date]`,
/// inclusive on both bounds.
///
/// The source dataset is never mutated; the result is a freshly allocated
/// dataset preserving the original row order. An inverted range
/// (`start_date > end_date`) matches nothing and yields an empty dataset —
/// permissive by design, since an inverted selection is a harmless no-match
/// rather than a programming error.
pub fn filter_range(dataset: &Dataset, start_date: NaiveDate, end_date: NaiveDate) -> Dataset {
    let records = dataset
        .records
        .iter()
        .filter(|record| record.date >= start_date && record.date <= end_date)
        .cloned()
        .collect();

    Dataset {
        granularity: dataset.granularity,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{RawRow, normalize};
    use crate::structs::Granularity;

    fn dataset(dates: &[&str]) -> Dataset {
        let rows = dates
            .iter()
            .map(|date| RawRow {
                dteday: date.to_string(),
                season: 1,
                yr: 0,
                mnth: 1,
                hr: None,
                holiday: 0,
                weekday: 1,
                weathersit: 1,
                temp: 10.0,
                atemp: None,
                hum: 0.5,
                windspeed: 0.2,
                casual: None,
                registered: None,
                cnt: 10,
            })
            .collect();
        normalize(rows, Granularity::Daily).unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        date.parse().unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ds = dataset(&["2011-01-01", "2011-01-02", "2011-01-03", "2011-01-04"]);
        let filtered = filter_range(&ds, day("2011-01-02"), day("2011-01-03"));
        let dates: Vec<_> = filtered.records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day("2011-01-02"), day("2011-01-03")]);
    }

    #[test]
    fn test_equal_bounds_keep_only_that_date() {
        let ds = dataset(&["2011-01-01", "2011-01-02", "2011-01-02", "2011-01-03"]);
        let filtered = filter_range(&ds, day("2011-01-02"), day("2011-01-02"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.records.iter().all(|r| r.date == day("2011-01-02")));
    }

    #[test]
    fn test_full_span_returns_everything_in_order() {
        let ds = dataset(&["2011-01-03", "2011-01-01", "2011-01-02"]);
        let (min, max) = ds.date_span().unwrap();
        let filtered = filter_range(&ds, min, max);
        assert_eq!(filtered.len(), ds.len());
        // Original row order, not date order.
        let dates: Vec<_> = filtered.records.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![day("2011-01-03"), day("2011-01-01"), day("2011-01-02")]
        );
    }

    #[test]
    fn test_inverted_range_is_empty_not_an_error() {
        let ds = dataset(&["2011-01-01", "2011-01-02"]);
        let filtered = filter_range(&ds, day("2011-01-02"), day("2011-01-01"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_match_is_empty_and_source_untouched() {
        let ds = dataset(&["2011-01-01", "2011-01-02"]);
        let filtered = filter_range(&ds, day("2012-06-01"), day("2012-06-30"));
        assert!(filtered.is_empty());
        assert_eq!(ds.len(), 2);
    }
}
