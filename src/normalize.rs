use crate::categories::{CategoryCell, Month, Season, WeatherSituation, Weekday, Year};
use crate::derive::{classify_day, classify_humidity, scale_humidity};
use crate::error::{PipelineError, Result};
use crate::structs::{Dataset, Granularity, Record};
use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use serde::Deserialize;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Columns every source file must carry. `workingday` is required present but
/// discarded during normalization: it is redundant with the derived day-type
/// classification.
const REQUIRED_COLUMNS: [&str; 12] = [
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "hum",
    "windspeed",
    "cnt",
];

/// One row exactly as it appears in the source files: abbreviated column
/// names, integer category codes, humidity as a [0, 1] ratio.
///
/// `hr` is only present in the hourly files; `atemp`, `casual` and
/// `registered` are optional passthrough columns. `instant` (row index) and
/// `workingday` are deliberately not decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub dteday: String,
    pub season: i64,
    pub yr: i64,
    pub mnth: i64,
    pub hr: Option<u32>,
    pub holiday: i64,
    pub weekday: i64,
    pub weathersit: i64,
    pub temp: f64,
    pub atemp: Option<f64>,
    pub hum: f64,
    pub windspeed: f64,
    pub casual: Option<u64>,
    pub registered: Option<u64>,
    pub cnt: u64,
}

/// Reads a source CSV file and normalizes it into a canonical [`Dataset`].
///
/// The header is checked against the required schema before any row is
/// decoded, so a missing column fails fast with `SchemaMismatch` instead of
/// surfacing as a row-level decode error.
///
/// # Arguments
///
/// * `path` - Path to the daily or hourly CSV file
/// * `granularity` - Which schema variant to enforce (`Hourly` requires `hr`)
///
/// # Returns
///
/// Returns the fully normalized `Dataset` with exactly one record per input
/// row.
///
/// # Errors
///
/// Returns `PipelineError` if the file cannot be read, a required column is
/// missing, a date value does not parse, or a category code falls outside its
/// table.
pub fn load_dataset(path: &Path, granularity: Granularity) -> Result<Dataset> {
    debug!(
        "Reading {} data from {}",
        granularity.label(),
        path.display()
    );
    let mut reader = csv::Reader::from_path(path)?;
    check_schema(reader.headers()?, granularity)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: RawRow = row?;
        rows.push(row);
    }
    debug!("Decoded {} raw {} rows", rows.len(), granularity.label());

    normalize(rows, granularity)
}

/// Normalizes a sequence of raw rows into a canonical [`Dataset`].
///
/// Per row: the date is coerced to a calendar date, each category code is
/// wrapped in a tagged cell and translated through its closed table, humidity
/// is rescaled to the percentage scale, and the two derived fields are
/// computed. Rows are independent, so the work runs in parallel while
/// preserving input order.
///
/// Normalization is all-or-nothing: the first failing row aborts the whole
/// dataset and no partially normalized output escapes.
///
/// # Errors
///
/// Returns `DateParse` for an unparsable `dteday`, `UnknownCategoryCode` for a
/// code outside its table (including a non-0/1 `holiday` flag), and
/// `SchemaMismatch` for an hourly row without an hour value.
pub fn normalize(rows: Vec<RawRow>, granularity: Granularity) -> Result<Dataset> {
    let raw_count = rows.len();
    let records: Vec<Record> = rows
        .into_par_iter()
        .map(|row| normalize_row(row, granularity))
        .collect::<Result<_>>()?;

    // One record per raw row, no drops, no duplicates.
    debug_assert_eq!(records.len(), raw_count);
    debug!(
        "Normalized {} {} records",
        records.len(),
        granularity.label()
    );

    Ok(Dataset {
        granularity,
        records,
    })
}

fn check_schema(headers: &csv::StringRecord, granularity: Granularity) -> Result<()> {
    let mut missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .copied()
        .collect();
    if granularity == Granularity::Hourly && !headers.iter().any(|h| h == "hr") {
        missing.push("hr");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::SchemaMismatch(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

fn normalize_row(row: RawRow, granularity: Granularity) -> Result<Record> {
    // Coerce the date column first; it is the primary filter key.
    let date = NaiveDate::parse_from_str(&row.dteday, DATE_FORMAT).map_err(|source| {
        PipelineError::DateParse {
            value: row.dteday.clone(),
            source,
        }
    })?;

    // Tag the raw codes, then translate each through its closed table. The
    // translator only accepts untranslated cells.
    let season = Season::from_cell(&CategoryCell::Code(row.season))?;
    let year = Year::from_cell(&CategoryCell::Code(row.yr))?;
    let month = Month::from_cell(&CategoryCell::Code(row.mnth))?;
    let one_of_week = Weekday::from_cell(&CategoryCell::Code(row.weekday))?;
    let weather_situation = WeatherSituation::from_cell(&CategoryCell::Code(row.weathersit))?;

    let holiday = match row.holiday {
        0 => false,
        1 => true,
        code => {
            return Err(PipelineError::UnknownCategoryCode {
                field: "holiday",
                code,
            });
        }
    };

    let hours = match granularity {
        Granularity::Hourly => Some(row.hr.ok_or_else(|| {
            PipelineError::SchemaMismatch("hourly row without an hr value".to_string())
        })?),
        Granularity::Daily => None,
    };

    // Rescale before banding; the humidity classifier is defined on the
    // percentage scale, and day classification needs the translated weekday.
    let humidity = scale_humidity(row.hum);
    let category_days = classify_day(one_of_week);
    let humidity_category = classify_humidity(humidity);

    Ok(Record {
        date,
        season,
        year,
        month,
        holiday,
        one_of_week,
        weather_situation,
        temperature: row.temp,
        feels_like: row.atemp,
        humidity,
        wind_speed: row.windspeed,
        hours,
        casual: row.casual,
        registered: row.registered,
        count_cr: row.cnt,
        category_days,
        humidity_category,
    })
}
