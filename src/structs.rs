use chrono::NaiveDate;
use log::{Log, Metadata, Record as LogRecord};
use serde::{Deserialize, Serialize};

use crate::categories::{Month, Season, WeatherSituation, Weekday, Year};
use crate::derive::{DayCategory, HumidityBand};

/// Simple logger implementation
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &LogRecord) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Row cadence of a dataset. The two granularities share one schema shape;
/// the hourly files additionally carry an hour-of-day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Hourly,
}

impl Granularity {
    pub fn label(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Hourly => "hourly",
        }
    }
}

/// One fully normalized observation row.
///
/// All categorical fields are translated enums (no raw code survives
/// normalization), humidity is on the percentage scale, and both derived
/// fields are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub season: Season,
    pub year: Year,
    pub month: Month,
    pub holiday: bool,
    pub one_of_week: Weekday,
    pub weather_situation: WeatherSituation,
    pub temperature: f64,
    /// Feels-like temperature, carried through when the source has it.
    pub feels_like: Option<f64>,
    /// Humidity percentage in [0, 100].
    pub humidity: f64,
    pub wind_speed: f64,
    /// Hour of day, hourly granularity only.
    pub hours: Option<u32>,
    pub casual: Option<u64>,
    pub registered: Option<u64>,
    /// Total rental count.
    pub count_cr: u64,
    pub category_days: DayCategory,
    pub humidity_category: HumidityBand,
}

/// An ordered, immutable sequence of normalized records sharing one schema.
///
/// Built once per source file and never mutated afterwards; range filtering
/// produces fresh `Dataset` values instead of views into this one.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub granularity: Granularity,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest date present, or `None` for an empty dataset.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

/// Categorical field an aggregation groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Season,
    Year,
    Month,
    OneOfWeek,
    WeatherSituation,
    CategoryDays,
    HumidityCategory,
}

impl GroupField {
    /// Translated label of this field on a given record.
    pub fn label_of(self, record: &Record) -> &'static str {
        match self {
            GroupField::Season => record.season.label(),
            GroupField::Year => record.year.label(),
            GroupField::Month => record.month.label(),
            GroupField::OneOfWeek => record.one_of_week.label(),
            GroupField::WeatherSituation => record.weather_situation.label(),
            GroupField::CategoryDays => record.category_days.label(),
            GroupField::HumidityCategory => record.humidity_category.label(),
        }
    }
}

/// Numeric field an aggregation averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Temperature,
    Humidity,
    WindSpeed,
    CountCr,
}

impl ValueField {
    pub fn value_of(self, record: &Record) -> f64 {
        match self {
            ValueField::Temperature => record.temperature,
            ValueField::Humidity => record.humidity,
            ValueField::WindSpeed => record.wind_speed,
            ValueField::CountCr => record.count_cr as f64,
        }
    }
}

/// One row of the summary tables handed to the presentation layer.
///
/// Count tables fill `count`, grouped-mean tables fill `mean`; the other
/// column stays empty. Row order inside a table is the aggregator's
/// documented ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub granularity: String,
    pub table: String,
    pub label: String,
    pub count: Option<u64>,
    pub mean: Option<f64>,
}

impl SummaryRow {
    pub fn from_count(granularity: Granularity, table: &str, label: &str, count: u64) -> Self {
        Self {
            granularity: granularity.label().to_string(),
            table: table.to_string(),
            label: label.to_string(),
            count: Some(count),
            mean: None,
        }
    }

    pub fn from_mean(granularity: Granularity, table: &str, label: &str, mean: f64) -> Self {
        Self {
            granularity: granularity.label().to_string(),
            table: table.to_string(),
            label: label.to_string(),
            count: None,
            mean: Some(mean),
        }
    }
}
