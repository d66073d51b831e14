pub mod aggregate;
pub mod categories;
pub mod derive;
pub mod error;
pub mod filter;
pub mod load;
pub mod normalize;
pub mod structs;

// Re-export public API
pub use aggregate::{count_by, mean_by};
pub use categories::{CategoryCell, Month, Season, WeatherSituation, Weekday, Year};
pub use derive::{DayCategory, HumidityBand, classify_day, classify_humidity, scale_humidity};
pub use error::{PipelineError, Result};
pub use filter::filter_range;
pub use load::{write_csv, write_json, write_parquet};
pub use normalize::{RawRow, load_dataset, normalize};
pub use structs::{
    Dataset, Granularity, GroupField, Record, SimpleLogger, SummaryRow, ValueField,
};
