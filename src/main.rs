use chrono::NaiveDate;
use clap::Parser;
use lib::{
    Dataset, Granularity, GroupField, PipelineError, SimpleLogger, SummaryRow, ValueField,
    count_by, filter_range, load_dataset, mean_by, write_csv, write_json, write_parquet,
};
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Daily rentals CSV file
    #[arg(long, default_value = "day.csv")]
    day_file: PathBuf,

    /// Hourly rentals CSV file
    #[arg(long, default_value = "hour.csv")]
    hour_file: PathBuf,

    /// Start date (YYYY-MM-DD, inclusive). Defaults to the earliest daily date.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD, inclusive). Defaults to the latest daily date.
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Output base name (will create dir containing .csv, .json, and .parquet files)
    #[arg(short, long, default_value = "output")]
    output: String,

    /// Log level for output
    #[arg(long, default_value = "false")]
    debug: bool,
}

fn print_counts(granularity: Granularity, entries: &[(&'static str, u64)]) {
    println!("  [{}]", granularity.label());
    if entries.is_empty() {
        println!("    (no rows in range)");
    }
    for (label, count) in entries {
        println!("    {label}: {count}");
    }
}

fn print_means(granularity: Granularity, entries: &[(&'static str, f64)]) {
    println!("  [{}]", granularity.label());
    if entries.is_empty() {
        println!("    (no rows in range)");
    }
    for (label, mean) in entries {
        println!("    {label}: {mean:.2}");
    }
}

fn collect_counts(
    summaries: &mut Vec<SummaryRow>,
    granularity: Granularity,
    table: &str,
    entries: &[(&'static str, u64)],
) {
    for (label, count) in entries {
        summaries.push(SummaryRow::from_count(granularity, table, label, *count));
    }
}

fn collect_means(
    summaries: &mut Vec<SummaryRow>,
    granularity: Granularity,
    table: &str,
    entries: &[(&'static str, f64)],
) {
    for (label, mean) in entries {
        summaries.push(SummaryRow::from_mean(granularity, table, label, *mean));
    }
}

fn main() -> Result<(), PipelineError> {
    // Initialize timer and logger
    let total_start = Instant::now();
    log::set_logger(&LOGGER).unwrap();

    // Acquire CLI args
    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }

    // UI
    println!("Bikeshare! Rust Rental Analytics Pipeline");
    debug!(
        "Daily file: {} | Hourly file: {}",
        args.day_file.display(),
        args.hour_file.display()
    );

    // Load and normalize both granularities
    println!("Loading and normalizing datasets...");
    let load_start = Instant::now();
    let day_data = load_dataset(&args.day_file, Granularity::Daily)?;
    let hour_data = load_dataset(&args.hour_file, Granularity::Hourly)?;
    println!(
        "Normalized {} daily and {} hourly records in {:.2?}",
        day_data.len(),
        hour_data.len(),
        load_start.elapsed()
    );

    // The selectable range is bounded by the dates observed in the daily
    // dataset; explicit bounds are clamped into that span independently.
    let (min_date, max_date) = day_data
        .date_span()
        .ok_or_else(|| PipelineError::Data("daily dataset contains no rows".to_string()))?;
    let start_date = args.start_date.unwrap_or(min_date).clamp(min_date, max_date);
    let end_date = args.end_date.unwrap_or(max_date).clamp(min_date, max_date);
    debug!(
        "Selected range: {} to {} | Observed span: {} to {}",
        start_date, end_date, min_date, max_date
    );

    // Filter both datasets to the selected range
    let filter_start = Instant::now();
    let filtered_day = filter_range(&day_data, start_date, end_date);
    let filtered_hour = filter_range(&hour_data, start_date, end_date);
    println!(
        "Selected {} to {}: {} daily and {} hourly records ({:.2?})",
        start_date,
        end_date,
        filtered_day.len(),
        filtered_hour.len(),
        filter_start.elapsed()
    );

    // Compute and print the report tables
    let aggregate_start = Instant::now();
    let mut summaries: Vec<SummaryRow> = Vec::new();
    let both: [(Granularity, &Dataset); 2] = [
        (Granularity::Hourly, &filtered_hour),
        (Granularity::Daily, &filtered_day),
    ];

    println!("\nCounts of rentals by weather situation");
    for (granularity, data) in both {
        let counts = count_by(&data.records, GroupField::WeatherSituation);
        print_counts(granularity, &counts);
        collect_counts(
            &mut summaries,
            granularity,
            "weather_situation_counts",
            &counts,
        );
    }

    println!("\nCounts of rentals by humidity category");
    for (granularity, data) in both {
        let counts = count_by(&data.records, GroupField::HumidityCategory);
        print_counts(granularity, &counts);
        collect_counts(
            &mut summaries,
            granularity,
            "humidity_category_counts",
            &counts,
        );
    }

    println!("\nCounts of rentals by season");
    for (granularity, data) in both {
        let counts = count_by(&data.records, GroupField::Season);
        print_counts(granularity, &counts);
        collect_counts(&mut summaries, granularity, "season_counts", &counts);
    }

    println!("\nAverage temperature by weather situation");
    for (granularity, data) in both {
        let means = mean_by(
            &data.records,
            GroupField::WeatherSituation,
            ValueField::Temperature,
        );
        print_means(granularity, &means);
        collect_means(
            &mut summaries,
            granularity,
            "mean_temperature_by_weather",
            &means,
        );
    }
    debug!(
        "Computed {} summary rows in {:.2?}",
        summaries.len(),
        aggregate_start.elapsed()
    );

    // Create output directory
    let output_dir = PathBuf::from(format!("./output/{}", args.output));
    fs::create_dir_all(&output_dir)?;
    println!(
        "\nCreated output directory: {} | Writing output files...",
        output_dir.display()
    );
    let io_start = Instant::now();

    // Extract just the directory name for the file names (remove path separators)
    let output_name = args
        .output
        .split(['/', '\\'])
        .next_back()
        .unwrap_or(&args.output);
    let csv_path = output_dir.join(format!("{}.csv", output_name));
    let json_path = output_dir.join(format!("{}.json", output_name));
    let parquet_path = output_dir.join(format!("{}.parquet", output_name));

    write_csv(&summaries, &csv_path)?;
    write_json(&summaries, &json_path)?;
    write_parquet(&summaries, &parquet_path)?;
    println!("All files took {:.2?}", io_start.elapsed());
    debug!("  - {}", csv_path.display());
    debug!("  - {}", json_path.display());
    debug!("  - {}", parquet_path.display());

    println!(
        "\nPipeline completed successfully in {:.2?}",
        total_start.elapsed()
    );
    Ok(())
}
