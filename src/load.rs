use crate::error::Result;
use crate::structs::SummaryRow;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt64Array};
use arrow_schema::{DataType, Field, Schema};
use csv::Writer;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::{fs::File, path::Path, sync::Arc};

/// Writes summary rows to a CSV file.
///
/// Empty cells stand in for the unused count/mean column of each row; the
/// row order of the input (the aggregator's documented ordering) is
/// preserved.
///
/// # Errors
///
/// Returns error if the file cannot be created or written to.
pub fn write_csv(summaries: &[SummaryRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["Granularity", "Table", "Label", "Count", "Mean"])?;

    for row in summaries {
        writer.write_record(&[
            row.granularity.clone(),
            row.table.clone(),
            row.label.clone(),
            row.count.map(|c| c.to_string()).unwrap_or_default(),
            row.mean.map(|m| format!("{:.2}", m)).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes summary rows to a pretty-formatted JSON file.
///
/// # Errors
///
/// Returns error if the file cannot be created or serialization fails.
pub fn write_json(summaries: &[SummaryRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}

/// Writes summary rows to a columnar Parquet file using Arrow format.
///
/// The count and mean columns are nullable; each row fills exactly one of
/// them depending on whether it belongs to a count table or a grouped-mean
/// table.
///
/// # Errors
///
/// Returns error if the file cannot be created, the schema is invalid, or
/// Arrow operations fail.
pub fn write_parquet(summaries: &[SummaryRow], output_path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("granularity", DataType::Utf8, false),
        Field::new("table", DataType::Utf8, false),
        Field::new("label", DataType::Utf8, false),
        Field::new("count", DataType::UInt64, true),
        Field::new("mean", DataType::Float64, true),
    ]));

    let granularities: StringArray =
        StringArray::from_iter_values(summaries.iter().map(|r| r.granularity.as_str()));
    let tables: StringArray =
        StringArray::from_iter_values(summaries.iter().map(|r| r.table.as_str()));
    let labels: StringArray =
        StringArray::from_iter_values(summaries.iter().map(|r| r.label.as_str()));
    let counts: UInt64Array = summaries.iter().map(|r| r.count).collect();
    let means: Float64Array = summaries.iter().map(|r| r.mean).collect();

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(granularities),
            Arc::new(tables),
            Arc::new(labels),
            Arc::new(counts),
            Arc::new(means),
        ],
    )?;

    let file = File::create(output_path)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Granularity;
    use std::fs;

    fn sample_rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow::from_count(Granularity::Hourly, "weather_situation_counts", "Clear", 11),
            SummaryRow::from_count(Granularity::Hourly, "weather_situation_counts", "Misty", 4),
            SummaryRow::from_mean(
                Granularity::Daily,
                "mean_temperature_by_weather",
                "Clear",
                21.5,
            ),
        ]
    }

    #[test]
    fn test_write_csv_preserves_row_order() {
        let path = std::env::temp_dir().join("bikeshare_summary.csv");
        write_csv(&sample_rows(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Granularity,Table,Label,Count,Mean");
        assert_eq!(lines[1], "hourly,weather_situation_counts,Clear,11,");
        assert_eq!(lines[2], "hourly,weather_situation_counts,Misty,4,");
        assert_eq!(lines[3], "daily,mean_temperature_by_weather,Clear,,21.50");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_json_round_trips() {
        let path = std::env::temp_dir().join("bikeshare_summary.json");
        write_json(&sample_rows(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Vec<SummaryRow> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].label, "Clear");
        assert_eq!(parsed[0].count, Some(11));
        assert_eq!(parsed[2].mean, Some(21.5));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_parquet_one_row_per_summary() {
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

        let path = std::env::temp_dir().join("bikeshare_summary.parquet");
        write_parquet(&sample_rows(), &path).unwrap();

        let file = File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let total_rows: usize = reader.map(|batch| batch.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 3);
        fs::remove_file(&path).ok();
    }
}
