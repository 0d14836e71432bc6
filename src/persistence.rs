//! Fill Sink — the append-only trade log, off the critical path (spec §4.9 /
//! §6.6). Two writers share one buffer: a CSV file matching
//! `managers/execution.py`'s columns exactly (`execution_timestamp_utc`,
//! `strategy_id`, ..., `remaining_balance_cents` renamed
//! `strategy_event_spent_cents` to match this engine's per-event budget
//! model), and a columnar store using the schema-per-kind, one-file-per-day
//! convention of `collector/storage.py::ParquetStorage` — ported to the
//! `parquet`/`parquet_derive` crates directly (grounded in
//! `examples/other_examples/manifests/LenWilliamson-chapaty`, which pulls
//! Parquet support into a Rust trading/backtesting crate via `polars`; this
//! crate uses the lighter standalone `parquet` crate since it only needs
//! append-a-struct, not a dataframe engine).
//!
//! Unlike `ParquetStorage`'s read-concat-write cycle per flush, this sink
//! keeps each day's fills buffered in memory and rewrites that day's file
//! whole on `flush()` — acceptable because fill volume is bounded by how
//! often ladder strategies trigger, not by market data volume.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use parquet::file::properties::WriterProperties;
use parquet::file::writer::SerializedFileWriter;
use parquet::record::RecordWriter;
use parquet_derive::ParquetRecordWriter;

use crate::types::Fill;

#[derive(ParquetRecordWriter)]
struct FillRow {
    execution_timestamp_utc: String,
    strategy_id: String,
    event_ticker: String,
    series: String,
    station: String,
    market_ticker: String,
    side: String,
    contracts_filled: i64,
    avg_fill_price_cents: f64,
    total_cost_cents: i64,
    strategy_event_spent_cents: i64,
}

impl From<&Fill> for FillRow {
    fn from(f: &Fill) -> Self {
        Self {
            execution_timestamp_utc: f.wall_clock.to_rfc3339(),
            strategy_id: f.strategy_id.clone(),
            event_ticker: f.event_ticker.clone(),
            series: f.series.clone(),
            station: f.station.clone(),
            market_ticker: f.market_ticker.clone(),
            side: f.side.as_str().to_string(),
            contracts_filled: f.contracts_filled,
            avg_fill_price_cents: f.avg_fill_price_cents,
            total_cost_cents: f.total_cost_cents,
            strategy_event_spent_cents: f.strategy_event_spent_cents,
        }
    }
}

#[derive(serde::Serialize)]
struct CsvFillRow {
    execution_timestamp_utc: String,
    strategy_id: String,
    event_ticker: String,
    series: String,
    station: String,
    market_ticker: String,
    side: String,
    contracts_filled: i64,
    avg_fill_price_cents: f64,
    total_cost_cents: i64,
    strategy_event_spent_cents: i64,
}

impl From<&Fill> for CsvFillRow {
    fn from(f: &Fill) -> Self {
        Self {
            execution_timestamp_utc: f.wall_clock.to_rfc3339(),
            strategy_id: f.strategy_id.clone(),
            event_ticker: f.event_ticker.clone(),
            series: f.series.clone(),
            station: f.station.clone(),
            market_ticker: f.market_ticker.clone(),
            side: f.side.as_str().to_string(),
            contracts_filled: f.contracts_filled,
            avg_fill_price_cents: f.avg_fill_price_cents,
            total_cost_cents: f.total_cost_cents,
            strategy_event_spent_cents: f.strategy_event_spent_cents,
        }
    }
}

pub struct FillSink {
    csv_path: PathBuf,
    parquet_dir: PathBuf,
    by_day: Mutex<HashMap<NaiveDate, Vec<Fill>>>,
}

impl FillSink {
    pub fn new(csv_path: PathBuf, parquet_dir: PathBuf) -> Self {
        Self { csv_path, parquet_dir, by_day: Mutex::new(HashMap::new()) }
    }

    /// Append one fill to the CSV file immediately (cheap append-only) and to
    /// the in-memory per-day buffer the Parquet side rewrites from.
    pub async fn record(&self, fill: &Fill) -> Result<()> {
        self.append_csv(fill)?;
        let day = fill.wall_clock.date_naive();
        self.by_day.lock().expect("fill buffer poisoned").entry(day).or_default().push(fill.clone());
        Ok(())
    }

    fn append_csv(&self, fill: &Fill) -> Result<()> {
        let write_header = !self.csv_path.exists() || std::fs::metadata(&self.csv_path)?.len() == 0;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("opening fills CSV at {}", self.csv_path.display()))?;
        let mut wtr = csv::WriterBuilder::new().has_headers(write_header).from_writer(file);
        wtr.serialize(CsvFillRow::from(fill))?;
        wtr.flush()?;
        Ok(())
    }

    /// Rewrite each day's Parquet file from its in-memory buffer. Called on a
    /// schedule and always once more on shutdown (spec §4.9: "flush on
    /// shutdown").
    pub async fn flush(&self) -> Result<()> {
        let by_day = self.by_day.lock().expect("fill buffer poisoned").clone();
        if by_day.is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.parquet_dir)
            .with_context(|| format!("creating parquet dir {}", self.parquet_dir.display()))?;
        for (day, fills) in &by_day {
            let path = self.parquet_dir.join(format!("fills-{day}.parquet"));
            write_parquet(&path, fills)?;
        }
        Ok(())
    }
}

fn write_parquet(path: &Path, fills: &[Fill]) -> Result<()> {
    let rows: Vec<FillRow> = fills.iter().map(FillRow::from).collect();
    let schema = rows.as_slice().schema().context("deriving parquet schema for fills")?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating fills parquet file at {}", path.display()))?;
    let props = WriterProperties::builder().build();
    let mut writer = SerializedFileWriter::new(file, schema, props.into())
        .context("opening parquet file writer")?;
    let mut row_group = writer.next_row_group().context("opening parquet row group")?;
    rows.as_slice()
        .write_to_row_group(&mut row_group)
        .context("writing fills to parquet row group")?;
    row_group.close().context("closing parquet row group")?;
    writer.close().context("closing parquet file writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample_fill(wall_clock: chrono::DateTime<Utc>) -> Fill {
        Fill {
            wall_clock,
            strategy_id: "ladder-chi".into(),
            event_ticker: "KXHIGHCHI-26FEB21".into(),
            series: "KXHIGHCHI".into(),
            station: "KMDW".into(),
            market_ticker: "KXHIGHCHI-26FEB21-T42".into(),
            side: Side::No,
            contracts_filled: 96,
            avg_fill_price_cents: 52.0,
            total_cost_cents: 4992,
            strategy_event_spent_cents: 4992,
        }
    }

    #[tokio::test]
    async fn record_appends_csv_row_with_header_once() {
        let dir = tempdir().unwrap();
        let sink = FillSink::new(dir.path().join("fills.csv"), dir.path().join("parquet"));
        let ts = Utc::now();
        sink.record(&sample_fill(ts)).await.unwrap();
        sink.record(&sample_fill(ts)).await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("fills.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert!(lines[0].starts_with("execution_timestamp_utc"));
    }

    #[tokio::test]
    async fn flush_writes_one_parquet_file_per_day() {
        let dir = tempdir().unwrap();
        let sink = FillSink::new(dir.path().join("fills.csv"), dir.path().join("parquet"));
        let day1 = Utc.with_ymd_and_hms(2026, 2, 21, 22, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2026, 2, 22, 1, 0, 0).unwrap();
        sink.record(&sample_fill(day1)).await.unwrap();
        sink.record(&sample_fill(day2)).await.unwrap();
        sink.flush().await.unwrap();

        assert!(dir.path().join("parquet/fills-2026-02-21.parquet").exists());
        assert!(dir.path().join("parquet/fills-2026-02-22.parquet").exists());
    }
}
