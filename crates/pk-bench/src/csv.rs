//! CSV export backend.
//!
//! Creates `benchmarks.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::writer::BenchmarkWriter;
use crate::{BenchResult, BenchmarkRecord};

/// Column header of `benchmarks.csv`.
pub const HEADER: [&str; 7] = [
    "from",
    "spot",
    "dijkstra_ns",
    "bellman_ford_ns",
    "cbs_ns",
    "jps_ns",
    "combined_ns",
];

/// Writes benchmark records to a CSV file.
pub struct CsvBenchmarkWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvBenchmarkWriter {
    /// Open (or create) `dir/benchmarks.csv` and write the header row.
    pub fn new(dir: &Path) -> BenchResult<Self> {
        let mut out = Writer::from_path(dir.join("benchmarks.csv"))?;
        out.write_record(HEADER)?;
        Ok(Self { out, finished: false })
    }
}

impl BenchmarkWriter for CsvBenchmarkWriter {
    fn write_record(&mut self, record: &BenchmarkRecord) -> BenchResult<()> {
        let [d, bf, cbs, jps, comb] = record.timings();
        self.out.write_record(&[
            record.from.0.to_string(),
            record.spot.0.to_string(),
            d.to_string(),
            bf.to_string(),
            cbs.to_string(),
            jps.to_string(),
            comb.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
