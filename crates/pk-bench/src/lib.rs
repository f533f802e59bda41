//! `pk-bench` — strategy timing harness and benchmark output.
//!
//! For every allocation the [`BenchmarkHarness`] runs the five search
//! strategies once each on the same `(from, to)` pair and wall-clocks each
//! call on its own.  Records accumulate in a [`BenchmarkLog`] and can be
//! exported through any [`BenchmarkWriter`]; [`CsvBenchmarkWriter`] writes the
//! timing table as `benchmarks.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_bench::{BenchmarkHarness, BenchmarkLog, CsvBenchmarkWriter};
//!
//! let harness = BenchmarkHarness::default();
//! let mut log = BenchmarkLog::new();
//! log.push(harness.run(&graph, &spots, entrance, spot)?);
//! let mut writer = CsvBenchmarkWriter::new(Path::new("./output"))?;
//! log.write_to(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod harness;
pub mod record;
pub mod writer;


pub use self::csv::CsvBenchmarkWriter;
pub use error::{BenchError, BenchResult};
pub use harness::BenchmarkHarness;
pub use record::{BenchmarkLog, BenchmarkRecord};
pub use writer::BenchmarkWriter;
