//! The `BenchmarkWriter` trait implemented by export backends.

use crate::{BenchResult, BenchmarkRecord};

/// Sink for benchmark records.
pub trait BenchmarkWriter {
    /// Append one record.
    fn write_record(&mut self, record: &BenchmarkRecord) -> BenchResult<()>;

    /// Flush and close the underlying output.
    ///
    /// Idempotent; later calls are no-ops.
    fn finish(&mut self) -> BenchResult<()>;
}
