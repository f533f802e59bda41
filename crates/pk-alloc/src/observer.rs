//! Lot event callbacks.

use pk_bench::{BenchError, BenchmarkWriter};

use crate::{AllocError, Allocation, AllocationRequest, Release};

/// Callbacks invoked by [`ParkingLot`](crate::ParkingLot) after each request.
///
/// All methods default to no-ops so implementors override only what they
/// need.
pub trait LotObserver {
    /// A spot was allocated and routed to.
    fn on_allocated(&mut self, _allocation: &Allocation) {}

    /// A spot was released.
    fn on_released(&mut self, _release: &Release) {}

    /// An allocation request was refused.  Lot state is unchanged.
    fn on_rejected(&mut self, _request: &AllocationRequest, _error: &AllocError) {}
}

/// A [`LotObserver`] that does nothing.
pub struct NoopObserver;

impl LotObserver for NoopObserver {}

/// Streams each allocation's benchmark record to a [`BenchmarkWriter`].
///
/// The first failed write or flush is kept for
/// [`take_error`](Self::take_error); later failures are dropped and the lot
/// keeps running.
pub struct BenchmarkCsvObserver<W: BenchmarkWriter> {
    writer:      W,
    written:     usize,
    first_error: Option<BenchError>,
}

impl<W: BenchmarkWriter> BenchmarkCsvObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, first_error: None }
    }

    /// Records successfully written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the writer.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.note_failure(result);
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<BenchError> {
        self.first_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn note_failure(&mut self, result: pk_bench::BenchResult<()>) {
        if let Err(e) = result {
            self.first_error.get_or_insert(e);
        }
    }
}

impl<W: BenchmarkWriter> LotObserver for BenchmarkCsvObserver<W> {
    fn on_allocated(&mut self, allocation: &Allocation) {
        let result = self.writer.write_record(&allocation.benchmark);
        if result.is_ok() {
            self.written += 1;
        }
        self.note_failure(result);
    }
}
