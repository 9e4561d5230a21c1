//! Append-only CSV persistence for aggregate samples.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use vanet_flow::AggregateSample;

use crate::MonitorResult;

/// The fixed header row, matching the downstream analysis scripts.
const HEADER: [&str; 4] = ["Time", "Throughput", "Avg Delay", "PDR"];

/// Writes one CSV file of aggregate samples, flushing after every row.
///
/// Lifecycle: opened once before the first tick is scheduled, closed exactly
/// once after the scheduler drains.  Appending after `close` is a
/// programming error and asserts rather than failing softly — the sampler's
/// state machine is supposed to make it impossible.
pub struct CsvSink {
    writer: Writer<File>,
    closed: bool,
}

impl CsvSink {
    /// Create (or truncate) the file at `path` and write the header row.
    ///
    /// Failure here is fatal to the run: without a metrics sink the run has
    /// no useful output, so the caller aborts with the returned error.
    pub fn open(path: &Path) -> MonitorResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self {
            writer,
            closed: false,
        })
    }

    /// Append one sample row and flush it to stable storage before returning.
    pub fn append(&mut self, sample: &AggregateSample) -> MonitorResult<()> {
        assert!(!self.closed, "append to a closed metrics sink");
        self.writer.write_record([
            sample.time.as_secs_f64().to_string(),
            sample.avg_throughput_kbps.to_string(),
            sample.avg_delay_secs.to_string(),
            sample.avg_pdr_percent.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and mark the sink closed.  Idempotent.
    pub fn close(&mut self) -> MonitorResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.writer.flush()?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
