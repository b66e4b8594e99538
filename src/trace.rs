use std::{
    fmt::{self, Display},
    io::Write,
};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::dataset::Label;

/// A single observable event of a training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRecord {
    /// An epoch is about to start. `epoch` is 1-based.
    Epoch { epoch: usize, total: usize },

    /// A sample went through the perceptron. `weights` are the ones used for the prediction,
    /// `weighted_sum` is rounded to 3 decimals.
    Sample {
        input: Vec<f64>,
        target: Label,
        weights: Vec<f64>,
        weighted_sum: f64,
    },

    /// The weights after a sample was processed, whether they changed or not.
    Updated { weights: Vec<f64> },
}

impl Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceRecord::Epoch { epoch, total } => write!(f, "epoch {epoch}/{total}"),
            TraceRecord::Sample {
                input,
                target,
                weights,
                weighted_sum,
            } => write!(
                f,
                "I/P: {input:?}   O/P: {target}   W: {weights:?}   W_Sum: {weighted_sum}"
            ),
            TraceRecord::Updated { weights } => write!(f, "updated weights: {weights:?}"),
        }
    }
}

/// An ordered, append-only destination for trace records.
pub trait TraceSink {
    fn record(&mut self, record: TraceRecord);
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceRecord),
{
    fn record(&mut self, record: TraceRecord) {
        self(&record)
    }
}

/// Renders every record as a human readable `info` log line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, record: TraceRecord) {
        info!("{record}");
    }
}

/// Keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vec<TraceRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Returns how many samples went through the perceptron.
    pub fn forward_passes(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, TraceRecord::Sample { .. }))
            .count()
    }
}

impl TraceSink for MemorySink {
    fn record(&mut self, record: TraceRecord) {
        self.records.push(record);
    }
}

/// Writes one JSON object per line. Write failures are logged and otherwise ignored.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn record(&mut self, record: TraceRecord) {
        let written = serde_json::to_writer(&mut self.writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"));

        if let Err(e) = written {
            warn!("failed to write trace record: {e}");
        }
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _record: TraceRecord) {}
}
