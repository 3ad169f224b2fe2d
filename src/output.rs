//! Line fan-out for rendered output.
//!
//! A [`LineSink`] holds any number of writers and hands every emitted line to each of
//! them in turn, so the console and the report file observe the same ordered text.

use crate::TreeviewError;
use std::io::Write;

/// A set of writers that all receive every emitted line.
#[derive(Default)]
pub struct LineSink<'a> {
    sinks: Vec<&'a mut dyn Write>,
}

impl<'a> LineSink<'a> {
    /// Creates a sink with no destinations.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Adds a destination. Lines are written to destinations in the order they were added.
    pub fn with(mut self, sink: &'a mut dyn Write) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Number of attached destinations.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Writes `text` to every destination, stopping at the first failure.
    pub fn emit(&mut self, text: &str) -> Result<(), TreeviewError> {
        for sink in self.sinks.iter_mut() {
            sink.write_all(text.as_bytes())
                .map_err(TreeviewError::Write)?;
        }
        Ok(())
    }

    /// Flushes every destination.
    pub fn flush(&mut self) -> Result<(), TreeviewError> {
        for sink in self.sinks.iter_mut() {
            sink.flush().map_err(TreeviewError::Write)?;
        }
        Ok(())
    }
}
