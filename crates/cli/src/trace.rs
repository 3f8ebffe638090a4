//! Event stream writer: one JSON object per line.

use std::io::{self, Write};

use hullscan::{HullEvent, HullObserver};

/// Observer that serializes every event as a JSON line.
///
/// Write errors do not abort the engine; the first one is kept and surfaced
/// by `finish`.
pub struct JsonLinesObserver<W: Write> {
    out: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    /// Flush and return the number of events written.
    pub fn finish(mut self) -> io::Result<usize> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.written)
    }

    fn write_event(&mut self, event: &HullEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> HullObserver for JsonLinesObserver<W> {
    fn observe(&mut self, event: &HullEvent) {
        if self.error.is_some() {
            return;
        }
        match self.write_event(event) {
            Ok(()) => self.written += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
