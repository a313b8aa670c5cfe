//! Line-per-event tracing writer
//!
//! `tracing-subscriber`'s fmt layer asks its writer factory for a fresh
//! writer per event. [`LineMakeWriter`] hands back a buffer that delivers the
//! finished line, tagged with the event's level, to a sink when dropped.
//! The browser build routes these lines to the developer console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Writer factory delivering each formatted event to `sink`
#[derive(Debug, Clone)]
pub struct LineMakeWriter<S> {
    sink: S,
}

impl<S> LineMakeWriter<S>
where
    S: Fn(Level, &str) + Clone,
{
    /// Deliver every formatted event to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    fn writer(&self, level: Level) -> LineWriter<S> {
        LineWriter {
            level,
            buffer: Vec::with_capacity(128),
            sink: self.sink.clone(),
        }
    }
}

/// Buffer for one event; flushed to the sink on drop
pub struct LineWriter<S>
where
    S: Fn(Level, &str),
{
    level: Level,
    buffer: Vec<u8>,
    sink: S,
}

impl<S> io::Write for LineWriter<S>
where
    S: Fn(Level, &str),
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> Drop for LineWriter<S>
where
    S: Fn(Level, &str),
{
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

impl<'a, S> MakeWriter<'a> for LineMakeWriter<S>
where
    S: Fn(Level, &str) + Clone + 'a,
{
    type Writer = LineWriter<S>;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}
