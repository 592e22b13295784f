//! Output sinks for operations with side effects

use std::io::{self, Write};

/// Destination for the side effects of an operation (e.g. `draw`).
///
/// Supplied by the caller on every apply/dispatch call, so the same
/// registry can render to a terminal, a buffer, or nowhere.
pub trait Sink {
    /// Emit one line of output.
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn emit(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Writes newline-terminated lines to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush and return the inner writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit("a").unwrap();
        sink.emit("b").unwrap();
        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_vec_sink_through_reference() {
        fn emit_into<S: Sink>(mut sink: S) {
            sink.emit("x").unwrap();
        }

        let mut lines: Vec<String> = Vec::new();
        emit_into(&mut lines);
        assert_eq!(lines, vec!["x".to_string()]);
    }
}
