//! PrintStreamView: plain-text log of every notification.
//!
//! Writes one unstyled line per callback to any `Write` sink, typically a
//! log file. It never produces input, so the observer handle is discarded.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::{DrawNumberView, ObserverHandle};
use crate::types::DrawResult;

pub struct PrintStreamView<W: Write + Send> {
    out: W,
}

impl PrintStreamView<BufWriter<File>> {
    /// Log to a file, truncating it if it exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> PrintStreamView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> DrawNumberView for PrintStreamView<W> {
    fn set_observer(&mut self, _observer: ObserverHandle) {}

    fn result(&mut self, outcome: DrawResult) -> Result<()> {
        self.println(outcome.description())
    }

    fn number_incorrect(&mut self) -> Result<()> {
        self.println("You must enter a number in the configured range")
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        self.println(&format!("Error: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_notification() {
        let mut view = PrintStreamView::new(Vec::new());
        view.result(DrawResult::TooLow).unwrap();
        view.number_incorrect().unwrap();
        view.display_error("oops").unwrap();
        view.result(DrawResult::Correct).unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Your number is too small",
                "You must enter a number in the configured range",
                "Error: oops",
                "You won",
            ]
        );
    }

    #[test]
    fn write_failures_surface_as_errors() {
        let mut view = PrintStreamView::new(BrokenPipe);
        assert!(view.result(DrawResult::TooHigh).is_err());
    }

    #[test]
    fn start_is_a_no_op() {
        let mut view = PrintStreamView::new(Vec::new());
        view.start().unwrap();
        assert!(view.into_inner().is_empty());
    }

    #[test]
    fn create_starts_a_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");
        std::fs::write(&path, "Your number is too big\n").unwrap();
        let mut view = PrintStreamView::create(&path).unwrap();
        view.result(DrawResult::NoMoreAttempts).unwrap();
        drop(view);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "You lost\n");
    }
}
