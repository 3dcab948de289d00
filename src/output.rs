//! Output for matched paths and error reporting
//!
//! Matched paths go to a [`MatchSink`], one per call, in walk order.
//! [`PathPrinter`] writes them one per line; `Vec<PathBuf>` collects them.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Receives matched file paths from a walk.
pub trait MatchSink {
    fn emit(&mut self, path: &Path) -> io::Result<()>;

    /// Called once after the last match of a successful walk.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MatchSink for Vec<PathBuf> {
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        self.push(path.to_path_buf());
        Ok(())
    }
}

/// Writes each path followed by a newline. Path bytes are written as-is,
/// so names that aren't valid UTF-8 come out unchanged.
pub struct PathPrinter<W: Write> {
    out: W,
}

impl<W: Write> PathPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PathPrinter<BufWriter<io::StdoutLock<'static>>> {
    /// Buffered printer over a locked stdout.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> MatchSink for PathPrinter<W> {
    fn emit(&mut self, path: &Path) -> io::Result<()> {
        self.out.write_all(path.as_os_str().as_encoded_bytes())?;
        self.out.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Print `walk: <message>` to stderr, with a red prefix when colour is on.
pub fn report_error(message: &str, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    write_error(&mut stderr, message)
}

fn write_error<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "walk:")?;
    out.reset()?;
    writeln!(out, " {}", message)
}
