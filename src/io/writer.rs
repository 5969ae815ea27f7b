//! Buffered, optionally gzip-compressed table output
//!
//! The engine treats the writer as a scoped resource: create, stream the
//! header and rows, then `finish()` to flush and close. Dropping without
//! finishing still releases the file handle, but the gzip trailer is only
//! guaranteed after a successful finish.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

enum Sink {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
}

/// Writer for the `.adjusted` report table.
pub struct TableWriter {
    sink: Sink,
    path: PathBuf,
}

impl TableWriter {
    /// Create `<prefix>.adjusted`, or `<prefix>.adjusted.gz` when
    /// compressing.
    pub fn create(out_prefix: &Path, compress: bool) -> Result<Self> {
        let mut name = OsString::from(out_prefix.as_os_str());
        name.push(if compress { ".adjusted.gz" } else { ".adjusted" });
        let path = PathBuf::from(name);

        let file = File::create(&path)?;
        let sink = if compress {
            Sink::Gzip(BufWriter::new(GzEncoder::new(file, Compression::default())))
        } else {
            Sink::Plain(BufWriter::new(file))
        };
        Ok(Self { sink, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => writeln!(w, "{}", line)?,
            Sink::Gzip(w) => writeln!(w, "{}", line)?,
        }
        Ok(())
    }

    /// Flush buffers and close the stream, writing the gzip trailer.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Plain(w) => {
                w.into_inner().map_err(|e| e.into_error())?;
            }
            Sink::Gzip(w) => {
                let encoder = w.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
            }
        }
        Ok(())
    }
}
