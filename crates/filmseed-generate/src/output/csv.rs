use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use filmseed_core::Record;

/// Rows and bytes written for one table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub rows: u64,
    pub bytes: u64,
}

/// Write records as delimited lines, one per row, with no header.
///
/// The file is created or truncated and rows are written as the iterator
/// yields them. The first row error aborts the write.
pub fn write_table_csv<R, E, I>(path: &Path, delimiter: u8, rows: I) -> Result<WriteSummary, E>
where
    R: Record,
    E: From<csv::Error>,
    I: IntoIterator<Item = Result<R, E>>,
{
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(counting);

    let mut written = 0_u64;
    for row in rows {
        writer.write_record(row?.fields())?;
        written += 1;
    }

    writer.flush().map_err(csv::Error::from)?;
    let mut counting = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    counting.flush().map_err(csv::Error::from)?;
    Ok(WriteSummary {
        rows: written,
        bytes: counting.bytes_written(),
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
