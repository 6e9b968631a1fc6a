use std::io::{BufWriter, Write};
use std::path::Path;

use bronzegen_core::Record;

use super::write_atomic;
use crate::errors::GenerationError;

/// Write `rows` under their fixed header and return the bytes written.
///
/// The header is always emitted, so an empty dataset still yields a valid CSV.
pub fn write_rows_csv<T: Record>(path: &Path, rows: &[T]) -> Result<u64, GenerationError> {
    write_atomic(path, |file| write_rows(BufWriter::new(file), rows))
}

/// Serialize `rows` to any writer, returning the bytes produced.
pub fn write_rows<T: Record, W: Write>(writer: W, rows: &[T]) -> Result<u64, GenerationError> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(counting);

    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
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
