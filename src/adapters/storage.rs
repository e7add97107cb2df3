use crate::domain::ports::RecordSink;
use crate::utils::error::{CpfError, Result};
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Single-column CSV output: one record per line, no header.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    name: String,
}

impl CsvSink<File> {
    /// Create (or truncate) the file at `path`, creating parent directories.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        Ok(Self::from_writer(file, path.display().to_string()))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(inner: W, name: impl Into<String>) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        Self {
            writer,
            name: name.into(),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CpfError::IoError(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.writer.write_record([record])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_line_without_header() {
        let mut sink = CsvSink::from_writer(Vec::new(), "buffer");
        sink.write_record("11144477735").unwrap();
        sink.write_record("52998224725").unwrap();
        sink.finish().unwrap();

        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "11144477735\n52998224725\n");
    }

    #[test]
    fn test_create_makes_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("cpfs.csv");

        let mut sink = CsvSink::create(&path).unwrap();
        sink.write_record("11144477735").unwrap();
        sink.finish().unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "11144477735\n");
    }
}
