use crate::utils::error::Result;

/// Source of nine-digit bases for generated CPFs.
pub trait BaseSource {
    fn next_base(&mut self) -> u32;
}

/// Destination for formatted records, one per line.
pub trait RecordSink {
    fn write_record(&mut self, record: &str) -> Result<()>;

    /// Flush buffered records. Called once, after the last record.
    fn finish(&mut self) -> Result<()>;

    /// Human-readable name of the destination, for logs and summaries.
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn count(&self) -> usize;
    fn output_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}
