pub mod engine;
pub mod generator;

pub use crate::domain::model::{GenerationSummary, ValidationOutcome, ValidationReport};
pub use crate::domain::ports::{BaseSource, ConfigProvider, RecordSink};
pub use crate::utils::error::Result;
