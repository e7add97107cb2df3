pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::CsvSink;
pub use config::GenerationSettings;
pub use crate::core::{engine::GenerationEngine, generator::RandomBaseSource};
pub use domain::cpf::{check_digits, cpf_from_string, string_to_digits, validate, Cpf};
pub use utils::error::{CpfError, Result};
