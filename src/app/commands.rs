use crate::adapters::CsvSink;
use crate::config::GenerationSettings;
use crate::core::engine::{validate_candidates, GenerationEngine};
use crate::core::generator::RandomBaseSource;
use crate::core::{ConfigProvider, GenerationSummary, ValidationReport};
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::Validate;
use std::path::Path;

/// Generate `settings.count` CPFs into `settings.output_path`.
pub fn generate(settings: &GenerationSettings) -> Result<GenerationSummary> {
    settings.validate()?;

    let source = RandomBaseSource::from_seed_option(settings.seed());
    let mut sink = CsvSink::create(settings.output_path())?;
    GenerationEngine::new(source).run(settings.count(), &mut sink)
}

/// Collect candidates from the command line and, if given, a file with one
/// candidate per line. Blank lines are skipped and surrounding whitespace is
/// trimmed.
pub fn read_candidates(inline: &[String], input: Option<&Path>) -> Result<Vec<String>> {
    let mut candidates = inline.to_vec();

    if let Some(path) = input {
        let content = std::fs::read_to_string(path)?;
        let before = candidates.len();
        candidates.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        tracing::debug!(
            "Read {} candidates from {}",
            candidates.len() - before,
            path.display()
        );
    }

    Ok(candidates)
}

pub fn validate<T: AsRef<str>>(candidates: &[T]) -> ValidationReport {
    let report = validate_candidates(candidates);
    tracing::info!(
        "Checked {} candidates: {} valid, {} invalid",
        report.outcomes.len(),
        report.valid_count,
        report.invalid_count
    );
    report
}

/// Render a report as `candidate<TAB>valid|invalid` lines, or as JSON.
pub fn render_report(report: &ValidationReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    Ok(report
        .outcomes
        .iter()
        .map(|o| format!("{}\t{}\n", o.input, if o.valid { "valid" } else { "invalid" }))
        .collect())
}

/// In strict mode, fail if any candidate was invalid.
pub fn check_strict(report: &ValidationReport, strict: bool) -> Result<()> {
    if strict && !report.all_valid() {
        return Err(CpfError::InvalidCandidates {
            invalid: report.invalid_count,
            total: report.outcomes.len(),
        });
    }
    Ok(())
}
