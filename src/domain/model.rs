use serde::Serialize;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub records_written: usize,
    pub output: String,
}

/// Verdict for a single candidate on the validation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub input: String,
    pub normalized: Option<String>,
    pub valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub outcomes: Vec<ValidationOutcome>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }
}
