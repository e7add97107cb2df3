use crate::domain::cpf::{cpf_from_string, validate, Cpf};
use crate::domain::model::{GenerationSummary, ValidationOutcome, ValidationReport};
use crate::domain::ports::{BaseSource, RecordSink};
use crate::utils::error::Result;

const PROGRESS_INTERVAL: usize = 5000;

pub struct GenerationEngine<B: BaseSource> {
    source: B,
}

impl<B: BaseSource> GenerationEngine<B> {
    pub fn new(source: B) -> Self {
        Self { source }
    }

    /// Write `count` generated CPFs to `sink`, one per record.
    ///
    /// Duplicates are possible. The first sink error aborts the run.
    pub fn run<S: RecordSink>(&mut self, count: usize, sink: &mut S) -> Result<GenerationSummary> {
        let output = sink.describe();
        tracing::info!("Generating {} CPFs into {}", count, output);

        for i in 0..count {
            let cpf = Cpf::from_number(self.source.next_base())?;
            sink.write_record(&cpf.to_string())?;

            if (i + 1) % PROGRESS_INTERVAL == 0 {
                tracing::debug!("Generated {}/{} records", i + 1, count);
            }
        }
        sink.finish()?;

        tracing::info!("Wrote {} records to {}", count, output);
        Ok(GenerationSummary {
            records_written: count,
            output,
        })
    }
}

/// Check every candidate. Never fails; malformed input is just invalid.
pub fn validate_candidates<I, T>(candidates: I) -> ValidationReport
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut report = ValidationReport::default();

    for candidate in candidates {
        let input = candidate.as_ref();
        let valid = validate(input);
        if valid {
            report.valid_count += 1;
        } else {
            tracing::debug!("Invalid CPF candidate: {:?}", input);
            report.invalid_count += 1;
        }
        report.outcomes.push(ValidationOutcome {
            input: input.to_string(),
            normalized: cpf_from_string(input),
            valid,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        bases: Vec<u32>,
        next: usize,
    }

    impl BaseSource for FixedSource {
        fn next_base(&mut self) -> u32 {
            let base = self.bases[self.next % self.bases.len()];
            self.next += 1;
            base
        }
    }

    #[derive(Default)]
    struct MemorySink {
        records: Vec<String>,
        finished: bool,
    }

    impl RecordSink for MemorySink {
        fn write_record(&mut self, record: &str) -> Result<()> {
            self.records.push(record.to_string());
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    struct FailingSink;

    impl RecordSink for FailingSink {
        fn write_record(&mut self, _record: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into())
        }

        fn finish(&mut self) -> Result<()> {
            Ok(())
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_run_writes_formatted_records() {
        let source = FixedSource {
            bases: vec![111444777, 1],
            next: 0,
        };
        let mut engine = GenerationEngine::new(source);
        let mut sink = MemorySink::default();

        let summary = engine.run(3, &mut sink).unwrap();

        assert_eq!(summary.records_written, 3);
        assert_eq!(summary.output, "memory");
        assert!(sink.finished);
        assert_eq!(sink.records[0], "11144477735");
        assert_eq!(sink.records[2], "11144477735");
        assert!(sink.records[1].starts_with("000000001"));
        assert!(sink.records.iter().all(|r| validate(r)));
    }

    #[test]
    fn test_run_zero_records() {
        let source = FixedSource {
            bases: vec![1],
            next: 0,
        };
        let mut sink = MemorySink::default();
        let summary = GenerationEngine::new(source).run(0, &mut sink).unwrap();
        assert_eq!(summary.records_written, 0);
        assert!(sink.records.is_empty());
        assert!(sink.finished);
    }

    #[test]
    fn test_run_aborts_on_sink_error() {
        let source = FixedSource {
            bases: vec![1],
            next: 0,
        };
        let result = GenerationEngine::new(source).run(10, &mut FailingSink);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_candidates_counts() {
        let report = validate_candidates(["11144477735", "11144477736", "123.456.789-01", "12345"]);

        assert_eq!(report.valid_count, 1);
        assert_eq!(report.invalid_count, 3);
        assert!(!report.all_valid());
        assert_eq!(report.outcomes[2].normalized.as_deref(), Some("123456789"));
        assert_eq!(report.outcomes[3].normalized, None);
    }
}
