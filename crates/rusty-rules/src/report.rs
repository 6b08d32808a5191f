// File: src/report.rs
// Purpose: Per-call violation accumulator

use crate::error::{ValidationErrors, Violation, ViolationKind};

/// Violations collected while validating one record
///
/// Created fresh for every validation call and consumed by
/// [`into_result`](Self::into_result) once all fields are done.
#[derive(Debug, Default)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against `field`
    pub fn push(&mut self, field: &str, kind: ViolationKind) {
        self.violations.push(Violation::new(field, kind));
    }

    /// Record the outcome of a single check; `Ok` adds nothing
    pub fn record(&mut self, field: &str, outcome: Result<(), ViolationKind>) {
        if let Err(kind) = outcome {
            self.push(field, kind);
        }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise every violation in order
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::from(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_ok() {
        let report = ValidationReport::new();
        assert!(report.is_empty());
        assert_eq!(report.into_result(), Ok(()));
    }

    #[test]
    fn test_record_only_keeps_failures() {
        let mut report = ValidationReport::new();
        report.record("a", Ok(()));
        report.record("b", Err(ViolationKind::Maximum));
        report.push("c", ViolationKind::Syntax);

        assert_eq!(report.len(), 2);
        let errors = report.into_result().unwrap_err();
        assert_eq!(
            errors.into_inner(),
            vec![
                Violation::new("b", ViolationKind::Maximum),
                Violation::new("c", ViolationKind::Syntax),
            ]
        );
    }
}
