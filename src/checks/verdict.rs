//! Check outcomes.

/// Outcome of one verification check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the check is considered a success.
    pub passed: bool,
    /// The overall status message, human-readable.
    pub message: String,
    /// Corroborating successful sub-checks, in the order they ran.
    pub secondary: Vec<String>,
    /// Non-fatal anomalies that never affect `passed`.
    pub warnings: Vec<String>,
}

/// Accumulates secondary notes and warnings while a check runs, then seals
/// the verdict exactly once.
///
/// `pass` and `fail` consume the builder, so a check cannot revisit its
/// outcome after a failure path returns.
#[derive(Debug, Default)]
pub struct VerdictBuilder {
    secondary: Vec<String>,
    warnings: Vec<String>,
}

impl VerdictBuilder {
    /// Starts an empty verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful sub-check.
    pub fn secondary(&mut self, note: impl Into<String>) -> &mut Self {
        self.secondary.push(note.into());
        self
    }

    /// Records a non-fatal anomaly.
    pub fn warning(&mut self, note: impl Into<String>) -> &mut Self {
        self.warnings.push(note.into());
        self
    }

    /// Seals the verdict as a success.
    pub fn pass(self, message: impl Into<String>) -> Verdict {
        self.finish(true, message)
    }

    /// Seals the verdict as a failure.
    pub fn fail(self, message: impl Into<String>) -> Verdict {
        self.finish(false, message)
    }

    fn finish(self, passed: bool, message: impl Into<String>) -> Verdict {
        Verdict {
            passed,
            message: message.into(),
            secondary: self.secondary,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_keeps_notes_in_order() {
        let mut builder = VerdictBuilder::new();
        builder.secondary("first").secondary("second").warning("odd");
        let verdict = builder.pass("all good");
        assert!(verdict.passed);
        assert_eq!(verdict.message, "all good");
        assert_eq!(verdict.secondary, vec!["first", "second"]);
        assert_eq!(verdict.warnings, vec!["odd"]);
    }

    #[test]
    fn test_fail_with_empty_notes() {
        let verdict = VerdictBuilder::new().fail("broken");
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "broken");
        assert!(verdict.secondary.is_empty());
        assert!(verdict.warnings.is_empty());
    }
}
