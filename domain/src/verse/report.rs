//! Load report — per-source failures surfaced as non-fatal warnings

use serde::{Deserialize, Serialize};

/// One source that failed to fetch or parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    /// Display name of the model whose table failed
    pub model: String,
    pub message: String,
}

impl LoadFailure {
    pub fn new(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.model, self.message)
    }
}

/// Ordered list of per-source failures from one load pass.
///
/// Produced once per load and displayed non-fatally; an empty report means
/// every source loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn push(&mut self, model: impl Into<String>, message: impl Into<String>) {
        self.failures.push(LoadFailure::new(model, message));
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoadFailure> {
        self.failures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = LoadFailure::new("Grok 2", "HTTP error: 404 Not Found");
        assert_eq!(failure.to_string(), "Grok 2: HTTP error: 404 Not Found");
    }

    #[test]
    fn test_report_preserves_order() {
        let mut report = LoadReport::default();
        report.push("Llama 2", "timeout");
        report.push("GPT-3", "parse error");
        let models: Vec<&str> = report.iter().map(|f| f.model.as_str()).collect();
        assert_eq!(models, vec!["Llama 2", "GPT-3"]);
        assert_eq!(report.len(), 2);
    }
}
