//! Evaluation reports
//!
//! Renders an evaluation as plain text or JSON for the command line.

use crate::config::OutputFormat;
use crate::rules::{CategoryCode, CategoryFamily, Condition, Evaluation, Outcome};
use serde::Serialize;

/// Evaluation result ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub category: CategoryCode,
    pub outcome: Outcome,
    pub family: Option<CategoryFamily>,
    pub triggered_by: Vec<Condition>,
}

impl EvaluationReport {
    pub fn new(category: CategoryCode, evaluation: Evaluation) -> Self {
        Self {
            category,
            outcome: evaluation.outcome,
            family: evaluation.family,
            triggered_by: evaluation.triggered_by,
        }
    }

    /// Render the report.
    ///
    /// Text output is the bare outcome literal unless `explain` is set. JSON
    /// output always carries the full report.
    pub fn render(
        &self,
        format: OutputFormat,
        explain: bool,
    ) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text if explain => Ok(self.explanation()),
            OutputFormat::Text => Ok(self.outcome.to_string()),
        }
    }

    fn explanation(&self) -> String {
        let detail = match self.family {
            Some(CategoryFamily::Universal) => "universal category, always required".to_string(),
            Some(CategoryFamily::Conditional) if self.triggered_by.is_empty() => {
                "conditional category, no qualifying condition".to_string()
            }
            Some(CategoryFamily::Conditional) => {
                let names: Vec<&str> = self.triggered_by.iter().map(|c| c.as_str()).collect();
                format!("conditional category, triggered by {}", names.join(", "))
            }
            None => "unrecognised category prefix".to_string(),
        };
        format!("{}: {} ({})", self.category, self.outcome, detail)
    }
}
