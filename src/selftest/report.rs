use serde::{Serialize, Deserialize};

use crate::error::LossError;

/// What a self-test case produced, or is expected to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseResult {
    Value { value: f64 },
    Error { message: String },
}

impl From<Result<f64, LossError>> for CaseResult {
    fn from(result: Result<f64, LossError>) -> Self {
        match result {
            Ok(value) => CaseResult::Value { value },
            Err(err) => CaseResult::Error { message: err.message().to_owned() },
        }
    }
}

/// One evaluated example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Short case label, unique within the run.
    pub name: String,
    /// Loss function under test.
    pub function: String,
    pub expected: CaseResult,
    pub actual: CaseResult,
    pub passed: bool,
}

/// Result of a full self-test run, serializable to JSON for the `--json` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl SelfTestReport {
    pub fn from_outcomes(outcomes: Vec<CaseOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        let failed = outcomes.len() - passed;
        SelfTestReport { outcomes, passed, failed }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Fixed-width text table, one line per case plus a summary line.
    pub fn to_table(&self) -> String {
        let mut out = format!("{:<6}  {:<32}  {:<44}  {}\n", "Status", "Function", "Case", "Actual");
        out.push_str(&"-".repeat(110));
        out.push('\n');
        for o in &self.outcomes {
            let status = if o.passed { "ok" } else { "FAIL" };
            let actual = match &o.actual {
                CaseResult::Value { value } => format!("{value}"),
                CaseResult::Error { message } => format!("error: {message}"),
            };
            out.push_str(&format!("{:<6}  {:<32}  {:<44}  {}\n", status, o.function, o.name, actual));
        }
        out.push_str(&format!("\n{} passed, {} failed\n", self.passed, self.failed));
        out
    }
}
