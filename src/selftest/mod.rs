//! Built-in self-test: runs every literal example against its expected
//! result.
//!
//! Value cases pass within `VALUE_TOLERANCE`; error cases pass when the
//! `InvalidInput` message matches exactly.

pub mod cases;
pub mod report;

pub use cases::Case;
pub use report::{CaseOutcome, CaseResult, SelfTestReport};

pub const VALUE_TOLERANCE: f64 = 1e-9;

/// Runs all built-in cases.
pub fn run() -> SelfTestReport {
    run_cases(cases::all())
}

pub fn run_cases(cases: Vec<Case>) -> SelfTestReport {
    let outcomes = cases.into_iter().map(evaluate).collect();
    let report = SelfTestReport::from_outcomes(outcomes);
    log::info!("self-test finished: {} passed, {} failed", report.passed, report.failed);
    report
}

fn evaluate(case: Case) -> CaseOutcome {
    let actual = CaseResult::from((case.eval)());
    let passed = agrees(&case.expected, &actual);

    if passed {
        log::info!("{} / {}: ok", case.function, case.name);
    } else {
        log::warn!(
            "{} / {}: expected {:?}, got {:?}",
            case.function, case.name, case.expected, actual
        );
    }

    CaseOutcome {
        name: case.name.to_owned(),
        function: case.function.to_owned(),
        expected: case.expected,
        actual,
        passed,
    }
}

fn agrees(expected: &CaseResult, actual: &CaseResult) -> bool {
    match (expected, actual) {
        (CaseResult::Value { value: e }, CaseResult::Value { value: a }) => (e - a).abs() <= VALUE_TOLERANCE,
        (CaseResult::Error { message: e }, CaseResult::Error { message: a }) => e == a,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LossError;

    #[test]
    fn test_builtin_cases_all_pass() {
        let report = run();
        let failures: Vec<_> = report.outcomes.iter().filter(|o| !o.passed).collect();
        assert!(failures.is_empty(), "failing cases: {failures:#?}");
        assert_eq!(report.passed, cases::all().len());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let report = run_cases(vec![
            Case {
                name: "wrong value",
                function: "mean_squared_error",
                expected: CaseResult::Value { value: 1.0 },
                eval: || crate::loss::mean_squared_error(&[1.0], &[1.0]),
            },
            Case {
                name: "error expected, value produced",
                function: "mean_squared_error",
                expected: CaseResult::Error { message: "x".to_owned() },
                eval: || Ok(0.0),
            },
            Case {
                name: "different message",
                function: "hinge_loss",
                expected: CaseResult::Error { message: "x".to_owned() },
                eval: || Err(LossError::invalid("y")),
            },
        ]);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 3);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = run();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failed"], 0);
        assert_eq!(json["outcomes"][0]["function"], "binary_cross_entropy");
        assert_eq!(json["outcomes"][0]["expected"]["kind"], "value");
        assert_eq!(json["outcomes"][1]["actual"]["kind"], "error");
    }
}
