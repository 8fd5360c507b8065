//! End-to-end tests for the analysis pipeline.
//!
//! Drives `AnalysisService` with raw CSV text and checks the assembled
//! payloads, including the reference recording worked through by hand.

use gaze_insight_application::AnalysisService;
use gaze_insight_domain::AnalysisOutcome;

const REFERENCE_RECORDING: &str = "\
elapsedTime(seconds),x,y
0.000,100.50,200.30
0.016,101.20,201.15
0.032,102.10,202.05
0.048,103.05,203.20
0.064,104.15,204.35
";

fn analyze(input: &str) -> AnalysisOutcome {
    AnalysisService::new().analyze(input)
}

#[test]
fn test_reference_recording() {
    let outcome = analyze(REFERENCE_RECORDING);

    let report = match outcome {
        AnalysisOutcome::Completed(report) => report,
        AnalysisOutcome::Failed(failure) => panic!("unexpected failure: {}", failure.error),
    };

    // Derived by hand from the five samples: distances
    // [1.10114, 1.27279, 1.49164, 1.59138], all over 16ms steps. The speed
    // spread exceeds 10, so stability floors at 0.
    assert_eq!(report.analysis.total_points, 5);
    assert_eq!(report.analysis.duration_seconds, 0.06);
    assert_eq!(report.analysis.average_movement, 1.36);
    assert_eq!(report.analysis.total_movement, 5.46);
    assert_eq!(report.analysis.stability_score, 0.0);
    assert_eq!(report.analysis.coverage_area, 14.78);

    // 50 + 0.16 + 0 + 0.75 + 3.81821... truncated.
    assert_eq!(report.score, 54);
    assert_eq!(report.message, "Analysis completed: Needs attention improvement");
}

#[test]
fn test_reference_recording_is_idempotent() {
    let first = serde_json::to_string(&analyze(REFERENCE_RECORDING)).unwrap();
    let second = serde_json::to_string(&analyze(REFERENCE_RECORDING)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_column_yields_failure_payload() {
    let input = "elapsedTime(seconds),x\n0.0,1.0\n0.1,2.0\n";
    let outcome = analyze(input);

    let failure = match outcome {
        AnalysisOutcome::Failed(failure) => failure,
        AnalysisOutcome::Completed(_) => panic!("expected failure"),
    };

    assert_eq!(failure.score, 0);
    assert_eq!(failure.message, "Analysis failed");
    assert!(failure.error.contains("y"), "error was: {}", failure.error);
}

#[test]
fn test_non_numeric_cell_yields_failure_payload() {
    let input = "elapsedTime(seconds),x,y\n0.0,1.0,2.0\nlater,3.0,4.0\n";
    let outcome = analyze(input);

    assert!(!outcome.is_completed());
    assert_eq!(outcome.score(), 0);
}

#[test]
fn test_repeated_timestamp_yields_failure_payload() {
    // Three samples sharing one timestamp: a zero time delta makes the step
    // speed non-finite.
    let input = "elapsedTime(seconds),x,y\n0.0,1.0,2.0\n0.0,2.0,3.0\n0.1,3.0,4.0\n";
    let outcome = analyze(input);

    let failure = match outcome {
        AnalysisOutcome::Failed(failure) => failure,
        AnalysisOutcome::Completed(_) => panic!("expected failure"),
    };

    assert!(
        failure.error.contains("elapsed time did not advance"),
        "error was: {}",
        failure.error
    );
}

#[test]
fn test_single_sample_gets_neutral_defaults() {
    let input = "elapsedTime(seconds),x,y\n0.0,10.0,20.0\n";
    let outcome = analyze(input);

    let report = match outcome {
        AnalysisOutcome::Completed(report) => report,
        AnalysisOutcome::Failed(failure) => panic!("unexpected failure: {}", failure.error),
    };

    assert_eq!(report.analysis.total_points, 1);
    assert_eq!(report.analysis.average_movement, 0.0);
    assert_eq!(report.analysis.total_movement, 0.0);
    assert_eq!(report.analysis.stability_score, 50.0);
}

#[test]
fn test_two_samples_keep_neutral_stability() {
    let input = "elapsedTime(seconds),x,y\n0.0,0.0,0.0\n0.1,3.0,4.0\n";
    let outcome = analyze(input);

    let report = match outcome {
        AnalysisOutcome::Completed(report) => report,
        AnalysisOutcome::Failed(failure) => panic!("unexpected failure: {}", failure.error),
    };

    assert_eq!(report.analysis.stability_score, 50.0);
    assert_eq!(report.analysis.average_movement, 5.0);
    assert_eq!(report.analysis.total_movement, 5.0);
}

#[test]
fn test_success_wire_contract() {
    let json = serde_json::to_value(analyze(REFERENCE_RECORDING)).unwrap();

    assert_eq!(json["score"], 54);
    assert_eq!(json["message"], "Analysis completed: Needs attention improvement");
    let analysis = &json["analysis"];
    assert_eq!(analysis["total_points"], 5);
    assert_eq!(analysis["coverage_area"], 14.78);
}

#[test]
fn test_failure_wire_contract() {
    let json = serde_json::to_value(analyze("")).unwrap();

    assert_eq!(json["score"], 0);
    assert_eq!(json["message"], "Analysis failed");
    assert!(!json["error"].as_str().unwrap().is_empty());
    assert!(json.get("analysis").is_none());
}
