use fibdemo_consts::MAX_INDEX;
use rstest::*;

use crate::common::{fibdemo, fibdemo_with_env, stderr, stdout};

#[test]
fn test_runs_to_completion() {
    let output = fibdemo(&["10"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = stdout(&output);
    assert_eq!(stdout.matches("Fibonacci sequence at index 10 = 55").count(), 3);
    for strategy in ["naive", "tabulation", "memoized"] {
        assert!(stdout.contains(&format!("{strategy}(10) took ")));
    }
    assert!(stdout.contains("[+] naive -> tabulation"));
    assert!(stdout.contains("[+] naive -> memoized"));
    assert!(stdout.contains("[+] tabulation -> memoized"));
}

#[test]
fn test_missing_index_prints_usage() {
    let output = fibdemo(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage:"));
    assert!(stdout(&output).is_empty());
}

#[rstest]
#[case("ten")]
#[case("-1")]
fn test_non_numeric_index_prints_usage(#[case] index: &str) {
    let output = fibdemo(&["--", index]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(stderr.contains("invalid value"));
    assert!(stderr.contains("Usage: fibdemo"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_index_too_large() {
    let index = (MAX_INDEX + 1).to_string();
    let output = fibdemo(&[&index]);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("out of range"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_largest_index_with_fast_strategies() {
    let index = MAX_INDEX.to_string();
    let output = fibdemo(&["-s", "tabulation", "-s", "memoized", &index]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("= 12200160415121876738"));
}

#[test]
fn test_metric_from_environment() {
    let output = fibdemo_with_env(
        &["-s", "tabulation", "-s", "memoized", "20"],
        &[("FIBDEMO_METRIC", "change")],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("[+] tabulation -> memoized"));
}

#[test]
fn test_index_from_environment() {
    let output = fibdemo_with_env(&["--no-compare"], &[("FIBDEMO_INDEX", "12")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Fibonacci sequence at index 12 = 144"));
    assert!(!stdout.contains("[+]"));
}
