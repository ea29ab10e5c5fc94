mod common;

use common::{TestEnv, GOLDEN_REPORT};
use predicates::str::contains;

#[test]
fn default_invocation_prints_reference_report() {
    let env = TestEnv::new();
    let out = env.run_text(&[]);
    assert_eq!(out, GOLDEN_REPORT);
}

#[test]
fn verify_subcommand_matches_default() {
    let env = TestEnv::new();
    assert_eq!(env.run_text(&["verify"]), env.run_text(&[]));
}

#[test]
fn report_is_byte_identical_across_runs() {
    let env = TestEnv::new();
    let first = env.run_text(&[]);
    let second = env.run_text(&[]);
    assert_eq!(first, second);
}

#[test]
fn summary_tallies_eleven_passes() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .success()
        .stdout(contains("  TESTS PASSED: 11/11\n"))
        .stdout(contains("│ Conservation Γ×α_G          │ 5.91            │ ✓ PASS (order of magnitude) │"));
}

#[test]
fn strict_passes_when_everything_passes() {
    let env = TestEnv::new();
    env.cmd().args(["verify", "--strict"]).assert().success();
}

#[test]
fn default_run_is_quiet_on_stderr() {
    let env = TestEnv::new();
    env.cmd().assert().success().stderr("");
}

#[test]
fn verbose_logs_checks_to_stderr_only() {
    let env = TestEnv::new();
    let assert = env.cmd().arg("--verbose").assert().success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout), GOLDEN_REPORT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("evaluated check"));
}

#[test]
fn run_writes_no_files() {
    let env = TestEnv::new();
    env.run_text(&[]);
    env.run_json(&["verify"]);
    assert_eq!(env.stray_entries(), 0);
}

#[test]
fn fibonacci_command_prints_term() {
    let env = TestEnv::new();
    assert_eq!(env.run_text(&["fibonacci", "35"]), "9227465\n");
    assert_eq!(env.run_text(&["fibonacci", "0"]), "0\n");
    assert_eq!(env.run_text(&["fibonacci", "-4"]), "0\n");
}

#[test]
fn fibonacci_overflow_is_an_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["fibonacci", "94"])
        .assert()
        .failure()
        .stderr(contains("does not fit in u64"));
}

#[test]
fn constants_lists_symbols() {
    let env = TestEnv::new();
    let out = env.run_text(&["constants"]);
    assert!(out.contains("h_bar\t1.054571817e-34\tJ·s\n"));
    assert!(out.contains("mu\t34\t\n"));
    assert!(out.contains("mu_time\t44\t\n"));
    assert_eq!(out.lines().count(), 20);
}
