use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("emergence");
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    run_help(&home, &[]);
    run_help(&home, &["verify"]);
    run_help(&home, &["constants"]);
    run_help(&home, &["fibonacci"]);
}

#[test]
fn unknown_command_is_rejected() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cargo_bin_cmd!("emergence");
    cmd.env("HOME", home.path())
        .arg("registry")
        .assert()
        .failure();
}
