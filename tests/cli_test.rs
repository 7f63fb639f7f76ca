use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_converts_a_command_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("command.txt");
    std::fs::write(&path, "curl 'http://example.com' -H 'Accept: */*'\n").unwrap();

    Command::cargo_bin("curl2py")
        .unwrap()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("import requests"))
        .stdout(predicate::str::contains(
            "response = session.get(url, headers=headers)",
        ));
}

#[test]
fn test_missing_file_exits_one_and_names_the_path() {
    Command::cargo_bin("curl2py")
        .unwrap()
        .arg("no-such-file.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no-such-file.txt"))
        .stdout(predicate::str::contains("import requests").not());
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    Command::cargo_bin("curl2py")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_arguments_are_a_usage_error() {
    Command::cargo_bin("curl2py")
        .unwrap()
        .args(["one.txt", "two.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    Command::cargo_bin("curl2py")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curl command"));
}
