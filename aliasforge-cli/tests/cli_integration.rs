//! Integration tests for the aliasforge CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn aliasforge() -> Command {
    Command::cargo_bin("aliasforge").unwrap()
}

fn chan_tai_man(cmd: &mut Command) -> &mut Command {
    cmd.arg("generate")
        .args(["--first", "Tai Man"])
        .args(["--last", "Chan"])
        .args(["--alias", "Tommy"])
        .args(["--dob", "2001/10/15"])
}

#[test]
fn test_generate_chinese() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).args(["--style", "chinese"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("tommy2001\n"))
        .stdout(predicate::str::contains("tommyctm\n"))
        .stdout(predicate::str::contains("taimanc1015\n"))
        .stdout(predicate::str::contains("chantaiman\n"))
        .stdout(predicate::str::contains("tommy10\n").not())
        .stderr(predicate::str::contains("Style:    Chinese"));
}

#[test]
fn test_generate_western() {
    let mut cmd = aliasforge();
    cmd.arg("generate")
        .args(["--first", "Charlie"])
        .args(["--middle", "Monroe"])
        .args(["--last", "Brown"])
        .args(["--alias", "Tommy"])
        .args(["--dob", "1990-03-22"])
        .args(["--style", "western"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("charlieb\n"))
        .stdout(predicate::str::contains("tommycb1990\n"))
        .stdout(predicate::str::contains("charlietommybrown\n"))
        .stdout(predicate::str::contains("monroe1990").not());
}

#[test]
fn test_style_prompt() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).write_stdin("1\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("tommy2001\n"))
        .stderr(predicate::str::contains("Select naming style"));
}

#[test]
fn test_style_prompt_eof_fails() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No style selected"));
}

#[test]
fn test_full_mode_adds_variants() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).args(["--style", "chinese", "--full", "--quiet"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chan.tommy\n"))
        .stdout(predicate::str::contains("tommy1501\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_output() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).args(["--style", "chinese", "-f", "json", "-q"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let first = &parsed.as_array().unwrap()[0];
    assert_eq!(first["username"], "tommy2001");
    assert_eq!(first["rank"], 1);
    assert_eq!(first["length"], 9);
}

#[test]
fn test_markdown_output() {
    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).args(["--style", "chinese", "-f", "markdown"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("1. tommy2001\n"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total usernames:"));
}

#[test]
fn test_output_file_with_no_print() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wordlist.txt");

    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd)
        .args(["--style", "chinese", "--no-print"])
        .arg("-o")
        .arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("tommy2001\n"));
}

#[test]
fn test_config_file_supplies_style_and_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("aliasforge.toml");
    fs::write(
        &config,
        "[generation]\nstyle = \"chinese\"\n\n[output]\nformat = \"markdown\"\n",
    )
    .unwrap();

    let mut cmd = aliasforge();
    chan_tai_man(&mut cmd).arg("-c").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("1. tommy2001\n"));
}

#[test]
fn test_missing_name_is_rejected() {
    let mut cmd = aliasforge();
    cmd.arg("generate").args(["--first", "Tai Man"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--last"));
}

#[test]
fn test_invalid_dob_is_rejected() {
    let mut cmd = aliasforge();
    cmd.arg("generate")
        .args(["--first", "Charlie", "--last", "Brown"])
        .args(["--dob", "22/03/1990", "--style", "western"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("date of birth"));
}

#[test]
fn test_list_styles() {
    let mut cmd = aliasforge();
    cmd.args(["list", "styles"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chinese"))
        .stdout(predicate::str::contains("western"));
}

#[test]
fn test_list_formats() {
    let mut cmd = aliasforge();
    cmd.args(["list", "formats"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("aliasforge.toml");

    let mut cmd = aliasforge();
    cmd.arg("generate-config").arg("-o").arg(&path);
    cmd.assert().success();

    let mut cmd = aliasforge();
    cmd.arg("validate").arg("-c").arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_bad_window() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[generation]\nmin_length = 10\nmax_length = 4\n").unwrap();

    let mut cmd = aliasforge();
    cmd.arg("validate").arg("-c").arg(&path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
