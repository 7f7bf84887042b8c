// tests/cli.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, pathscan_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_text_argument_prints_lines() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .arg("error at src/main.rs:4:5 and again src/main.rs, see README.md")
        .assert()
        .success()
        .stdout("src/main.rs\nREADME.md\n");
    Ok(())
}

#[test]
fn test_no_dedupe_flag() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .args(["--no-dedupe", "a/b.rs a/b.rs"])
        .assert()
        .success()
        .stdout("a/b.rs\na/b.rs\n");
    Ok(())
}

#[test]
fn test_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .write_stdin("  --> crates/app/src/lib.rs:3:1\n")
        .assert()
        .success()
        .stdout("crates/app/src/lib.rs\n");
    Ok(())
}

#[test]
fn test_reads_file_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "build.log", "failed: lib/parser.py line 9\n");

    pathscan_cmd()
        .arg("--file")
        .arg(temp.path().join("build.log"))
        .assert()
        .success()
        .stdout("lib/parser.py\n");
    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .args(["--file", "definitely_missing_pathscan_input.log"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("definitely_missing_pathscan_input.log"));
    Ok(())
}

#[test]
fn test_empty_result_is_success() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .arg("nothing to report")
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn test_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let output = pathscan_cmd()
        .args(["-F", "json", "see src/a.rs and docs/b.md"])
        .output()?;
    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed, vec!["src/a.rs", "docs/b.md"]);
    Ok(())
}

#[test]
fn test_yaml_format() -> Result<(), Box<dyn std::error::Error>> {
    let output = pathscan_cmd()
        .args(["--format", "yaml", "see src/a.rs and docs/b.md"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "- src/a.rs\n- docs/b.md\n");
    Ok(())
}

#[test]
fn test_invalid_strategy_fails() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .args(["--strategy", "everything", "src/a.rs"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid strategy 'everything'"))
        .stderr(predicate::str::contains("'pattern', 'fuzzy', 'both'"));
    Ok(())
}

#[test]
fn test_invalid_format_fails() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .args(["--format", "toml", "src/a.rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format 'toml'"));
    Ok(())
}

#[test]
fn test_fuzzy_strategy_with_base_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/engine.ts", "");
    create_file(temp.path(), "src/core.ts", "");

    pathscan_cmd()
        .args(["-s", "fuzzy", "-d"])
        .arg(temp.path())
        .arg("I was editing engine.ts and also missing.ts")
        .assert()
        .success()
        .stdout("src/engine.ts\n");
    Ok(())
}

#[test]
fn test_exists_filters_missing_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/real.rs", "");

    pathscan_cmd()
        .current_dir(temp.path())
        .args(["--exists", "src/real.rs then src/fake.rs"])
        .assert()
        .success()
        .stdout("src/real.rs\n");
    Ok(())
}

#[test]
fn test_absolute_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let expected = temp.path().join("src/x.rs");

    pathscan_cmd()
        .args(["-a", "-d"])
        .arg(temp.path())
        .arg("open src/x.rs")
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
    Ok(())
}

#[test]
fn test_output_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let output_path = temp.path().join("paths.txt");

    pathscan_cmd()
        .arg("-o")
        .arg(&output_path)
        .arg("touch lib/one.rs lib/two.rs")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_path)?, "lib/one.rs\nlib/two.rs\n");
    Ok(())
}

#[test]
fn test_text_and_file_conflict() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .args(["some text", "--file", "x.log"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_version_flag() -> Result<(), Box<dyn std::error::Error>> {
    pathscan_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
