//! CLI compare integration tests
//!
//! These tests run the built binary against header files in a temp dir and
//! check stdout, stderr and the exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn setup_departments(temp_dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write(temp_dir.path(), "sales.csv", "A,B,C\n1,2,3\n"),
        write(temp_dir.path(), "marketing.csv", "A,D\n1,2\n"),
        write(temp_dir.path(), "hr.csv", "A,B,E\n1,2,3\n"),
    ]
}

fn run_cli(temp_dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_colcmp-cli");
    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn path_args(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

#[test]
fn test_cli_prints_report_with_names() {
    let temp_dir = TempDir::new().unwrap();
    let files = path_args(&setup_departments(&temp_dir));

    let mut args = vec!["compare"];
    args.extend(files.iter().map(String::as_str));
    args.extend(["-n", "Sales", "-n", "Marketing", "-n", "HR"]);
    let output = run_cli(&temp_dir, &args);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let bar = "=".repeat(60);
    let expected = format!(
        "{bar}\nDATAFRAME COLUMN COMPARISON RESULTS\n{bar}\n\n\
         Sales has ['C'] which are not present in other dataframes\n\
         Marketing has ['D'] which are not present in other dataframes\n\
         HR has ['E'] which are not present in other dataframes\n\
         {bar}\n"
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_cli_default_names_and_identical_headers() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.csv", "A,B\n");
    let b = write(temp_dir.path(), "b.csv", "B,A\n");
    let files = path_args(&[a, b]);

    let mut args = vec!["compare"];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("df1 has no unique columns\n"));
    assert!(stdout.contains("df2 has no unique columns\n"));
}

#[test]
fn test_cli_json_output_uses_file_stems() {
    let temp_dir = TempDir::new().unwrap();
    let files = path_args(&setup_departments(&temp_dir));

    let mut args = vec!["compare", "--format", "json", "--names-from-files"];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "sales": ["C"],
            "marketing": ["D"],
            "hr": ["E"]
        })
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.find("sales").unwrap() < stdout.find("marketing").unwrap());
    assert!(!stdout.contains("DATAFRAME COLUMN COMPARISON RESULTS"));
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let files = path_args(&setup_departments(&temp_dir));

    let mut args = vec!["compare", "--quiet"];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let files = path_args(&setup_departments(&temp_dir));
    let out_path = temp_dir.path().join("report.txt");
    let out_str = out_path.display().to_string();

    let mut args = vec!["compare", "--output", out_str.as_str()];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert!(output.status.success());
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("df1 has ['C'] which are not present in other dataframes"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Written to"));
}

#[test]
fn test_cli_single_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.csv", "A\n");
    let a_str = a.display().to_string();

    let output = run_cli(&temp_dir, &["compare", a_str.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"), "stderr: {}", stderr);
    assert!(stderr.contains("at least 2 datasets required"));
}

#[test]
fn test_cli_name_count_mismatch_fails() {
    let temp_dir = TempDir::new().unwrap();
    let files = path_args(&setup_departments(&temp_dir));

    let mut args = vec!["compare", "--name", "x"];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("names count must match"));
}

#[test]
fn test_cli_missing_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(temp_dir.path(), "a.csv", "A\n");
    let a_str = a.display().to_string();

    let output = run_cli(&temp_dir, &["compare", a_str.as_str(), "missing.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_IO"));
    assert!(stderr.contains("missing.csv"));
}

#[test]
fn test_cli_reads_default_config_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "colcmp.toml", "delimiter = \";\"\nformat = \"json\"\n");
    let a = write(temp_dir.path(), "a.csv", "id;x\n");
    let b = write(temp_dir.path(), "b.csv", "id;y\n");
    let files = path_args(&[a, b]);

    let mut args = vec!["compare"];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"df1": ["x"], "df2": ["y"]}));
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = write(temp_dir.path(), "bad.toml", "unknown_key = 1\n");
    let files = path_args(&setup_departments(&temp_dir));
    let config_str = config.display().to_string();

    let mut args = vec!["compare", "--config", config_str.as_str()];
    args.extend(files.iter().map(String::as_str));
    let output = run_cli(&temp_dir, &args);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CONFIG"));
}

#[test]
fn test_cli_help_uses_binary_name() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&temp_dir, &["compare", "--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: colcmp-cli compare"), "stdout: {}", stdout);
}
