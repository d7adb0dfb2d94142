use std::io::Write;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::NamedTempFile;

fn pagesim(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pagesim-cli")).args(args).output()?)
}

/// Test that a run prints JSON fault counts
#[test]
fn test_cli_run_json() -> Result<()> {
    let output = pagesim(&[
        "--total-ram",
        "1024",
        "--page-size",
        "4",
        "--seed",
        "9",
        "run",
        "--policy",
        "lru",
        "--file",
        "nothing:16:0:25",
        "--file",
        "everything:16:64:10",
        "--json",
    ])?;
    assert!(output.status.success(), "CLI run failed: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["policy"], "Lru");
    assert_eq!(json["faults"]["nothing"], 25);
    let everything = json["faults"]["everything"].as_u64().unwrap();
    assert!((1..=4).contains(&everything));
    assert_eq!(json["failures"], serde_json::json!({}));
    Ok(())
}

/// Test that a trace replays the textbook string
#[test]
fn test_cli_trace() -> Result<()> {
    let output = pagesim(&[
        "trace",
        "--policy",
        "fifo",
        "--pages",
        "5",
        "--frames",
        "3",
        "0,1,2,3,0,1,4,0,1,2,3,4",
    ])?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("FIFO: 9 faults, 3 hits"), "unexpected output: {stdout}");
    assert!(stdout.contains("fault, evicted 0"));
    Ok(())
}

/// Test that a batch file feeds the policy comparison
#[test]
fn test_cli_compare_from_batch_file() -> Result<()> {
    let mut batch = NamedTempFile::new()?;
    writeln!(batch, "# name size alloc length")?;
    writeln!(batch, "editor 40 8 50")?;
    writeln!(batch)?;
    writeln!(batch, "compiler 120 24 80")?;
    batch.flush()?;
    let path = batch.path().to_string_lossy().to_string();

    let output = pagesim(&[
        "--total-ram",
        "2048",
        "--page-size",
        "4",
        "--seed",
        "1",
        "compare",
        "--from",
        &path,
    ])?;
    assert!(output.status.success(), "CLI compare failed: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("FIFO"));
    assert!(stdout.contains("Optimal"));
    assert!(stdout.contains("editor"));
    assert!(stdout.contains("compiler"));
    Ok(())
}

/// Test that a run without a memory profile is rejected
#[test]
fn test_cli_requires_profile() -> Result<()> {
    let output = pagesim(&["run", "--file", "a:8:4:4"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("--total-ram and --page-size are required"));
    Ok(())
}

/// Test that malformed file arguments are reported
#[test]
fn test_cli_rejects_bad_file_arg() -> Result<()> {
    let output = pagesim(&[
        "--total-ram",
        "1024",
        "--page-size",
        "4",
        "run",
        "--file",
        "a:eight:4:4",
    ])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Invalid --file 'a:eight:4:4'"));
    Ok(())
}

/// Test that a zero page size is a configuration error
#[test]
fn test_cli_rejects_zero_page_size() -> Result<()> {
    let output = pagesim(&[
        "--total-ram",
        "1024",
        "--page-size",
        "0",
        "run",
        "--file",
        "a:8:4:4",
    ])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Page size must be positive"));
    Ok(())
}

/// Test that a comparison with a failing entry exits non-zero
#[test]
fn test_cli_compare_fails_on_bad_entry() -> Result<()> {
    let output = pagesim(&[
        "--total-ram",
        "1024",
        "--page-size",
        "4",
        "--seed",
        "3",
        "compare",
        "--file",
        "good:16:8:10",
        "--file",
        " :8:4:4",
    ])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to add file ' '"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("File name must not be empty"));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(!stdout.contains("good"));
    Ok(())
}
