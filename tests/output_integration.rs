//! Integration tests for writing the rainbow to disk

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use rainbow_arcs::{generate, write_rainbow, RainbowConfig, RainbowError};

/// Fresh, empty scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rainbow-arcs-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

#[test]
fn test_default_file_written() {
    let dir = scratch_dir("default");
    let path = write_rainbow(&RainbowConfig::default(), &dir).expect("Should write");

    assert_eq!(path.file_name().unwrap(), "rainbow-1000x500.svg");
    assert_eq!(fs::read_to_string(&path).unwrap(), generate());
}

#[test]
fn test_rewrite_is_idempotent() {
    let dir = scratch_dir("idempotent");
    let config = RainbowConfig::default();

    let first = write_rainbow(&config, &dir).expect("Should write");
    let first_bytes = fs::read(&first).unwrap();
    let second = write_rainbow(&config, &dir).expect("Should write");
    let second_bytes = fs::read(&second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
}

#[test]
fn test_existing_file_overwritten() {
    let dir = scratch_dir("overwrite");
    let target = dir.join("rainbow-1000x500.svg");
    fs::write(&target, "stale content that is much longer than nothing at all").unwrap();

    write_rainbow(&RainbowConfig::default(), &dir).expect("Should write");

    let content = fs::read_to_string(&target).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.ends_with("</svg>"));
}

#[test]
fn test_unwritable_target_fails() {
    let dir = scratch_dir("unwritable");
    // A directory squatting on the output name makes the write fail
    fs::create_dir(dir.join("rainbow-1000x500.svg")).unwrap();

    let result = write_rainbow(&RainbowConfig::default(), &dir);
    assert!(matches!(result, Err(RainbowError::Write { .. })));
}

#[test]
fn test_cli_writes_into_working_directory() {
    let dir = scratch_dir("cli");
    let status = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .status()
        .expect("Failed to run binary");

    assert!(status.success());
    let content = fs::read_to_string(dir.join("rainbow-1000x500.svg")).unwrap();
    assert_eq!(content, generate());
}

#[test]
fn test_cli_config_and_strict() {
    let dir = scratch_dir("cli-strict");
    let config_path = dir.join("rainbow.toml");
    fs::write(
        &config_path,
        "[canvas]\nwidth = 100\nstroke_width = 150\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .arg("--config")
        .arg(&config_path)
        .arg("--strict")
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning[stroke]"));
    assert!(!dir.join("rainbow-100x50.svg").exists());
}

#[test]
fn test_cli_output_dir() {
    let dir = scratch_dir("cli-output-dir");
    let target = dir.join("out");
    fs::create_dir(&target).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .arg("-o")
        .arg(&target)
        .status()
        .expect("Failed to run binary");

    assert!(status.success());
    let content = fs::read_to_string(target.join("rainbow-1000x500.svg")).unwrap();
    assert_eq!(content, generate());
    assert!(!dir.join("rainbow-1000x500.svg").exists());
}

#[test]
fn test_cli_stdout_writes_no_file() {
    let dir = scratch_dir("cli-stdout");
    let output = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .arg("--stdout")
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    // Byte-identical to the file contents, no trailing newline
    assert_eq!(String::from_utf8(output.stdout).unwrap(), generate());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_cli_debug_dumps_bands() {
    let dir = scratch_dir("cli-debug");
    let output = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .arg("--debug")
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("=== Arc Debug ==="));
    for i in 0..6 {
        assert!(
            stderr.contains(&format!("[{}] start=", i)),
            "missing band {} in {}",
            i,
            stderr
        );
    }
    assert!(!stderr.contains("[6] start="));
    assert!(stderr.contains("[0] start=(10, 500) apex=(500, 10) end=(990, 500)"));
    assert!(dir.join("rainbow-1000x500.svg").exists());
}

#[test]
fn test_cli_strict_rejects_nan_stroke() {
    let dir = scratch_dir("cli-nan");
    let config_path = dir.join("rainbow.toml");
    fs::write(&config_path, "[canvas]\nstroke_width = nan\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rainbow-arcs"))
        .current_dir(&dir)
        .arg("--config")
        .arg(&config_path)
        .arg("--strict")
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning[non-finite]"));
    assert!(!dir.join("rainbow-1000x500.svg").exists());
}
