//! Logging bootstrap behavior: durable sink creation and the degraded
//! stdout fallback.

use std::fs;

use tempfile::TempDir;

use store_infra::init_logging_in;

/// Test: the durable path creates a timestamped file under the requested
/// directory and hands its handle to the caller.
#[test]
fn test_creates_a_timestamped_file_sink() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");

    let sink = init_logging_in(&dir, "app.log");

    assert!(sink.is_durable());
    let path = sink.path().expect("durable sink has a path");
    assert_eq!(path.parent(), Some(dir.as_path()));
    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.ends_with("_app.log"), "unexpected file name: {name}");
    assert!(path.is_file());
    sink.sync().unwrap();
}

/// Test: a blocked log directory degrades to a stdout sink instead of
/// failing the caller.
#[test]
fn test_falls_back_to_stdout_when_the_directory_cannot_be_created() {
    let tmp = TempDir::new().unwrap();
    let blocked = tmp.path().join("logs");
    fs::write(&blocked, b"not a directory").unwrap();

    let sink = init_logging_in(&blocked, "app.log");

    assert!(!sink.is_durable());
    assert!(sink.path().is_none());
    sink.sync().unwrap();
}

/// Test: initializing twice never panics; the second call still reports a
/// usable sink even though the first subscriber stays installed.
#[test]
fn test_repeated_initialization_never_panics() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");

    let first = init_logging_in(&dir, "app.log");
    let second = init_logging_in(&dir, "app.log");

    assert!(first.is_durable());
    assert!(second.is_durable());
}
