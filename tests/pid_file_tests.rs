use qappctl::error::SupervisorError;
use qappctl::supervisor::pid_file::PidFile;
use tempfile::TempDir;

fn setup_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// ============================================================
// Read / write round-trip
// ============================================================

#[test]
fn test_write_then_read() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    pid_file.write(4321).unwrap();
    assert_eq!(pid_file.read().unwrap(), Some(4321));
}

#[test]
fn test_read_missing_returns_none() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    assert_eq!(pid_file.read().unwrap(), None);
}

#[test]
fn test_exists_reflects_file() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    assert!(!pid_file.exists());
    pid_file.write(1).unwrap();
    assert!(pid_file.exists());
}

#[test]
fn test_read_tolerates_trailing_whitespace() {
    let dir = setup_dir();
    let path = dir.path().join("app.pid");
    std::fs::write(&path, "1234\n").unwrap();

    let pid_file = PidFile::new(path);
    assert_eq!(pid_file.read().unwrap(), Some(1234));
}

// ============================================================
// At-most-one marker
// ============================================================

#[test]
fn test_duplicate_write_fails() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    pid_file.write(100).unwrap();
    let second = pid_file.write(200);

    assert!(second.is_err(), "second write must not clobber the marker");
    assert_eq!(
        pid_file.read().unwrap(),
        Some(100),
        "original record must survive a duplicate write attempt"
    );
}

// ============================================================
// Corrupt content
// ============================================================

#[test]
fn test_corrupt_content_is_an_error() {
    let dir = setup_dir();
    let path = dir.path().join("app.pid");
    std::fs::write(&path, "not-a-pid").unwrap();

    let pid_file = PidFile::new(path);
    let err = pid_file.read().unwrap_err();

    assert!(
        matches!(err, SupervisorError::PidFileCorrupt { .. }),
        "expected PidFileCorrupt, got {err:?}"
    );
}

// ============================================================
// Removal
// ============================================================

#[test]
fn test_remove_deletes_marker() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    pid_file.write(55).unwrap();
    pid_file.remove().unwrap();

    assert!(!pid_file.exists());
    assert_eq!(pid_file.read().unwrap(), None);
}

#[test]
fn test_remove_missing_fails() {
    let dir = setup_dir();
    let pid_file = PidFile::new(dir.path().join("app.pid"));

    assert!(pid_file.remove().is_err());
}
