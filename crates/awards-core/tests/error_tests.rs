// Rust guideline compliant 2026-10-19

//! Unit tests for core error formatting.

use awards_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should carry its prefix");
    assert!(msg.contains("file not found"));
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.starts_with("JSON error"));
}

#[test]
fn test_invalid_key_formatting() {
    let msg = Error::InvalidKey("../x".to_string()).to_string();
    assert_eq!(msg, "Invalid storage key: \"../x\"");
}

#[test]
fn test_not_found_formatting() {
    let msg = Error::NotFound("c8a64cd".to_string()).to_string();
    assert_eq!(msg, "Commit not found: c8a64cd");
}

#[test]
fn test_config_formatting() {
    let msg = Error::Config("awards_limit must be greater than 0".to_string()).to_string();
    assert_eq!(
        msg,
        "Invalid configuration: awards_limit must be greater than 0"
    );
}

#[test]
fn test_from_conversions() {
    fn io_fails() -> awards_core::Result<()> {
        Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
        Ok(())
    }
    assert!(matches!(io_fails(), Err(Error::Io(_))));
}
