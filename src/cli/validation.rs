//! CLI argument validation functions
//!
//! Custom value parsers for arguments clap cannot check on its own.
//!
//! Image URLs and sticker ids have no parser: they reach LINE as given,
//! whether they come from flags or from `--data`.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate `--data` as a JSON object
pub fn validate_json_data(data_str: &str) -> Result<serde_json::Value, String> {
    let value: serde_json::Value =
        serde_json::from_str(data_str).map_err(|e| format!("Invalid JSON in --data: {}", e))?;

    if !value.is_object() {
        return Err(
            "--data must be a JSON object, e.g. '{\"stkpkgid\": 1, \"stkid\": 2}'".to_string(),
        );
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_validation() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), temp.path());

        let dir = tempfile::tempdir().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));

        let err = validate_config_file_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_json_data_validation() {
        let value = validate_json_data(r#"{"url": "https://a.example/x.png"}"#).unwrap();
        assert_eq!(value["url"], "https://a.example/x.png");

        assert!(validate_json_data("{}").is_ok());
        assert!(validate_json_data("[1, 2]").is_err());
        assert!(validate_json_data("\"text\"").is_err());
        assert!(validate_json_data("{not json").is_err());
    }
}
