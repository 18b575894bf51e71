use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Source cannot be empty
/// - A URL source must have a host after the scheme
/// - If a timeout is given, it must be positive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    source: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: Option<u64>,
) -> Result<(), AppError> {
    let source = source.trim();
    if source.is_empty() {
        return Err(AppError::config_error("Listing source cannot be empty"));
    }

    if let Some(rest) = source
        .strip_prefix("http://")
        .or_else(|| source.strip_prefix("https://"))
        && rest.split('/').next().unwrap_or_default().is_empty()
    {
        return Err(AppError::config_error(format!(
            "Listing source '{source}' has no host"
        )));
    }

    if http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_sources() {
        for source in [
            "http://localhost:3000/poe2-leagues",
            "https://api.pathofexile.com/leagues",
            "data/leagues.json",
            "/var/lib/leagues.json",
        ] {
            assert!(
                validate_config(source, &None, None).is_ok(),
                "source {source} should be valid"
            );
        }
    }

    #[test]
    fn test_invalid_sources() {
        assert!(validate_config("", &None, None).is_err());
        assert!(validate_config("   ", &None, None).is_err());
        assert!(validate_config("https://", &None, None).is_err());
        assert!(validate_config("http:///leagues", &None, None).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = validate_config("data/leagues.json", &None, Some(0));
        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(validate_config("data/leagues.json", &None, Some(30)).is_ok());
    }

    #[test]
    fn test_log_path_rules() {
        assert!(validate_config("data/leagues.json", &Some(String::new()), None).is_err());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("app.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config("data/leagues.json", &log_path, None).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
