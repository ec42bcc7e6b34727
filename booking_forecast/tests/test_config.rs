use booking_forecast::config::DEFAULT_MAX_HORIZON;
use booking_forecast::store::InMemoryStore;
use booking_forecast::{ErrorAttachment, ForecastConfig, ForecastError, ForecastOrchestrator};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = ForecastConfig::default();

    assert_eq!(config.max_horizon, DEFAULT_MAX_HORIZON);
    assert_eq!(config.error_attachment, ErrorAttachment::FirstPeriod);
    assert!(config.persist);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = ForecastConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ForecastConfig::default());
}

#[test]
fn test_partial_json() {
    let config = ForecastConfig::from_json_str(r#"{ "error_attachment": "every_period" }"#).unwrap();

    assert_eq!(config.error_attachment, ErrorAttachment::EveryPeriod);
    assert_eq!(config.max_horizon, DEFAULT_MAX_HORIZON);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "max_horizon": 6, "error_attachment": "first_period", "persist": false }}"#
    )
    .unwrap();

    let config = ForecastConfig::from_json_file(file.path()).unwrap();
    assert_eq!(
        config,
        ForecastConfig::default()
            .with_max_horizon(6)
            .with_persist(false)
    );

    let loaded = ForecastConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_or_default_without_path() {
    let config = ForecastConfig::load_or_default(None).unwrap();
    assert_eq!(config, ForecastConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ForecastConfig::from_json_file("/nonexistent/forecast.json");
    match result {
        Err(ForecastError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected IoError, got {:?}", other),
    }
    assert!(ForecastConfig::load_or_default(Some(std::path::Path::new(
        "/nonexistent/forecast.json"
    )))
    .is_err());
}

#[test]
fn test_malformed_json() {
    let result = ForecastConfig::from_json_str(r#"{ "max_horizon": "twelve" }"#);
    assert!(matches!(result, Err(ForecastError::SerializationError(_))));

    let result = ForecastConfig::from_json_str(r#"{ "error_attachment": "last_period" }"#);
    assert!(result.is_err());
}

#[test]
fn test_zero_max_horizon_rejected() {
    let result = ForecastConfig::from_json_str(r#"{ "max_horizon": 0 }"#);
    assert!(matches!(result, Err(ForecastError::ConfigError(_))));

    let config = ForecastConfig::default().with_max_horizon(0);
    let result = ForecastOrchestrator::with_config(InMemoryStore::new(), config);
    assert!(matches!(result, Err(ForecastError::ConfigError(_))));
}

#[test]
fn test_serializes_snake_case() {
    let json = serde_json::to_string(&ForecastConfig::default()).unwrap();
    assert!(json.contains(r#""error_attachment":"first_period""#));
}
