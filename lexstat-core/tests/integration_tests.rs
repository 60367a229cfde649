//! Integration tests for lexstat-core infrastructure

use lexstat_core::{
    config_error, empty_dataset_error, init_logging, not_found_error, ErrorContext, LexstatConfig,
    LexstatError, LoggingConfig,
};

#[test]
fn test_error_handling() {
    let error = not_found_error!("/srv/data/missing", "test_component");

    match &error {
        LexstatError::NotFound {
            resource, context, ..
        } => {
            assert_eq!(resource, "/srv/data/missing");
            assert_eq!(context.component, "test_component");
            assert!(!context.error_id.is_empty());
            assert_eq!(context.recovery_suggestions.len(), 2);
        }
        _ => panic!("Expected NotFound error"),
    }

    // Logging an error must not panic even without a subscriber
    error.log();

    let io = LexstatError::Io {
        message: "read failed".to_string(),
        source: None,
        context: ErrorContext::new("test").with_operation("read"),
    };
    assert_eq!(io.kind(), "io_error");
    assert_eq!(io.context().unwrap().operation.as_deref(), Some("read"));

    let config_error = config_error!("Invalid config", "test");
    assert_eq!(config_error.kind(), "config_error");

    let empty = empty_dataset_error!("files", "test");
    assert_eq!(empty.kind(), "empty_dataset");
}

#[test]
fn test_logging_initialization() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: lexstat_core::LogFormat::Compact,
        include_location: false,
        include_thread: false,
        log_to_file: false,
        log_file_path: None,
        log_to_stderr: true,
        enable_performance_monitoring: false,
        filter_directives: vec!["lexstat_core=debug".to_string()],
    };

    // A second initialization in the same process reports an error rather than panicking
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_config_written_by_init_is_loadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexstat.toml");

    LexstatConfig::default().save_to_file(&path).unwrap();
    let loaded = LexstatConfig::from_file(&path).unwrap();

    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.logging.level, "info");
}
