use babelvox::infrastructure::observability::TracingConfig;
use babelvox::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_format_and_level() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert_eq!(
        config.default_directives(),
        "warn,babelvox=debug,tower_http=debug"
    );
}
