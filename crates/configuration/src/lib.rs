use crate::error::ConfigError;
use config::{Environment, File};
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{InputSettings, LoggingSettings, OutputFormat, OutputSettings, Settings};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "supply-demand";

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "SUPPLY_DEMAND";

/// Loads the application settings.
///
/// Layers, lowest precedence first: built-in defaults, the TOML file, then
/// `SUPPLY_DEMAND_*` environment variables (`__` separates nested keys, e.g.
/// `SUPPLY_DEMAND_INPUT__DELIMITER`). An explicit `config_path` must exist; the
/// default `supply-demand.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    build_settings(config_path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build_settings(
    config_path: Option<&Path>,
    environment: Environment,
) -> Result<Settings, ConfigError> {
    let file = match config_path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> Environment {
        env_source().source(Some(HashMap::new()))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let settings = build_settings(None, no_env()).unwrap();
        assert_eq!(settings.input.delimiter, ",");
        assert!(settings.input.require_csv_extension);
        assert_eq!(settings.input.sniff_bytes, 1024);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert!(!settings.output.show_schedule);
        assert!(!settings.output.show_chart);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
            [input]
            delimiter = ";"

            [output]
            format = "json"
            "#,
        );
        let settings = build_settings(Some(file.path()), no_env()).unwrap();
        assert_eq!(settings.input.delimiter, ";");
        assert_eq!(settings.input.sniff_bytes, 1024);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[input]\ndelimiter = \";\"\n");
        let env = HashMap::from([
            ("SUPPLY_DEMAND_INPUT__DELIMITER".to_string(), "|".to_string()),
            ("SUPPLY_DEMAND_OUTPUT__SHOW_SCHEDULE".to_string(), "true".to_string()),
        ]);
        let settings =
            build_settings(Some(file.path()), env_source().source(Some(env))).unwrap();
        assert_eq!(settings.input.delimiter, "|");
        assert!(settings.output.show_schedule);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = build_settings(Some(Path::new("/nonexistent/supply-demand.toml")), no_env())
            .unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));

        // The cause is carried as the source, not repeated in the message.
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(err.to_string(), "Failed to load configuration");
        assert!(!err.to_string().contains(&cause));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_config("[input]\ndelimiter = \"::\"\n");
        let result = build_settings(Some(file.path()), no_env());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let file = write_config("[input]\nsniff_bytes = 0\n");
        let result = build_settings(Some(file.path()), no_env());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
