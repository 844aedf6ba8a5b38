use crate::error::ConfigError;
use rust_decimal::Decimal;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    Config, ConfigOverrides, ForecastAccuracyStub, GeneratorSettings, LoggingSettings,
    StorageSettings,
};

/// Exclusive upper bound for the generator seed (the Park-Miller modulus).
const SEED_MODULUS: u64 = 2_147_483_647;

/// Loads the application configuration from `path` and the environment.
///
/// The file is optional; any value may be overridden by an environment
/// variable such as `EXEC_DASHBOARD__GENERATOR__SEED=7`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("EXEC_DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

/// Checks the invariants the rest of the system relies on.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let generator = &config.generator;
    if generator.seed == 0 || generator.seed >= SEED_MODULUS {
        return Err(ConfigError::ValidationError(format!(
            "generator.seed must lie in 1..{SEED_MODULUS}, got {}",
            generator.seed
        )));
    }
    for (name, value) in [
        ("base_revenue", generator.base_revenue),
        ("base_expenses", generator.base_expenses),
        ("base_pipeline", generator.base_pipeline),
    ] {
        if value <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "generator.{name} must be positive, got {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Direction;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.generator.seed, 42);
        assert_eq!(config.generator.base_revenue, dec!(82000));
        assert!(config.storage.reconcile_on_open);
        assert_eq!(config.forecast_accuracy.direction, Direction::Up);
        assert_eq!(config.forecast_accuracy.subtitle, "vs. last quarter");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[generator]
seed = 7
base_revenue = 1000

[forecast_accuracy]
change = -1.5
direction = "down"
subtitle = "vs. plan"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.generator.base_revenue, dec!(1000));
        assert_eq!(config.generator.base_expenses, dec!(65000));
        assert_eq!(config.forecast_accuracy.change, dec!(-1.5));
        assert_eq!(config.forecast_accuracy.direction, Direction::Down);
    }

    #[test]
    fn zero_seed_is_rejected() {
        let mut config = Config::default();
        config.generator.seed = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn non_positive_base_is_rejected() {
        let mut config = Config::default();
        config.generator.base_pipeline = Decimal::ZERO;
        let error = validate(&config).unwrap_err();
        assert!(error.to_string().contains("base_pipeline"));
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let mut config = Config::default();
        config.apply_overrides(&ConfigOverrides {
            data_dir: Some("/tmp/dash".into()),
            seed: Some(9),
            no_reconcile: true,
        });
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("/tmp/dash"));
        assert_eq!(config.generator.seed, 9);
        assert!(!config.storage.reconcile_on_open);
    }
}
