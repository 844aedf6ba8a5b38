use core_types::Direction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section has defaults, so an empty or missing `config.toml` is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSettings,
    pub generator: GeneratorSettings,
    pub forecast_accuracy: ForecastAccuracyStub,
    pub logging: LoggingSettings,
}

/// Where durable state lives and how it is reconciled at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one file per storage key.
    pub data_dir: PathBuf,
    /// Re-apply persisted custom entries to the generated series when the
    /// dashboard is opened.
    pub reconcile_on_open: bool,
}

/// Parameters for the deterministic synthetic series.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Seed of the Park-Miller generator. Must lie in `1..2147483647`.
    pub seed: u64,
    /// Revenue before the first growth step is applied.
    pub base_revenue: Decimal,
    pub base_expenses: Decimal,
    pub base_pipeline: Decimal,
}

/// Fixed change/direction reported by the Forecast Accuracy KPI.
///
/// There is no historical comparison data to derive these from yet, so they
/// are configured rather than computed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastAccuracyStub {
    pub change: Decimal,
    pub direction: Direction,
    pub subtitle: String,
}

/// Contains parameters for the tracing subscriber installed by the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Also write a daily-rolling log file under `<data_dir>/logs`.
    pub file: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".exec-dashboard"),
            reconcile_on_open: true,
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            base_revenue: dec!(82000),
            base_expenses: dec!(65000),
            base_pipeline: dec!(320000),
        }
    }
}

impl Default for ForecastAccuracyStub {
    fn default() -> Self {
        Self {
            change: dec!(2.3),
            direction: Direction::Up,
            subtitle: "vs. last quarter".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: false,
        }
    }
}

/// Command-line overrides layered on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ConfigOverrides {
    /// Directory for durable dashboard state (overrides `storage.data_dir`).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub data_dir: Option<PathBuf>,

    /// Seed for the synthetic series (overrides `generator.seed`).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub seed: Option<u64>,

    /// Skip re-applying stored entries to the generated series at startup.
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub no_reconcile: bool,
}

impl Config {
    /// Applies command-line overrides in place.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(dir) = &overrides.data_dir {
            self.storage.data_dir = dir.clone();
        }
        if let Some(seed) = overrides.seed {
            self.generator.seed = seed;
        }
        if overrides.no_reconcile {
            self.storage.reconcile_on_open = false;
        }
    }
}
