//! Configuration types for papersim

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Simulation loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Synthetic ticks generated per candle at speed factor 1
    #[serde(default = "default_base_ticks")]
    pub base_ticks_per_minute: u32,

    /// Replay speed; higher values compress candles into fewer ticks
    #[serde(default = "default_speed_factor")]
    pub speed_factor: u32,

    /// Cash the simulated account starts with
    #[serde(default = "default_initial_cash")]
    pub initial_cash: Decimal,
}

fn default_base_ticks() -> u32 {
    60
}
fn default_speed_factor() -> u32 {
    1
}
fn default_initial_cash() -> Decimal {
    Decimal::new(10_000, 0)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_ticks_per_minute: 60,
            speed_factor: 1,
            initial_cash: Decimal::new(10_000, 0),
        }
    }
}

/// History data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding per-ticker CSV candle files
    #[serde(default = "default_history_dir")]
    pub history_dir: PathBuf,
}

fn default_history_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_dir: default_history_dir(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
