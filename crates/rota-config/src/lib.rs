//! Config module.

use std::env;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// How many times a save is retried after a version conflict.
    pub max_conflict_retries: u32,
}

/// Rota configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Instance name.
    pub name: String,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Store options.
    pub store: StoreConfig,
    /// Fixed random seed, to replay tie-breaks.
    /// When unset, every draw uses a freshly seeded thread generator.
    pub random_seed: Option<u64>,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env() -> Config {
        Config {
            name: env_to_str("ROTA_NAME", "rota"),
            logging: LoggingConfig {
                use_bunyan: env_to_bool("ROTA_LOGGING_USE_BUNYAN", false),
            },
            store: StoreConfig {
                max_conflict_retries: env_to_u32("ROTA_STORE_MAX_CONFLICT_RETRIES", 3),
            },
            random_seed: env_to_optional_u64("ROTA_RANDOM_SEED", None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "rota".into(),
            logging: LoggingConfig { use_bunyan: false },
            store: StoreConfig {
                max_conflict_retries: 3,
            },
            random_seed: None,
        }
    }
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u64(name: &str, default: Option<u64>) -> Option<u64> {
    env::var(name)
        .map(|e| e.parse::<u64>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
