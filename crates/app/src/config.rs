//! Runtime configuration from environment variables.

use std::path::PathBuf;

use tracing::warn;

use orderflow_checkout::TimestampOrderIdGenerator;
use orderflow_observability::LogFormat;
use orderflow_observability::subscriber::LOG_FORMAT_ENV;

pub const ORDER_ID_PREFIX_ENV: &str = "ORDERFLOW_ORDER_ID_PREFIX";
pub const REQUEST_ENV: &str = "ORDERFLOW_REQUEST";

/// A variable that was set but unusable; its default was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub var: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub order_id_prefix: String,
    /// Order request file; the built-in sample order runs when unset.
    pub request_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Collected while reading; logged once tracing is up.
    pub warnings: Vec<ConfigWarning>,
}

impl AppConfig {
    /// Read the process environment. A CLI path argument wins over
    /// `ORDERFLOW_REQUEST`.
    pub fn from_env(cli_path: Option<String>) -> Self {
        Self::from_lookup(cli_path, |key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Invalid values fall back to
    /// their defaults and are recorded in `warnings`.
    pub fn from_lookup<F>(cli_path: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let order_id_prefix = match lookup(ORDER_ID_PREFIX_ENV) {
            Some(prefix) if !prefix.trim().is_empty() => prefix.trim().to_string(),
            Some(_) => {
                warnings.push(ConfigWarning {
                    var: ORDER_ID_PREFIX_ENV,
                    message: format!(
                        "blank order id prefix; using {}",
                        TimestampOrderIdGenerator::DEFAULT_PREFIX
                    ),
                });
                TimestampOrderIdGenerator::DEFAULT_PREFIX.to_string()
            }
            None => TimestampOrderIdGenerator::DEFAULT_PREFIX.to_string(),
        };

        let request_path = cli_path
            .or_else(|| lookup(REQUEST_ENV))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warnings.push(ConfigWarning {
                    var: LOG_FORMAT_ENV,
                    message: format!("{err}; using json"),
                });
                LogFormat::Json
            }),
            None => LogFormat::default(),
        };

        Self {
            order_id_prefix,
            request_path,
            log_format,
            warnings,
        }
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!(var = warning.var, "{}", warning.message);
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(None, |_| None)
    }
}
