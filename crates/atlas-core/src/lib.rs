pub mod app_config;
pub mod config;
pub mod log;
pub mod map_url;
pub mod wkt;

use thiserror::Error;

pub use app_config::AppConfig;
pub use log::{LogBook, LogEntry, Severity};
pub use map_url::build_map_url;
pub use wkt::{parse_point, WktError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
