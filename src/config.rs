//! Runtime settings from the environment and logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment key holding the log4rs file path.
pub const LOG_CONFIG_ENV: &str = "CIDR_SUMMARY_LOG_CONFIG";
/// Environment key holding the default output format.
pub const OUTPUT_ENV: &str = "CIDR_SUMMARY_OUTPUT";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Which renderer to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub output: OutputFormat,
}

impl Config {
    /// Load `.env` (if any) and read settings from the environment.
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let log_config = lookup(LOG_CONFIG_ENV)
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());
        let output = match lookup(OUTPUT_ENV).filter(|value| !value.is_empty()) {
            Some(value) => value.parse::<OutputFormat>().map_err(|e| format!("{OUTPUT_ENV}: {e}"))?,
            None => OutputFormat::default(),
        };
        Ok(Config {
            log_config: PathBuf::from(log_config),
            output,
        })
    }
}

/// Start log4rs from `path`, or a stderr logger at `warn` when the file is missing.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
