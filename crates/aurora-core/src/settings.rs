use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::alert::{AlertConfig, BULLETIN_URL};
use crate::error::{ForecastError, Result};
use crate::notifications::NotificationConfig;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Check the 3-day geomagnetic forecast and send an aurora alert
#[derive(Parser, Debug, Clone)]
#[command(
    name = "aurora-alert",
    about = "Check the 3-day geomagnetic forecast and send an aurora alert",
    version
)]
pub struct Settings {
    /// Bulletin to fetch
    #[arg(long, default_value = BULLETIN_URL)]
    pub bulletin_url: String,

    /// Kp value at or above which an alert is sent
    #[arg(long, default_value = "5.0")]
    pub threshold: f64,

    /// Number of ranked forecast slots to report
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub top_n: u32,

    /// Sender address for alerts
    #[arg(long, env = "AURORA_FROM")]
    pub from: Option<String>,

    /// Recipient address for alerts
    #[arg(long, env = "AURORA_TO")]
    pub to: Option<String>,

    /// HTTP endpoint that accepts alert payloads
    #[arg(long, env = "AURORA_NOTIFY_ENDPOINT")]
    pub notify_endpoint: Option<String>,

    /// Bearer credential for the notification endpoint
    #[arg(long, env = "AURORA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Year marker to locate the table (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Log the alert instead of delivering it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── FileConfig ─────────────────────────────────────────────────────────────────

/// Optional settings read from `~/.aurora-alert/config.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulletin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_endpoint: Option<String>,
}

impl FileConfig {
    /// Return the default config file path, `~/.aurora-alert/config.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir`.
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(".aurora-alert").join("config.json")
    }

    /// Load config from an explicit path.
    ///
    /// A missing file yields `Default`; a file that exists but does not parse
    /// is a configuration error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content)
            .map_err(|e| ForecastError::Config(format!("{}: {}", path.display(), e)))
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments and fill unset values from the config file.
    pub fn load() -> Result<Self> {
        Self::load_impl(std::env::args_os().collect(), &FileConfig::config_path())
    }

    /// Full implementation; accepts args and a default config path so that
    /// tests can redirect to a temporary directory.
    ///
    /// Precedence: command line, then environment, then config file, then
    /// built-in defaults.
    pub fn load_impl(args: Vec<std::ffi::OsString>, default_config_path: &Path) -> Result<Self> {
        let matches = Settings::command().get_matches_from(args.clone());
        let mut settings = Settings::parse_from(args);

        let file = match &settings.config {
            Some(path) if !path.exists() => {
                return Err(ForecastError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => FileConfig::load_from(path)?,
            None => FileConfig::load_from(default_config_path)?,
        };

        if !is_arg_explicitly_set(&matches, "bulletin_url") {
            if let Some(v) = file.bulletin_url {
                settings.bulletin_url = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "threshold") {
            if let Some(v) = file.threshold {
                settings.threshold = v;
            }
        }
        // NOTE: clap stores the arg id using the *field name* (underscores).
        if !is_arg_explicitly_set(&matches, "top_n") {
            if let Some(v) = file.top_n {
                settings.top_n = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "from") && settings.from.is_none() {
            settings.from = file.from;
        }
        if !is_arg_explicitly_set(&matches, "to") && settings.to.is_none() {
            settings.to = file.to;
        }
        if !is_arg_explicitly_set(&matches, "notify_endpoint") && settings.notify_endpoint.is_none()
        {
            settings.notify_endpoint = file.notify_endpoint;
        }

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(ForecastError::Config(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            )));
        }
        if self.top_n == 0 {
            return Err(ForecastError::Config("top_n must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Ranking and threshold values for the pipeline.
    pub fn alert_config(&self) -> AlertConfig {
        AlertConfig {
            threshold: self.threshold,
            top_n: self.top_n as usize,
        }
    }

    /// Sender and recipient for the notification collaborator.
    pub fn notification_config(&self) -> NotificationConfig {
        NotificationConfig {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

// ── Helper: check if an arg was explicitly set ─────────────────────────────────

/// Returns `true` when `name` was supplied on the command line or through its
/// environment variable (not via default value).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(clap::parser::ValueSource::CommandLine) | Some(clap::parser::ValueSource::EnvVariable)
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────
