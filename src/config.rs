use clap::Parser;
use config::{Config as ConfigBuilder, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_ACCENT_COLOR: &str = "cyan";
const DEFAULT_CONFIRM_DELETE: bool = true;
const DEFAULT_POLL_INTERVAL_MS: u64 = 50;
const DEFAULT_SCORE: u32 = crate::model::DEFAULT_SCORE;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),

    #[error("invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Command line arguments. Settings given here override the config file.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Terminal console for authoring exam papers", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    /// Start with an empty paper list instead of the sample rows
    #[arg(long)]
    pub empty: bool,

    /// Write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub accent_color: Option<String>,

    #[arg(long)]
    pub confirm_delete: Option<bool>,

    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Default score assigned to newly drafted questions
    #[arg(long)]
    pub default_score: Option<u32>,
}

/// Optional fields allow layering: defaults -> file -> env -> args.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    accent_color: Option<String>,
    confirm_delete: Option<bool>,
    poll_interval_ms: Option<u64>,
    default_score: Option<u32>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Color name used for selection and tab highlights.
    pub accent_color: String,
    /// Ask before deleting a paper or question.
    pub confirm_delete: bool,
    /// Event poll interval for the main loop.
    pub poll_interval_ms: u64,
    /// Score a freshly drafted question starts with.
    pub default_score: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            confirm_delete: DEFAULT_CONFIRM_DELETE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            default_score: DEFAULT_SCORE,
            log_file: None,
        }
    }
}

pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix("PAPERDESK").separator("__");
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_default();
    build_config(args, Some(env_map))
}

/// Separated from `load_config` so tests can pass explicit override maps.
fn build_config(
    args: &CliArgs,
    overrides: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(|| {
        ProjectDirs::from("", "", "paperdesk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    });

    let mut builder = ConfigBuilder::builder();

    if let Some(ref path) = config_file_path {
        builder = builder.add_source(File::from(path.clone()).required(false));
    }

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;

    let config = AppConfig {
        accent_color: args
            .accent_color
            .clone()
            .or(loaded.accent_color)
            .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string()),
        confirm_delete: args
            .confirm_delete
            .or(loaded.confirm_delete)
            .unwrap_or(DEFAULT_CONFIRM_DELETE),
        poll_interval_ms: args
            .poll_interval_ms
            .or(loaded.poll_interval_ms)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
        default_score: args
            .default_score
            .or(loaded.default_score)
            .unwrap_or(DEFAULT_SCORE),
        log_file: args.log_file.clone().or(loaded.log_file),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.poll_interval_ms == 0 {
        return Err(ConfigError::Invalid {
            field: "poll_interval_ms",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
