//! Process-wide configuration.
//!
//! Parsed once at start-up from command-line flags with environment
//! fallbacks, then shared read-only with the auth gate and error responder.
//!
//! | Flag          | Environment  | Default                |
//! |---------------|--------------|------------------------|
//! | `--api-token` | `API_TOKEN`  | (required)             |
//! | `--app-env`   | `APP_ENV`    | `development`          |
//! | `--port`      | `PORT`       | `8000`                 |
//! | `--data-file` | `MOVIE_DATA` | `data/movie-data.json` |

use anyhow::{Result, bail};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;

/// Deployment mode. Controls error-body verbosity and log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Production,
    Development,
}

impl DeploymentMode {
    /// `production` (any case) selects Production; everything else is Development.
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// Moviedex - read-only movie search API
#[derive(Parser, Debug)]
#[command(name = "moviedex")]
#[command(about = "Serve a fixed movie dataset over HTTP with genre, country and rating filters", long_about = None)]
pub struct Args {
    /// Secret token clients must send as `Authorization: Bearer <token>`
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Deployment mode; `production` hides error detail and shortens logs
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub app_env: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the `{ "movies": [...] }` dataset document
    #[arg(long, env = "MOVIE_DATA", default_value = "data/movie-data.json")]
    pub data_file: PathBuf,
}

/// Validated configuration threaded through the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_token: String,
    pub mode: DeploymentMode,
    pub port: u16,
    pub data_file: PathBuf,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.api_token.trim().is_empty() {
            bail!("API_TOKEN must not be empty");
        }

        Ok(Self {
            api_token: args.api_token,
            mode: DeploymentMode::from_env_value(&args.app_env),
            port: args.port,
            data_file: args.data_file,
        })
    }

    /// Minimal config for tests and embedding: given token and mode, defaults elsewhere.
    pub fn new(api_token: impl Into<String>, mode: DeploymentMode) -> Self {
        Self {
            api_token: api_token.into(),
            mode,
            port: DEFAULT_PORT,
            data_file: PathBuf::from("data/movie-data.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<ServerConfig> {
        let args = Args::try_parse_from(std::iter::once("moviedex").chain(argv.iter().copied()))?;
        ServerConfig::from_args(args)
    }

    #[test]
    fn test_mode_from_env_value() {
        assert_eq!(DeploymentMode::from_env_value("production"), DeploymentMode::Production);
        assert_eq!(DeploymentMode::from_env_value("PRODUCTION"), DeploymentMode::Production);
        assert_eq!(DeploymentMode::from_env_value("staging"), DeploymentMode::Development);
        assert_eq!(DeploymentMode::from_env_value(""), DeploymentMode::Development);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--api-token",
            "s3cret",
            "--app-env",
            "production",
            "--port",
            "9090",
            "--data-file",
            "/tmp/movies.json",
        ])
        .unwrap();

        assert_eq!(config.api_token, "s3cret");
        assert!(config.mode.is_production());
        assert_eq!(config.port, 9090);
        assert_eq!(config.data_file, PathBuf::from("/tmp/movies.json"));
    }

    #[test]
    fn test_blank_token_rejected() {
        let err = parse(&["--api-token", "   "]).unwrap_err();
        assert!(err.to_string().contains("API_TOKEN"));
    }
}
