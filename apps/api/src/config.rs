use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that `?src=` paths are resolved against.
    pub document_root: PathBuf,
    /// Document rendered by `GET /render` when no `src` is given.
    pub default_src: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let document_root = match std::env::var("RESUME_ROOT") {
            Ok(root) => PathBuf::from(root),
            Err(_) => std::env::current_dir().context("Unable to determine working directory")?,
        };

        Ok(Config {
            document_root,
            default_src: std::env::var("RESUME_DEFAULT_SRC")
                .unwrap_or_else(|_| "resume.json".to_string()),
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_default() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_explicit() {
        assert_eq!(parse_port(Some("5000".to_string())).unwrap(), 5000);
    }

    #[test]
    fn test_port_invalid() {
        let err = parse_port(Some("http".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
    }
}
