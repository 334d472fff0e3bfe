use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 8081;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Résumé YAML (`RESUME_CONFIG`).
    pub resume_path: PathBuf,
    /// Served under `/static` and copied by the static build (`STATIC_DIR`).
    pub static_dir: PathBuf,
    /// Static-build output directory (`DIST_DIR`).
    pub dist_dir: PathBuf,
    /// Whether the static build also renders `static/resume.pdf` (`STATIC_PDF`).
    pub static_pdf: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            resume_path: PathBuf::from(var("RESUME_CONFIG", "config.yaml")),
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            dist_dir: PathBuf::from(var("DIST_DIR", "dist")),
            static_pdf: parse_bool(&var("STATIC_PDF", "true"))
                .context("STATIC_PDF must be a boolean (true/false)")?,
            port: match lookup("PORT") {
                Some(port) if !port.trim().is_empty() => port
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                _ => DEFAULT_PORT,
            },
            rust_log: var("RUST_LOG", "info"),
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.resume_path, PathBuf::from("config.yaml"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert!(config.static_pdf);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_empty_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "")]).unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("RESUME_CONFIG", "/etc/cv.yaml"),
            ("STATIC_PDF", "off"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.resume_path, PathBuf::from("/etc/cv.yaml"));
        assert!(!config.static_pdf);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        assert!(config_from(&[("STATIC_PDF", "maybe")]).is_err());
    }
}
