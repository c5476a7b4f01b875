//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use recitation_core::MatchSettings;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Surah the practice session walks through.
    pub practice_surah: u32,
    /// Optional JSON corpus replacing the built-in verses.
    pub corpus_path: Option<PathBuf>,
    pub settings: MatchSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            practice_surah: 1,
            corpus_path: None,
            settings: MatchSettings::default(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let settings = MatchSettings {
            similarity_threshold: parse_or(
                &lookup,
                "SIMILARITY_THRESHOLD",
                defaults.settings.similarity_threshold,
            )?,
            advance_threshold: parse_or(
                &lookup,
                "ADVANCE_THRESHOLD",
                defaults.settings.advance_threshold,
            )?,
        };
        check_threshold("SIMILARITY_THRESHOLD", settings.similarity_threshold)?;
        check_threshold("ADVANCE_THRESHOLD", settings.advance_threshold)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            practice_surah: parse_or(&lookup, "PRACTICE_SURAH", defaults.practice_surah)?,
            corpus_path: lookup("CORPUS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            settings,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn check_threshold(key: &str, value: f64) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&value) {
        bail!("{} must be between 0 and 1, got {}", key, value);
    }
    Ok(())
}
