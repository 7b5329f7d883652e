//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::Context;

use ledgerlab_observability::{LogConfig, LogFormat};

/// Rows imported when no grades file is configured.
pub const SAMPLE_GRADES: [&str; 4] = ["Ibrahim,85", "Ama,72", "Kwame,45", "Akosua,110"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
    /// `None` imports `SAMPLE_GRADES`.
    pub grades_input: Option<PathBuf>,
    pub grades_output: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let format = match lookup("LEDGERLAB_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .context("invalid LEDGERLAB_LOG_FORMAT")?,
            None => LogFormat::default(),
        };

        let grades_input = lookup("LEDGERLAB_GRADES_INPUT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let grades_output = lookup("LEDGERLAB_GRADES_OUTPUT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("results.txt"));

        Ok(Self {
            log: LogConfig { filter, format },
            grades_input,
            grades_output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.grades_input, None);
        assert_eq!(config.grades_output, PathBuf::from("results.txt"));
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RUST_LOG", "debug"),
            ("LEDGERLAB_LOG_FORMAT", "pretty"),
            ("LEDGERLAB_GRADES_INPUT", "/tmp/grades.txt"),
            ("LEDGERLAB_GRADES_OUTPUT", "/tmp/out.txt"),
        ]))
        .unwrap();
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.grades_input, Some(PathBuf::from("/tmp/grades.txt")));
        assert_eq!(config.grades_output, PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn bad_log_format_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("LEDGERLAB_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(err.to_string().contains("LEDGERLAB_LOG_FORMAT"));
    }
}
