// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::constants::{self, DEFAULT_POD_NAME};
use crate::types::metadata::Labels;

/// Where the rendered document goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Generator configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub pod_name: String,
    pub labels: Labels,
    pub output: OutputTarget,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pod_name: DEFAULT_POD_NAME.to_string(),
            labels: Labels::new(),
            output: OutputTarget::Stdout,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pod_name = lookup(constants::env::NAME).unwrap_or_else(|| DEFAULT_POD_NAME.to_string());
        if pod_name.trim().is_empty() {
            bail!("{} must not be empty", constants::env::NAME);
        }

        let labels = match lookup(constants::env::LABELS) {
            Some(raw) => raw
                .parse::<Labels>()
                .with_context(|| format!("{} could not be parsed", constants::env::LABELS))?,
            None => Labels::new(),
        };

        let output = match lookup(constants::env::OUTPUT) {
            Some(path) if !path.is_empty() => OutputTarget::File(PathBuf::from(path)),
            _ => OutputTarget::Stdout,
        };

        Ok(Config {
            pod_name,
            labels,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pod_name, "example");
        assert!(config.labels.is_empty());
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_name_and_labels_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            (constants::env::NAME, "web"),
            (constants::env::LABELS, "app=web,tier=frontend"),
        ]))
        .unwrap();

        assert_eq!(config.pod_name, "web");
        assert_eq!(config.labels.get("app"), Some("web"));
        assert_eq!(config.labels.get("tier"), Some("frontend"));
    }

    #[test]
    fn test_output_file_from_env() {
        let config =
            Config::from_lookup(lookup_from(&[(constants::env::OUTPUT, "/tmp/pod.yaml")])).unwrap();
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("/tmp/pod.yaml")));
    }

    #[test]
    fn test_empty_output_means_stdout() {
        let config = Config::from_lookup(lookup_from(&[(constants::env::OUTPUT, "")])).unwrap();
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(constants::env::NAME, "  ")])).unwrap_err();
        assert!(err.to_string().contains(constants::env::NAME));
    }

    #[test]
    fn test_malformed_labels_are_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[(constants::env::LABELS, "app")])).unwrap_err();
        assert!(err.to_string().contains(constants::env::LABELS));
    }
}
