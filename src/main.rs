// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use podgen::config::Config;
use podgen::constants::DEFAULT_LOG_FILTER;
use podgen::emit::emit_to;
use podgen::types::Pod;

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: pod_name={}, labels={}, output={:?}",
        config.pod_name,
        config.labels.len(),
        config.output
    );

    let Config {
        pod_name,
        labels,
        output,
    } = config;
    let pod = Pod::builder(pod_name.as_str()).labels(labels).build();

    emit_to(&pod, &output).with_context(|| format!("Failed to emit Pod '{}'", pod_name))?;

    info!("Pod '{}' written", pod_name);
    Ok(())
}
