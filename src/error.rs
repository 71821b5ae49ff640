// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodgenError {
    #[error("Value has no YAML representation: {0}")]
    UnsupportedScalarType(#[source] serde_yaml::Error),

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Failed to write YAML document: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PodgenError>;
