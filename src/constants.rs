// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by podgen
pub mod env {
    /// Value of `metadata.name`
    pub const NAME: &str = "PODGEN_NAME";
    /// Labels as `key=value,key=value`
    pub const LABELS: &str = "PODGEN_LABELS";
    /// File to write the document to instead of stdout (optional)
    pub const OUTPUT: &str = "PODGEN_OUTPUT";
}

/// Pod name used when PODGEN_NAME is not set
pub const DEFAULT_POD_NAME: &str = "example";

/// Separator between label entries in PODGEN_LABELS
pub const LABEL_SEPARATOR: char = ',';

/// Log filter applied when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
