// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of configuration values as block-style YAML documents.
//!
//! Values are converted to a [`serde_yaml::Value`] and laid out by [`block`].
//! Mapping keys keep the order the value defines them in, empty mappings and
//! sequences render as `{}` and `[]`, and no `---` marker is written. A value is
//! fully rendered before anything reaches the sink, so a failure never leaves a
//! partial document behind.

mod block;
mod scalar;

use crate::config::OutputTarget;
use crate::error::{PodgenError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Render `value` as a YAML document terminated by a newline.
pub fn to_yaml<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let value = serde_yaml::to_value(value).map_err(PodgenError::UnsupportedScalarType)?;
    block::document(&value)
}

/// Render `value` and write it to `sink`
#[instrument(skip_all)]
pub fn emit<T, W>(value: &T, sink: &mut W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write + ?Sized,
{
    let document = to_yaml(value)?;
    write_document(&document, sink)
}

/// Render `value` and write it to the configured target
#[instrument(skip(value))]
pub fn emit_to<T>(value: &T, target: &OutputTarget) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let document = to_yaml(value)?;

    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_document(&document, &mut handle)
        }
        OutputTarget::File(path) => {
            let mut file = File::create(path)?;
            write_document(&document, &mut file)
        }
    }
}

fn write_document<W>(document: &str, sink: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    sink.write_all(document.as_bytes())?;
    sink.flush()?;
    debug!("Wrote YAML document ({} bytes)", document.len());
    Ok(())
}
