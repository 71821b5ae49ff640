// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Block-style layout of a [`serde_yaml::Value`] tree.
//!
//! Mappings indent their children by two spaces, sequences put `- ` at the
//! indentation of their parent key, and empty collections stay inline as `{}` and
//! `[]`.

use super::scalar;
use crate::error::{PodgenError, Result};
use serde::ser::Error as _;
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

const INDENT: usize = 2;

/// Lay out `value` as one YAML document, including the trailing newline
pub fn document(value: &Value) -> Result<String> {
    let mut writer = BlockWriter::default();
    writer.write_document(value)?;
    Ok(writer.out)
}

fn unsupported(msg: &str) -> PodgenError {
    PodgenError::UnsupportedScalarType(serde_yaml::Error::custom(msg))
}

#[derive(Default)]
struct BlockWriter {
    out: String,
}

impl BlockWriter {
    fn write_document(&mut self, value: &Value) -> Result<()> {
        if let Some(inline) = inline(value)? {
            self.out.push_str(&inline);
            self.out.push('\n');
            return Ok(());
        }

        match value {
            Value::Tagged(tagged) => {
                self.out.push_str(&tagged.tag.to_string());
                self.out.push('\n');
                self.write_block(&tagged.value, 0)
            }
            _ => self.write_block(value, 0),
        }
    }

    /// Write a non-empty collection starting on a fresh line at `indent`
    fn write_block(&mut self, value: &Value, indent: usize) -> Result<()> {
        match value {
            Value::Mapping(mapping) => self.write_mapping(mapping, indent),
            Value::Sequence(sequence) => self.write_sequence(sequence, indent),
            _ => Err(unsupported("nested tags on collections are not supported")),
        }
    }

    fn write_mapping(&mut self, mapping: &Mapping, indent: usize) -> Result<()> {
        for (key, value) in mapping {
            let key = inline(key)?
                .filter(|_| is_scalar(key))
                .ok_or_else(|| unsupported("mapping keys must be scalars"))?;

            self.pad(indent);
            self.out.push_str(&key);
            self.out.push(':');

            if let Some(inline) = inline(value)? {
                self.out.push(' ');
                self.out.push_str(&inline);
                self.out.push('\n');
                continue;
            }

            match value {
                Value::Mapping(_) => {
                    self.out.push('\n');
                    self.write_block(value, indent + INDENT)?;
                }
                Value::Sequence(_) => {
                    self.out.push('\n');
                    self.write_block(value, indent)?;
                }
                _ => self.write_tagged_block(value, indent + INDENT)?,
            }
        }
        Ok(())
    }

    fn write_sequence(&mut self, sequence: &[Value], indent: usize) -> Result<()> {
        for item in sequence {
            self.pad(indent);
            self.out.push_str("- ");

            if let Some(inline) = inline(item)? {
                self.out.push_str(&inline);
                self.out.push('\n');
                continue;
            }

            match item {
                Value::Mapping(_) | Value::Sequence(_) => {
                    // First line of the nested block shares the line with "- "
                    let mut nested = BlockWriter::default();
                    nested.write_block(item, indent + INDENT)?;
                    self.out.push_str(&nested.out[indent + INDENT..]);
                }
                _ => self.write_tagged_block(item, indent + INDENT)?,
            }
        }
        Ok(())
    }

    /// Write ` !Tag` on the current line and the tagged collection below it
    fn write_tagged_block(&mut self, value: &Value, indent: usize) -> Result<()> {
        let Value::Tagged(tagged) = value else {
            return Err(unsupported("expected a tagged value"));
        };

        if !self.out.ends_with(' ') {
            self.out.push(' ');
        }
        self.out.push_str(&tagged.tag.to_string());
        self.out.push('\n');
        self.write_block(&tagged.value, indent)
    }

    fn pad(&mut self, indent: usize) {
        self.out.extend(std::iter::repeat(' ').take(indent));
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

/// Single-line rendering of scalars, empty collections and tagged scalars.
/// `None` for anything that needs a block.
fn inline(value: &Value) -> Result<Option<String>> {
    let rendered = match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => scalar::boolean(*b).to_string(),
        Value::Number(n) => scalar::number(n),
        Value::String(s) => scalar::string(s),
        Value::Mapping(m) if m.is_empty() => "{}".to_string(),
        Value::Sequence(s) if s.is_empty() => "[]".to_string(),
        Value::Mapping(_) | Value::Sequence(_) => return Ok(None),
        Value::Tagged(tagged) => return inline_tagged(tagged),
    };
    Ok(Some(rendered))
}

fn inline_tagged(tagged: &TaggedValue) -> Result<Option<String>> {
    if let Value::Tagged(_) = tagged.value {
        return Err(unsupported("nested tags are not supported"));
    }
    Ok(inline(&tagged.value)?.map(|inner| format!("{} {}", tagged.tag, inner)))
}
