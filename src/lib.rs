// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod emit;
pub mod error;
pub mod types;

#[cfg(test)]
mod test_utils;
