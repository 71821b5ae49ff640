// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed resource shapes.

pub mod metadata;
pub mod pod;

pub use metadata::{Labels, Metadata};
pub use pod::{Pod, PodBuilder};
