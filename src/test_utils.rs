// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for unit tests.

use crate::types::Pod;
use k8s_openapi::api::core::v1::Container;

/// The document produced for the default configuration
pub const EXAMPLE_POD_YAML: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: example
  labels: {}
spec:
  containers: []
";

/// Pod named "example" with no labels and no containers
pub fn example_pod() -> Pod {
    Pod::builder("example").build()
}

/// Create a container with just a name and an image
pub fn make_container(name: &str, image: &str) -> Container {
    Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        ..Default::default()
    }
}

/// Parse a YAML document into a dynamic value
pub fn parse_yaml(document: &str) -> serde_yaml::Value {
    serde_yaml::from_str(document).unwrap()
}
