// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{PodgenError, Result};
use crate::types::metadata::{Labels, Metadata};
use k8s_openapi::api::core::v1::{Container, Pod as K8sPod, PodSpec};
use k8s_openapi::Resource;
use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A core/v1 Pod. `apiVersion` and `kind` are fixed by the type and cannot be set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pod {
    pub metadata: Metadata,
    pub spec: PodSpec,
}

impl Pod {
    pub fn new(metadata: Metadata, spec: PodSpec) -> Self {
        Pod { metadata, spec }
    }

    pub fn builder(name: impl Into<String>) -> PodBuilder {
        PodBuilder {
            metadata: Metadata::new(name),
            spec: PodSpec::default(),
        }
    }

    pub fn api_version(&self) -> &'static str {
        K8sPod::API_VERSION
    }

    pub fn kind(&self) -> &'static str {
        K8sPod::KIND
    }

    /// Shape-check a dynamically built value and convert it into a Pod
    pub fn from_value(value: serde_yaml::Value) -> Result<Self> {
        serde_yaml::from_value(value).map_err(|e| PodgenError::SchemaValidation(e.to_string()))
    }

    /// Parse and shape-check a single YAML document
    pub fn from_yaml(document: &str) -> Result<Self> {
        serde_yaml::from_str(document).map_err(|e| PodgenError::SchemaValidation(e.to_string()))
    }
}

impl Serialize for Pod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(K8sPod::KIND, 4)?;
        state.serialize_field("apiVersion", K8sPod::API_VERSION)?;
        state.serialize_field("kind", K8sPod::KIND)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("spec", &self.spec)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPod {
    api_version: String,
    kind: String,
    metadata: Metadata,
    spec: PodSpec,
}

impl<'de> Deserialize<'de> for Pod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawPod::deserialize(deserializer)?;

        if raw.api_version != K8sPod::API_VERSION || raw.kind != K8sPod::KIND {
            return Err(de::Error::custom(format!(
                "expected apiVersion '{}' and kind '{}', got '{}' and '{}'",
                K8sPod::API_VERSION,
                K8sPod::KIND,
                raw.api_version,
                raw.kind
            )));
        }

        Ok(Pod {
            metadata: raw.metadata,
            spec: raw.spec,
        })
    }
}

/// Builds a [`Pod`] field by field. Containers are optional.
#[derive(Clone, Debug)]
pub struct PodBuilder {
    metadata: Metadata,
    spec: PodSpec,
}

impl PodBuilder {
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key, value);
        self
    }

    /// Replace all labels
    pub fn labels(mut self, labels: Labels) -> Self {
        self.metadata.labels = labels;
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.spec.containers.push(container);
        self
    }

    /// Replace the whole spec, including containers added so far
    pub fn spec(mut self, spec: PodSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn build(self) -> Pod {
        Pod::new(self.metadata, self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{example_pod, make_container, EXAMPLE_POD_YAML};

    fn top_level_keys(value: &serde_yaml::Value) -> Vec<String> {
        value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_type_meta_is_fixed() {
        let pod = example_pod();
        assert_eq!(pod.api_version(), "v1");
        assert_eq!(pod.kind(), "Pod");
    }

    #[test]
    fn test_serializes_fields_in_declared_order() {
        let value = serde_yaml::to_value(example_pod()).unwrap();
        assert_eq!(
            top_level_keys(&value),
            vec!["apiVersion", "kind", "metadata", "spec"]
        );
        assert_eq!(top_level_keys(&value["metadata"]), vec!["name", "labels"]);
    }

    #[test]
    fn test_builder_collects_labels_and_containers() {
        let pod = Pod::builder("web")
            .label("app", "web")
            .label("tier", "frontend")
            .container(make_container("nginx", "nginx:1.27"))
            .build();

        assert_eq!(pod.metadata.name, "web");
        assert_eq!(pod.metadata.labels.get("tier"), Some("frontend"));
        assert_eq!(pod.spec.containers.len(), 1);
        assert_eq!(pod.spec.containers[0].name, "nginx");
    }

    #[test]
    fn test_builder_spec_replaces_containers() {
        let pod = Pod::builder("web")
            .container(make_container("nginx", "nginx:1.27"))
            .spec(PodSpec::default())
            .build();

        assert!(pod.spec.containers.is_empty());
    }

    #[test]
    fn test_from_yaml_accepts_example_document() {
        let pod = Pod::from_yaml(EXAMPLE_POD_YAML).unwrap();
        assert_eq!(pod, example_pod());
    }

    #[test]
    fn test_from_yaml_rejects_wrong_kind() {
        let document = EXAMPLE_POD_YAML.replace("kind: Pod", "kind: Deployment");
        let err = Pod::from_yaml(&document).unwrap_err();
        assert!(matches!(err, PodgenError::SchemaValidation(_)));
        assert!(err.to_string().contains("Deployment"));
    }

    #[test]
    fn test_from_yaml_rejects_wrong_api_version() {
        let document = EXAMPLE_POD_YAML.replace("apiVersion: v1", "apiVersion: apps/v1");
        let err = Pod::from_yaml(&document).unwrap_err();
        assert!(matches!(err, PodgenError::SchemaValidation(_)));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_top_level_field() {
        let document = format!("{}status: {{}}\n", EXAMPLE_POD_YAML);
        let err = Pod::from_yaml(&document).unwrap_err();
        assert!(matches!(err, PodgenError::SchemaValidation(_)));
    }

    #[test]
    fn test_from_yaml_rejects_namespace_in_metadata() {
        let document = EXAMPLE_POD_YAML.replace("  name: example\n", "  name: example\n  namespace: default\n");
        let err = Pod::from_yaml(&document).unwrap_err();
        assert!(matches!(err, PodgenError::SchemaValidation(_)));
        assert!(err.to_string().contains("namespace"));
    }

    #[test]
    fn test_from_yaml_requires_name() {
        let document = EXAMPLE_POD_YAML.replace("  name: example\n", "");
        let err = Pod::from_yaml(&document).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_from_value_requires_spec() {
        let value: serde_yaml::Value =
            serde_yaml::from_str("apiVersion: v1\nkind: Pod\nmetadata:\n  name: example\n").unwrap();
        let err = Pod::from_value(value).unwrap_err();
        assert!(matches!(err, PodgenError::SchemaValidation(_)));
    }

    #[test]
    fn test_from_value_accepts_empty_containers() {
        let value: serde_yaml::Value = serde_yaml::from_str(EXAMPLE_POD_YAML).unwrap();
        let pod = Pod::from_value(value).unwrap();
        assert!(pod.spec.containers.is_empty());
    }
}
