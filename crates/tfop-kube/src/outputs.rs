//! Workspace outputs as Kubernetes objects
//!
//! Non-sensitive outputs go to a ConfigMap, sensitive ones to a Secret, both
//! named after the owning workspace resource.

use k8s_openapi::ByteString;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde_json::Value;
use std::collections::BTreeMap;
use tfop_core::format_output;

use crate::error::Result;
use crate::keyref::NamespacedName;

/// Label marking objects that hold workspace outputs
pub const OUTPUTS_LABEL: &str = "app.terraform.io/outputs";

fn output_meta(nn: &NamespacedName) -> ObjectMeta {
    let mut labels = BTreeMap::new();
    labels.insert(OUTPUTS_LABEL.to_string(), "true".to_string());

    ObjectMeta {
        name: Some(nn.name.clone()),
        namespace: Some(nn.namespace.clone()),
        labels: Some(labels),
        ..Default::default()
    }
}

fn format_all(outputs: &BTreeMap<String, Value>) -> Result<BTreeMap<String, String>> {
    outputs
        .iter()
        .map(|(k, v)| Ok((k.clone(), format_output(v)?)))
        .collect()
}

/// Build the ConfigMap holding non-sensitive outputs
pub fn outputs_config_map(
    nn: &NamespacedName,
    outputs: &BTreeMap<String, Value>,
) -> Result<ConfigMap> {
    Ok(ConfigMap {
        metadata: output_meta(nn),
        data: Some(format_all(outputs)?),
        ..Default::default()
    })
}

/// Build the Secret holding sensitive outputs
pub fn outputs_secret(nn: &NamespacedName, outputs: &BTreeMap<String, Value>) -> Result<Secret> {
    let data = format_all(outputs)?
        .into_iter()
        .map(|(k, v)| (k, ByteString(v.into_bytes())))
        .collect();

    Ok(Secret {
        metadata: output_meta(nn),
        type_: Some("Opaque".to_string()),
        data: Some(data),
        ..Default::default()
    })
}
