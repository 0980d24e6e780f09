//! ConfigMap and Secret key references
//!
//! Custom resources point at credentials and variables through
//! `{name, key}` references. Lookup is by exact key; an absent key is an
//! error naming the key, the object and its namespace.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::Client;
use kube::api::Api;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{KubeError, Result};

const CONFIG_MAP: &str = "configMap";
const SECRET: &str = "secret";

/// Namespace and name of a referenced object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Read access to the objects a key reference can point at
///
/// Implementations must be Send + Sync for use across reconcile tasks.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    async fn get_config_map(&self, nn: &NamespacedName) -> Result<ConfigMap>;

    async fn get_secret(&self, nn: &NamespacedName) -> Result<Secret>;
}

#[async_trait]
impl ObjectSource for Client {
    async fn get_config_map(&self, nn: &NamespacedName) -> Result<ConfigMap> {
        let api: Api<ConfigMap> = Api::namespaced(self.clone(), &nn.namespace);
        Ok(api.get(&nn.name).await?)
    }

    async fn get_secret(&self, nn: &NamespacedName) -> Result<Secret> {
        let api: Api<Secret> = Api::namespaced(self.clone(), &nn.namespace);
        Ok(api.get(&nn.name).await?)
    }
}

/// Value of `key` in a ConfigMap, verbatim
pub fn config_map_value(cm: &ConfigMap, key: &str) -> Result<String> {
    cm.data
        .as_ref()
        .and_then(|d| d.get(key))
        .cloned()
        .ok_or_else(|| key_not_found(key, CONFIG_MAP, &cm.metadata))
}

/// Value of `key` in a Secret, with surrounding whitespace trimmed
pub fn secret_value(secret: &Secret, key: &str) -> Result<String> {
    let bytes = secret
        .data
        .as_ref()
        .and_then(|d| d.get(key))
        .ok_or_else(|| key_not_found(key, SECRET, &secret.metadata))?;

    let value = std::str::from_utf8(&bytes.0).map_err(|e| KubeError::InvalidData {
        key: key.to_string(),
        kind: SECRET,
        name: secret.metadata.name.clone().unwrap_or_default(),
        message: e.to_string(),
    })?;

    Ok(value.trim().to_string())
}

/// Fetch a ConfigMap and return the value of `key`
pub async fn config_map_key_ref<S: ObjectSource + ?Sized>(
    source: &S,
    nn: &NamespacedName,
    key: &str,
) -> Result<String> {
    tracing::debug!(object = %nn, key, "resolving configMap key reference");
    let cm = source.get_config_map(nn).await?;
    config_map_value(&cm, key).inspect_err(|e| tracing::warn!("{}", e))
}

/// Fetch a Secret and return the trimmed value of `key`
pub async fn secret_key_ref<S: ObjectSource + ?Sized>(
    source: &S,
    nn: &NamespacedName,
    key: &str,
) -> Result<String> {
    tracing::debug!(object = %nn, key, "resolving secret key reference");
    let secret = source.get_secret(nn).await?;
    secret_value(&secret, key).inspect_err(|e| tracing::warn!("{}", e))
}

fn key_not_found(
    key: &str,
    kind: &'static str,
    meta: &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta,
) -> KubeError {
    KubeError::KeyNotFound {
        key: key.to_string(),
        kind,
        name: meta.name.clone().unwrap_or_default(),
        namespace: meta.namespace.clone().unwrap_or_default(),
    }
}

/// In-memory object source for testing
///
/// Objects are keyed by the namespace and name in their metadata.
#[derive(Clone, Default)]
pub struct MockObjectSource {
    config_maps: Arc<RwLock<HashMap<NamespacedName, ConfigMap>>>,
    secrets: Arc<RwLock<HashMap<NamespacedName, Secret>>>,
}

impl MockObjectSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_map(self, cm: ConfigMap) -> Self {
        let nn = meta_key(&cm.metadata);
        self.config_maps.write().unwrap().insert(nn, cm);
        self
    }

    pub fn with_secret(self, secret: Secret) -> Self {
        let nn = meta_key(&secret.metadata);
        self.secrets.write().unwrap().insert(nn, secret);
        self
    }
}

fn meta_key(meta: &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta) -> NamespacedName {
    NamespacedName::new(
        meta.namespace.clone().unwrap_or_else(|| "default".to_string()),
        meta.name.clone().unwrap_or_default(),
    )
}

fn not_found(kind: &str, nn: &NamespacedName) -> KubeError {
    KubeError::Api(kube::Error::Api(kube::core::ErrorResponse {
        status: "Failure".to_string(),
        message: format!("{} \"{}\" not found", kind, nn.name),
        reason: "NotFound".to_string(),
        code: 404,
    }))
}

#[async_trait]
impl ObjectSource for MockObjectSource {
    async fn get_config_map(&self, nn: &NamespacedName) -> Result<ConfigMap> {
        self.config_maps
            .read()
            .unwrap()
            .get(nn)
            .cloned()
            .ok_or_else(|| not_found("configmaps", nn))
    }

    async fn get_secret(&self, nn: &NamespacedName) -> Result<Secret> {
        self.secrets
            .read()
            .unwrap()
            .get(nn)
            .cloned()
            .ok_or_else(|| not_found("secrets", nn))
    }
}
