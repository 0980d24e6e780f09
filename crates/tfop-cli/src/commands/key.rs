//! Key command - resolve a ConfigMap or Secret key from the cluster

use clap::ValueEnum;
use tfop_kube::{NamespacedName, config_map_key_ref, secret_key_ref};

use crate::error::{CliError, Result};

/// Kind of object holding the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeySource {
    ConfigMap,
    Secret,
}

/// Run the key command
pub async fn run(source: KeySource, name: &str, key: &str, namespace: &str) -> Result<()> {
    let client = kube::Client::try_default()
        .await
        .map_err(|e| CliError::Cluster {
            message: e.to_string(),
        })?;

    let nn = NamespacedName::new(namespace, name);
    let value = match source {
        KeySource::ConfigMap => config_map_key_ref(&client, &nn, key).await?,
        KeySource::Secret => secret_key_ref(&client, &nn, key).await?,
    };

    println!("{}", value);
    Ok(())
}
