//! Finalizer lifecycle guard
//!
//! Resources backed by remote state (workspaces, modules, projects) must not
//! disappear from the cluster before the remote side is cleaned up. The
//! controller registers a finalizer token before it does any remote work and
//! removes it once cleanup has succeeded.
//!
//! The guard only reads a snapshot: the caller applies the decision through
//! the API server, e.g. with [`add_finalizer_patch`] / [`remove_finalizer_patch`].
//!
//! | deletion marker | token present | decision        |
//! |-----------------|---------------|-----------------|
//! | absent          | no            | register token  |
//! | absent          | yes           | nothing to do   |
//! | present         | yes           | run cleanup     |
//! | present         | no            | nothing to do   |

use chrono::{DateTime, Utc};
use kube::Resource;
use serde_json::{Value, json};

/// Domain suffix shared by all controller finalizers
pub const FINALIZER_DOMAIN: &str = "app.terraform.io";

/// Finalizer token owned by the controller for a resource kind
///
/// `Workspace` -> `workspace.app.terraform.io/finalizer`
pub fn finalizer_name(kind: &str) -> String {
    format!("{}.{}/finalizer", kind.to_lowercase(), FINALIZER_DOMAIN)
}

/// A resource exposing a deletion marker and a set of finalizer tokens
///
/// Token order carries no meaning; only membership is consulted.
pub trait Finalizable {
    /// When deletion was requested, if it was
    fn deletion_marker(&self) -> Option<DateTime<Utc>>;

    /// Finalizer tokens currently recorded on the resource
    fn finalizer_tokens(&self) -> &[String];

    /// Whether `finalizer` is among the recorded tokens
    fn has_finalizer(&self, finalizer: &str) -> bool {
        self.finalizer_tokens().iter().any(|f| f == finalizer)
    }
}

impl<K: Resource> Finalizable for K {
    fn deletion_marker(&self) -> Option<DateTime<Utc>> {
        self.meta().deletion_timestamp.as_ref().map(|t| t.0)
    }

    fn finalizer_tokens(&self) -> &[String] {
        self.meta().finalizers.as_deref().unwrap_or_default()
    }
}

/// True when the resource is live and does not carry `finalizer` yet.
pub fn needs_finalizer_registration<R: Finalizable + ?Sized>(
    resource: &R,
    finalizer: &str,
) -> bool {
    resource.deletion_marker().is_none() && !resource.has_finalizer(finalizer)
}

/// True when the resource is being deleted and `finalizer` is still outstanding.
pub fn is_finalization_candidate<R: Finalizable + ?Sized>(
    resource: &R,
    finalizer: &str,
) -> bool {
    resource.deletion_marker().is_some() && resource.has_finalizer(finalizer)
}

/// What the caller must do with its finalizer on this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizerAction {
    /// Add the token before doing any remote work
    Register,
    /// Clean up remote state, then remove the token
    Finalize,
    /// Nothing to do for the finalizer
    None,
}

impl FinalizerAction {
    pub fn for_resource<R: Finalizable + ?Sized>(resource: &R, finalizer: &str) -> Self {
        if needs_finalizer_registration(resource, finalizer) {
            Self::Register
        } else if is_finalization_candidate(resource, finalizer) {
            Self::Finalize
        } else {
            Self::None
        }
    }
}

/// JSON merge patch adding `finalizer` to the resource
///
/// The full token list is sent together with the snapshot's
/// `resourceVersion`, so a write based on a stale snapshot fails with 409.
pub fn add_finalizer_patch<K: Resource>(resource: &K, finalizer: &str) -> Value {
    let mut finalizers = resource.finalizer_tokens().to_vec();
    if !finalizers.iter().any(|f| f == finalizer) {
        finalizers.push(finalizer.to_string());
    }
    finalizers_patch(resource, finalizers)
}

/// JSON merge patch removing `finalizer` from the resource
pub fn remove_finalizer_patch<K: Resource>(resource: &K, finalizer: &str) -> Value {
    let finalizers: Vec<String> = resource
        .finalizer_tokens()
        .iter()
        .filter(|f| *f != finalizer)
        .cloned()
        .collect();
    finalizers_patch(resource, finalizers)
}

fn finalizers_patch<K: Resource>(resource: &K, finalizers: Vec<String>) -> Value {
    let mut metadata = json!({ "finalizers": finalizers });
    if let Some(rv) = &resource.meta().resource_version {
        metadata["resourceVersion"] = json!(rv);
    }
    json!({ "metadata": metadata })
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ConfigMap;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};

    const TEST_FINALIZER: &str = "test.app.terraform.io/finalizer";

    fn object(deleted: bool, finalizers: &[&str]) -> ConfigMap {
        ConfigMap {
            metadata: ObjectMeta {
                name: Some("workspace".to_string()),
                namespace: Some("default".to_string()),
                deletion_timestamp: deleted.then(|| Time(Utc::now())),
                finalizers: Some(finalizers.iter().map(|f| f.to_string()).collect()),
                resource_version: Some("42".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// A resource that is not a Kubernetes object
    struct Snapshot {
        deleted_at: Option<DateTime<Utc>>,
        tokens: Vec<String>,
    }

    impl Finalizable for Snapshot {
        fn deletion_marker(&self) -> Option<DateTime<Utc>> {
            self.deleted_at
        }

        fn finalizer_tokens(&self) -> &[String] {
            &self.tokens
        }
    }

    #[test]
    fn test_finalizer_name() {
        assert_eq!(finalizer_name("Workspace"), "workspace.app.terraform.io/finalizer");
        assert_eq!(finalizer_name("agentpool"), "agentpool.app.terraform.io/finalizer");
    }

    #[test]
    fn test_needs_finalizer_registration() {
        assert!(needs_finalizer_registration(&object(false, &[]), TEST_FINALIZER));
        assert!(!needs_finalizer_registration(&object(false, &[TEST_FINALIZER]), TEST_FINALIZER));
        assert!(!needs_finalizer_registration(&object(true, &[]), TEST_FINALIZER));
        assert!(!needs_finalizer_registration(&object(true, &[TEST_FINALIZER]), TEST_FINALIZER));
    }

    #[test]
    fn test_is_finalization_candidate() {
        assert!(!is_finalization_candidate(&object(false, &[]), TEST_FINALIZER));
        assert!(!is_finalization_candidate(&object(false, &[TEST_FINALIZER]), TEST_FINALIZER));
        assert!(!is_finalization_candidate(&object(true, &[]), TEST_FINALIZER));
        assert!(is_finalization_candidate(&object(true, &[TEST_FINALIZER]), TEST_FINALIZER));
    }

    #[test]
    fn test_other_finalizers_are_ignored() {
        let o = object(true, &["other.example.com/finalizer"]);
        assert!(!is_finalization_candidate(&o, TEST_FINALIZER));
        assert_eq!(FinalizerAction::for_resource(&o, TEST_FINALIZER), FinalizerAction::None);
    }

    #[test]
    fn test_missing_finalizer_list() {
        let mut o = object(false, &[]);
        o.metadata.finalizers = None;
        assert!(o.finalizer_tokens().is_empty());
        assert!(needs_finalizer_registration(&o, TEST_FINALIZER));
    }

    #[test]
    fn test_predicates_are_exclusive() {
        for deleted in [false, true] {
            for tokens in [&[][..], &[TEST_FINALIZER][..]] {
                let o = object(deleted, tokens);
                assert!(
                    !(needs_finalizer_registration(&o, TEST_FINALIZER)
                        && is_finalization_candidate(&o, TEST_FINALIZER))
                );
            }
        }
    }

    #[test]
    fn test_guard_over_custom_snapshot() {
        let live = Snapshot {
            deleted_at: None,
            tokens: vec![],
        };
        assert_eq!(
            FinalizerAction::for_resource(&live, TEST_FINALIZER),
            FinalizerAction::Register
        );

        let deleting = Snapshot {
            deleted_at: Some(Utc::now()),
            tokens: vec![TEST_FINALIZER.to_string()],
        };
        assert_eq!(
            FinalizerAction::for_resource(&deleting, TEST_FINALIZER),
            FinalizerAction::Finalize
        );
    }

    #[test]
    fn test_add_finalizer_patch() {
        let patch = add_finalizer_patch(&object(false, &["a"]), TEST_FINALIZER);
        assert_eq!(
            patch,
            json!({"metadata": {"finalizers": ["a", TEST_FINALIZER], "resourceVersion": "42"}})
        );

        // Already present: list unchanged
        let patch = add_finalizer_patch(&object(false, &[TEST_FINALIZER]), TEST_FINALIZER);
        assert_eq!(patch["metadata"]["finalizers"], json!([TEST_FINALIZER]));
    }

    #[test]
    fn test_remove_finalizer_patch() {
        let o = object(true, &["a", TEST_FINALIZER, "b"]);
        let patch = remove_finalizer_patch(&o, TEST_FINALIZER);
        assert_eq!(patch["metadata"]["finalizers"], json!(["a", "b"]));

        let mut o = object(true, &[]);
        o.metadata.resource_version = None;
        let patch = remove_finalizer_patch(&o, TEST_FINALIZER);
        assert_eq!(patch, json!({"metadata": {"finalizers": []}}));
    }

    #[test]
    fn test_lifecycle_end_to_end() {
        // Created: no marker, no tokens
        let mut o = object(false, &[]);
        assert_eq!(
            FinalizerAction::for_resource(&o, TEST_FINALIZER),
            FinalizerAction::Register
        );

        o.metadata.finalizers = Some(vec![TEST_FINALIZER.to_string()]);
        assert!(!needs_finalizer_registration(&o, TEST_FINALIZER));
        assert!(!is_finalization_candidate(&o, TEST_FINALIZER));

        // Deletion requested
        o.metadata.deletion_timestamp = Some(Time(Utc::now()));
        assert!(is_finalization_candidate(&o, TEST_FINALIZER));

        // Cleanup done, token removed
        let patch = remove_finalizer_patch(&o, TEST_FINALIZER);
        let remaining: Vec<String> =
            serde_json::from_value(patch["metadata"]["finalizers"].clone()).unwrap();
        o.metadata.finalizers = Some(remaining);
        assert!(!needs_finalizer_registration(&o, TEST_FINALIZER));
        assert!(!is_finalization_candidate(&o, TEST_FINALIZER));
        assert_eq!(
            FinalizerAction::for_resource(&o, TEST_FINALIZER),
            FinalizerAction::None
        );
    }

    #[test]
    fn test_usable_alongside_resource_ext() {
        use kube::ResourceExt;

        let o = object(true, &[TEST_FINALIZER]);
        assert_eq!(o.finalizers(), o.finalizer_tokens());
        assert!(o.has_finalizer(TEST_FINALIZER));
        assert!(is_finalization_candidate(&o, TEST_FINALIZER));
    }
}
