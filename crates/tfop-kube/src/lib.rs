//! tfop Kube - Kubernetes-facing helpers for the Terraform workspace controller
//!
//! This crate provides:
//! - **Finalizer guard**: Decide when to register or discharge a cleanup obligation
//! - **Key references**: Resolve ConfigMap and Secret keys referenced by custom resources
//! - **Outputs**: Workspace outputs rendered into ConfigMaps and Secrets
//! - **Requeue helpers**: Shorthands for reconcile results

pub mod error;
pub mod finalizer;
pub mod keyref;
pub mod outputs;
pub mod requeue;

pub use error::{KubeError, Result};
pub use finalizer::{
    Finalizable, FinalizerAction, add_finalizer_patch, finalizer_name, is_finalization_candidate,
    needs_finalizer_registration, remove_finalizer_patch,
};
pub use keyref::{
    MockObjectSource, NamespacedName, ObjectSource, config_map_key_ref, config_map_value,
    secret_key_ref, secret_value,
};
pub use outputs::{OUTPUTS_LABEL, outputs_config_map, outputs_secret};
pub use requeue::{do_not_requeue, requeue_after, requeue_on_err};
