//! Finalizer-name command - print the controller's finalizer token

use tfop_kube::finalizer_name;

use crate::error::{CliError, Result};

/// Run the finalizer-name command
pub fn run(kind: &str) -> Result<()> {
    if kind.trim().is_empty() {
        return Err(CliError::input_with_help(
            "resource kind is empty",
            "pass a kind such as Workspace, Module or Project",
        ));
    }

    println!("{}", finalizer_name(kind.trim()));
    Ok(())
}
