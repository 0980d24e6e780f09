//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure, or nothing matched
pub const ERROR: i32 = 1;

/// Usage error - invalid arguments or options, as reported by clap
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Input data error - the version string or reference was rejected
/// (EX_DATAERR from sysexits.h)
pub const INPUT_ERROR: i32 = 65;

/// Cluster error - the Kubernetes API call failed (EX_UNAVAILABLE)
pub const CLUSTER_ERROR: i32 = 69;

/// Not found - the referenced object or key does not exist (EX_NOINPUT)
pub const NOT_FOUND: i32 = 66;
