//! Terraform output stringification
//!
//! State outputs are copied into ConfigMaps (plain values) and Secrets
//! (sensitive values), both of which only hold strings. Terraform types map as:
//! - `bool` -> `true` / `false`
//! - `number` -> shortest decimal form, integral floats without a fraction
//!   (`10.0` -> `10`)
//! - `string` -> verbatim
//! - `list`, `tuple`, `map`, `object` -> compact JSON
//!
//! `null` outputs are never returned by the remote service; if one shows up
//! it is rendered as JSON `null`.

use serde_json::{Number, Value};

use crate::error::Result;

/// Render a state output value as the string stored in Kubernetes
pub fn format_output(value: &Value) -> Result<String> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(format_number(n)),
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}

fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
