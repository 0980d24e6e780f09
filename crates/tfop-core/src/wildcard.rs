//! Wildcard name matching
//!
//! Patterns may carry a leading and/or trailing `*`:
//! - `*-workspace` matches names ending in `-workspace`
//! - `hcp-*` matches names starting with `hcp-`
//! - `*-terraform-*` matches names containing `-terraform-`
//! - anything else must match exactly

/// Check whether `name` matches a wildcard `pattern`
pub fn match_wildcard_name(pattern: &str, name: &str) -> bool {
    let prefix = pattern.starts_with('*');
    let suffix = pattern.ends_with('*');

    match (prefix, suffix) {
        (true, true) => {
            // A lone "*" is both prefix and suffix of itself
            let inner = pattern.trim_matches('*');
            name.contains(inner)
        }
        (true, false) => name.ends_with(&pattern[1..]),
        (false, true) => name.starts_with(&pattern[..pattern.len() - 1]),
        (false, false) => pattern == name,
    }
}
