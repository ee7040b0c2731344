//! ID prefixes and generation for records created at runtime.
//!
//! Fixture records carry their own ids; only session users are synthesized.

use crate::errors::CoreError;

/// Prefix for synthesized session user ids.
pub const PREFIX_USER: &str = "usr";

/// Generate a new session user id: `usr-` followed by 8 lowercase hex chars.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn new_user_id() -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| anyhow::anyhow!("failed to generate user id: {e}"))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{PREFIX_USER}-{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_has_prefix_and_hex_suffix() {
        let id = new_user_id().expect("random source");
        let (prefix, suffix) = id.split_once('-').expect("dash separator");
        assert_eq!(prefix, PREFIX_USER);
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
