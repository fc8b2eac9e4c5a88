//! Input validation for shorten requests.
//!
//! Normalizes raw URL input, validates optional custom aliases against the
//! service's `[A-Za-z0-9_]{5,30}` rule, and suggests fresh aliases.

use url::Url;
use uuid::Uuid;

use crate::types::errors::ValidationError;

/// Shortest custom alias the service accepts.
pub const ALIAS_MIN_LEN: usize = 5;
/// Longest custom alias the service accepts.
pub const ALIAS_MAX_LEN: usize = 30;
/// Length of suggested aliases.
const SUGGESTED_ALIAS_LEN: usize = 10;

/// Normalizes raw input into an absolute URL string.
///
/// Prepends `https://` when no `http://` or `https://` scheme is present,
/// then requires the candidate to parse as a well-formed absolute URL.
/// `example.com` normalizes to `https://example.com/`.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUrl(raw.to_string()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed =
        Url::parse(&candidate).map_err(|_| ValidationError::InvalidUrl(raw.to_string()))?;
    Ok(parsed.to_string())
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validates an optional custom alias.
///
/// Empty means "no alias requested" and is valid. Non-empty aliases must be
/// 5 to 30 characters from `[A-Za-z0-9_]`.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Ok(());
    }

    let charset_ok = alias.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let len_ok = (ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&alias.len());
    if charset_ok && len_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidAlias(alias.to_string()))
    }
}

/// Suggests a candidate alias: 10 characters from a fresh UUID's hex form.
/// The result always passes [`validate_alias`].
pub fn suggest_alias() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..SUGGESTED_ALIAS_LEN].to_string()
}
