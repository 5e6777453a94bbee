//! Domain normalization and syntax validation.
//!
//! Validation runs before any network access: `evaluate` either rejects
//! the input here or goes on to produce a complete report.

use mailproof_core::{MailproofError, Result};

/// Maximum total length of a domain name in its ASCII form.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Normalize and validate a user-supplied domain name.
///
/// Trims whitespace, lowercases, converts internationalized names to
/// their punycode ASCII form, and strips a single trailing dot. Returns
/// [`MailproofError::InvalidDomain`] for empty input, URL-ish strings
/// (scheme, path, userinfo, port) and anything that is not a plausible
/// DNS name.
pub fn normalize_domain(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MailproofError::invalid_domain(input, "domain is empty"));
    }

    for (ch, what) in [('/', "a path"), ('@', "userinfo"), (':', "a port or scheme")] {
        if trimmed.contains(ch) {
            return Err(MailproofError::invalid_domain(
                trimmed,
                format!("contains {what} ('{ch}'); supply a bare domain name"),
            ));
        }
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(MailproofError::invalid_domain(trimmed, "contains whitespace"));
    }

    let ascii = idna::domain_to_ascii(trimmed)
        .map_err(|e| MailproofError::invalid_domain(trimmed, format!("IDNA conversion: {e}")))?;

    let normalized = ascii.strip_suffix('.').unwrap_or(&ascii).to_ascii_lowercase();

    if normalized.is_empty() {
        return Err(MailproofError::invalid_domain(trimmed, "domain is empty"));
    }
    if normalized.len() > MAX_DOMAIN_LEN {
        return Err(MailproofError::invalid_domain(
            trimmed,
            format!("longer than {MAX_DOMAIN_LEN} characters"),
        ));
    }

    for label in normalized.split('.') {
        if label.is_empty() {
            return Err(MailproofError::invalid_domain(trimmed, "empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(MailproofError::invalid_domain(
                trimmed,
                format!("label '{label}' longer than {MAX_LABEL_LEN} characters"),
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(MailproofError::invalid_domain(
                trimmed,
                format!("label '{label}' starts or ends with a hyphen"),
            ));
        }
        if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err(MailproofError::invalid_domain(
                trimmed,
                format!("label '{label}' contains invalid characters"),
            ));
        }
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize_domain("  Example.COM  ").unwrap(), "example.com");
    }

    #[test]
    fn strips_trailing_dot() {
        assert_eq!(normalize_domain("example.com.").unwrap(), "example.com");
    }

    #[test]
    fn punycode_normalizes_idn() {
        assert_eq!(normalize_domain("bücher.example").unwrap(), "xn--bcher-kva.example");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(normalize_domain("").is_err());
        assert!(normalize_domain("   ").is_err());
    }

    #[test]
    fn rejects_url_like_input() {
        assert!(normalize_domain("https://example.com").is_err());
        assert!(normalize_domain("example.com/path").is_err());
        assert!(normalize_domain("user@example.com").is_err());
        assert!(normalize_domain("example.com:443").is_err());
        assert!(normalize_domain("exa mple.com").is_err());
    }

    #[test]
    fn rejects_bad_labels() {
        assert!(normalize_domain("-example.com").is_err());
        assert!(normalize_domain("example-.com").is_err());
        assert!(normalize_domain("exa!mple.com").is_err());
        assert!(normalize_domain("example..com").is_err());
    }

    #[test]
    fn accepts_single_label_hosts() {
        assert_eq!(normalize_domain("localhost").unwrap(), "localhost");
    }

    #[test]
    fn rejects_overlong_names() {
        let long = format!("{}.com", "a".repeat(260));
        assert!(normalize_domain(&long).is_err());

        let long_label = format!("{}.com", "a".repeat(64));
        assert!(normalize_domain(&long_label).is_err());
    }

    #[test]
    fn errors_are_input_errors() {
        let err = normalize_domain("bad/input").unwrap_err();
        assert!(err.is_input_error());
    }
}
