//! DMARC policy discovery and evaluation.

use std::time::Duration;

use mailproof_core::{ComplianceCheck, Mechanism};
use tracing::debug;

use crate::error::LookupError;
use crate::resolver::{lookup_txt_timed, DnsResolver};

/// Returns true if a TXT record is a DMARC record: starts with
/// `v=DMARC1` followed by end-of-record, `;` or whitespace.
fn is_dmarc_candidate(record: &str) -> bool {
    let trimmed = record.trim_start();
    let Some(rest) = trimmed
        .get(..8)
        .filter(|prefix| prefix.eq_ignore_ascii_case("v=DMARC1"))
        .map(|_| &trimmed[8..])
    else {
        return false;
    };
    rest.is_empty() || rest.starts_with(';') || rest.starts_with(char::is_whitespace)
}

/// Evaluate the policy of a single DMARC record.
///
/// Enforcing policies (`quarantine`, `reject`) pass; `p=none` is a
/// published but non-enforcing policy and fails; a missing or
/// unrecognized `p=` tag fails with the parse problem.
fn evaluate_policy(record: &str) -> Result<(), String> {
    let mut tags = record
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match t.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => (t, ""),
        });

    // v= must be the first tag; candidates are pre-filtered but a
    // stray "v" later in the record should not satisfy this.
    match tags.next() {
        Some((k, v)) if k.eq_ignore_ascii_case("v") && v.eq_ignore_ascii_case("DMARC1") => {}
        _ => return Err("v=DMARC1 must be the first tag".to_string()),
    }

    let policy = tags
        .find(|(k, _)| k.eq_ignore_ascii_case("p"))
        .map(|(_, v)| v.to_ascii_lowercase());

    match policy.as_deref() {
        Some("quarantine" | "reject") => Ok(()),
        Some("none") => Err("DMARC policy is 'none', which does not enforce anything".to_string()),
        Some(other) => Err(format!("unrecognized p= value '{other}'")),
        None => Err("missing required p= tag".to_string()),
    }
}

/// Evaluate DMARC posture: exactly one enforcing record at
/// `_dmarc.<domain>` passes.
pub(crate) async fn check<R: DnsResolver + ?Sized>(
    resolver: &R,
    domain: &str,
    timeout: Duration,
) -> ComplianceCheck {
    let name = format!("_dmarc.{domain}");

    match lookup_txt_timed(resolver, &name, timeout).await {
        Ok(records) => {
            let candidates: Vec<&String> =
                records.iter().filter(|r| is_dmarc_candidate(r)).collect();
            debug!(domain = %domain, candidates = candidates.len(), "DMARC lookup complete");

            match candidates.as_slice() {
                [] => ComplianceCheck::fail(Mechanism::Dmarc, "no DMARC record found", None),
                [record] => match evaluate_policy(record) {
                    Ok(()) => ComplianceCheck::pass(Mechanism::Dmarc, Some((*record).clone())),
                    Err(problem) => {
                        ComplianceCheck::fail(Mechanism::Dmarc, problem, Some((*record).clone()))
                    }
                },
                [first, ..] => ComplianceCheck::fail(
                    Mechanism::Dmarc,
                    format!(
                        "multiple DMARC records found ({}); receivers ignore all of them",
                        candidates.len()
                    ),
                    Some((*first).clone()),
                ),
            }
        }
        Err(LookupError::NoRecords) => {
            ComplianceCheck::fail(Mechanism::Dmarc, "no DMARC record found", None)
        }
        Err(LookupError::Timeout) => {
            ComplianceCheck::indeterminate(Mechanism::Dmarc, "DMARC lookup timed out")
        }
        Err(e) => {
            ComplianceCheck::indeterminate(Mechanism::Dmarc, format!("DMARC lookup failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{StaticAnswer, StaticResolver};
    use mailproof_core::CheckStatus;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn candidate_detection_requires_boundary() {
        assert!(is_dmarc_candidate("v=DMARC1; p=none;"));
        assert!(is_dmarc_candidate("v=DMARC1"));
        assert!(is_dmarc_candidate("v=dmarc1; p=reject"));
        assert!(!is_dmarc_candidate("v=DMARC12; p=none"));
        assert!(!is_dmarc_candidate("p=none; v=DMARC1"));
    }

    #[test]
    fn enforcing_policies_pass() {
        assert!(evaluate_policy("v=DMARC1; p=reject;").is_ok());
        assert!(evaluate_policy("v=DMARC1; p=quarantine; rua=mailto:d@example.com").is_ok());
    }

    #[test]
    fn policy_none_is_rejected_with_reason() {
        let err = evaluate_policy("v=DMARC1; p=none;").unwrap_err();
        assert!(err.contains("'none'"));
    }

    #[test]
    fn missing_or_bad_policy_is_rejected() {
        assert!(evaluate_policy("v=DMARC1;").is_err());
        assert!(evaluate_policy("v=DMARC1; p=maybe;").is_err());
    }

    #[tokio::test]
    async fn reject_policy_passes() {
        let resolver =
            StaticResolver::with_txt("_dmarc.example.com", &["v=DMARC1; p=reject;"]);
        let result = check(&resolver, "example.com", TIMEOUT).await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.record.as_deref(), Some("v=DMARC1; p=reject;"));
    }

    #[tokio::test]
    async fn none_policy_fails_but_record_is_returned() {
        let resolver = StaticResolver::with_txt("_dmarc.example.com", &["v=DMARC1; p=none;"]);
        let result = check(&resolver, "example.com", TIMEOUT).await;
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.detail.as_deref().unwrap().contains("'none'"));
        assert_eq!(result.record.as_deref(), Some("v=DMARC1; p=none;"));
    }

    #[tokio::test]
    async fn absence_fails() {
        let resolver = StaticResolver::default();
        let result = check(&resolver, "example.com", TIMEOUT).await;
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.detail.as_deref(), Some("no DMARC record found"));
    }

    #[tokio::test]
    async fn multiple_records_fail() {
        let resolver = StaticResolver::with_txt(
            "_dmarc.example.com",
            &["v=DMARC1; p=reject;", "v=DMARC1; p=none;"],
        );
        let result = check(&resolver, "example.com", TIMEOUT).await;
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.detail.as_deref().unwrap().contains("multiple"));
    }

    #[tokio::test]
    async fn lookup_error_is_indeterminate() {
        let resolver = StaticResolver::new([(
            "_dmarc.example.com".to_string(),
            StaticAnswer::Error(LookupError::Timeout),
        )]);
        let result = check(&resolver, "example.com", TIMEOUT).await;
        assert_eq!(result.status, CheckStatus::Indeterminate);
    }
}
