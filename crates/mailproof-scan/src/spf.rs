//! SPF record discovery and syntax validation.

use std::time::Duration;

use mailproof_core::{ComplianceCheck, Mechanism};
use tracing::debug;

use crate::error::LookupError;
use crate::resolver::{lookup_txt_timed, DnsResolver};

/// Returns true if a TXT record is an SPF record: starts with `v=spf1`
/// followed by end-of-record or whitespace.
pub(crate) fn is_spf_candidate(record: &str) -> bool {
    let trimmed = record.trim_start();
    let lower = trimmed.to_ascii_lowercase();
    lower == "v=spf1" || lower.starts_with("v=spf1 ") || lower.starts_with("v=spf1\t")
}

fn is_known_mechanism_name(name: &str) -> bool {
    matches!(
        name,
        "all" | "include" | "a" | "mx" | "ptr" | "ip4" | "ip6" | "exists"
    )
}

/// Validate the term list of an SPF record.
///
/// A record is acceptable when it carries at least one valid mechanism,
/// an `all` terminal, or a `redirect=` modifier. The goal is detecting
/// obvious misconfiguration, not full RFC 7208 evaluation: mechanism
/// arguments are checked for presence, not resolved.
pub(crate) fn validate_spf(record: &str) -> Result<(), String> {
    let trimmed = record.trim();
    let lower = trimmed.to_ascii_lowercase();

    let body = if lower == "v=spf1" {
        ""
    } else {
        // is_spf_candidate guarantees the prefix
        trimmed[6..].trim_start()
    };

    let mut mechanisms = 0usize;
    let mut has_redirect = false;

    for term in body.split_whitespace() {
        // Qualifier prefix is optional on mechanisms
        let unqualified = term
            .strip_prefix(['+', '-', '~', '?'])
            .unwrap_or(term);

        // Mechanism: name[:arg][/cidr]
        let mech_name = unqualified
            .split([':', '/', '='])
            .next()
            .unwrap_or(unqualified)
            .to_ascii_lowercase();

        if is_known_mechanism_name(&mech_name) {
            let arg = unqualified[mech_name.len()..].strip_prefix(':');
            match mech_name.as_str() {
                "all" if unqualified.len() > 3 => {
                    return Err(format!("'all' takes no argument: '{term}'"));
                }
                "include" | "exists" if arg.map_or(true, str::is_empty) => {
                    return Err(format!("'{mech_name}' requires a domain argument: '{term}'"));
                }
                "ip4" | "ip6" if arg.map_or(true, str::is_empty) => {
                    return Err(format!("'{mech_name}' requires an address argument: '{term}'"));
                }
                _ => {}
            }
            mechanisms += 1;
            continue;
        }

        // Modifier: name=value with an alphabetic name
        if let Some((name, value)) = term.split_once('=') {
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
                if name.eq_ignore_ascii_case("redirect") {
                    if value.is_empty() {
                        return Err("redirect= requires a domain".to_string());
                    }
                    has_redirect = true;
                }
                // Unknown modifiers are ignored for forward compatibility
                continue;
            }
        }

        return Err(format!("unknown term '{term}'"));
    }

    if mechanisms == 0 && !has_redirect {
        return Err("record has no mechanisms".to_string());
    }

    Ok(())
}

/// Evaluate SPF posture for a domain: exactly one syntactically valid
/// `v=spf1` TXT record passes.
pub(crate) async fn check<R: DnsResolver + ?Sized>(
    resolver: &R,
    domain: &str,
    timeout: Duration,
) -> ComplianceCheck {
    match lookup_txt_timed(resolver, domain, timeout).await {
        Ok(records) => {
            let candidates: Vec<&String> =
                records.iter().filter(|r| is_spf_candidate(r)).collect();
            debug!(domain = %domain, candidates = candidates.len(), "SPF lookup complete");

            match candidates.as_slice() {
                [] => ComplianceCheck::fail(Mechanism::Spf, "no SPF record found", None),
                [record] => match validate_spf(record) {
                    Ok(()) => ComplianceCheck::pass(Mechanism::Spf, Some((*record).clone())),
                    Err(problem) => ComplianceCheck::fail(
                        Mechanism::Spf,
                        format!("invalid SPF record: {problem}"),
                        Some((*record).clone()),
                    ),
                },
                [first, ..] => ComplianceCheck::fail(
                    Mechanism::Spf,
                    format!(
                        "multiple SPF records found ({}); a domain must publish exactly one",
                        candidates.len()
                    ),
                    Some((*first).clone()),
                ),
            }
        }
        Err(LookupError::NoRecords) => {
            ComplianceCheck::fail(Mechanism::Spf, "no SPF record found", None)
        }
        Err(LookupError::Timeout) => {
            ComplianceCheck::indeterminate(Mechanism::Spf, "SPF lookup timed out")
        }
        Err(e) => ComplianceCheck::indeterminate(Mechanism::Spf, format!("SPF lookup failed: {e}")),
    }
}
