//! DKIM key discovery over a fixed selector list.
//!
//! DKIM selectors are not enumerable from the domain alone, so the
//! check probes a documented list of names commonly used by large
//! providers. A miss therefore means "not found under the tried
//! selectors", and the detail string says so.

use std::time::Duration;

use futures_util::future::join_all;
use mailproof_core::{ComplianceCheck, Mechanism};
use tracing::debug;

use crate::error::LookupError;
use crate::resolver::{lookup_txt_timed, DnsResolver};

/// Selector names probed when the caller does not supply a list.
pub const DEFAULT_SELECTORS: [&str; 6] =
    ["default", "google", "selector1", "selector2", "k1", "dkim"];

/// Returns true if a TXT record looks like a DKIM key record.
fn is_dkim_record(record: &str) -> bool {
    record.contains("v=DKIM1")
}

/// Probe `<selector>._domainkey.<domain>` for each selector
/// concurrently; any published key record passes.
pub(crate) async fn check<R: DnsResolver + ?Sized>(
    resolver: &R,
    domain: &str,
    selectors: &[String],
    timeout: Duration,
) -> ComplianceCheck {
    let probes = selectors.iter().map(|selector| {
        let name = format!("{selector}._domainkey.{domain}");
        async move {
            let outcome = lookup_txt_timed(resolver, &name, timeout).await;
            (selector.as_str(), outcome)
        }
    });

    let outcomes = join_all(probes).await;

    let mut errored = 0usize;
    for (selector, outcome) in &outcomes {
        match outcome {
            Ok(records) => {
                if let Some(record) = records.iter().find(|r| is_dkim_record(r)) {
                    debug!(domain = %domain, selector = %selector, "DKIM key found");
                    return ComplianceCheck::pass(Mechanism::Dkim, Some(record.clone()));
                }
            }
            Err(LookupError::NoRecords) => {}
            Err(_) => errored += 1,
        }
    }

    let tried = selectors.join(", ");
    debug!(domain = %domain, errored, tried = %tried, "no DKIM key found");

    if !outcomes.is_empty() && errored == outcomes.len() {
        ComplianceCheck::indeterminate(
            Mechanism::Dkim,
            format!("all selector lookups failed; selectors tried: {tried}"),
        )
    } else {
        ComplianceCheck::fail(
            Mechanism::Dkim,
            format!("no DKIM record found; selectors tried: {tried}"),
            None,
        )
    }
}
