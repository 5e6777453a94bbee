//! Remediation advice for failing checks.
//!
//! Suggested records are starting points, not drop-in fixes: SPF must
//! list the domain's real senders, and DKIM keys come from the sending
//! provider.

use serde::{Deserialize, Serialize};

use super::check::{CheckStatus, Mechanism};
use super::report::ComplianceReport;

/// One actionable remediation item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Mechanism this advice applies to
    pub mechanism: Mechanism,

    /// What to do, in one sentence
    pub summary: String,

    /// A record to publish, when one can be suggested without
    /// provider-specific knowledge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_record: Option<String>,
}

/// Produce remediation advice for every non-passing check in a report.
///
/// Passing checks yield nothing. Indeterminate checks yield retry
/// guidance rather than a record, since nothing is known about the
/// domain's actual state.
#[must_use]
pub fn advise(report: &ComplianceReport) -> Vec<Advice> {
    report
        .failing()
        .map(|check| match check.status {
            CheckStatus::Indeterminate => Advice {
                mechanism: check.mechanism,
                summary: format!(
                    "{} lookup could not be completed; re-run the scan before changing DNS",
                    check.mechanism
                ),
                suggested_record: None,
            },
            _ => match check.mechanism {
                Mechanism::Spf => Advice {
                    mechanism: Mechanism::Spf,
                    summary: "Publish a single SPF TXT record listing your sending hosts"
                        .to_string(),
                    suggested_record: Some("v=spf1 include:_spf.your-esp.example ~all".to_string()),
                },
                Mechanism::Dkim => Advice {
                    mechanism: Mechanism::Dkim,
                    summary: "Enable DKIM signing with your email provider and publish \
                              the key they give you under <selector>._domainkey"
                        .to_string(),
                    suggested_record: None,
                },
                Mechanism::Dmarc => Advice {
                    mechanism: Mechanism::Dmarc,
                    summary: "Publish an enforcing DMARC policy at _dmarc".to_string(),
                    suggested_record: Some(
                        "v=DMARC1; p=quarantine; rua=mailto:dmarc@yourdomain.example".to_string(),
                    ),
                },
            },
        })
        .collect()
}
