use serde::{Deserialize, Serialize};

/// Email-authentication mechanism evaluated by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    /// Sender Policy Framework (TXT record on the domain itself)
    Spf,
    /// DomainKeys Identified Mail (TXT records under `_domainkey`)
    Dkim,
    /// DMARC policy (TXT record at `_dmarc.<domain>`)
    Dmarc,
}

impl Mechanism {
    /// All mechanisms in report order
    pub const ALL: [Self; 3] = [Self::Spf, Self::Dkim, Self::Dmarc];
}

impl std::fmt::Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spf => write!(f, "SPF"),
            Self::Dkim => write!(f, "DKIM"),
            Self::Dmarc => write!(f, "DMARC"),
        }
    }
}

/// Outcome of evaluating one mechanism.
///
/// Three-valued: a lookup that errors or times out is reported as
/// [`CheckStatus::Indeterminate`], which is distinct from a confirmed
/// absence or misconfiguration ([`CheckStatus::Fail`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The mechanism is configured and valid
    Pass,
    /// The mechanism is missing or misconfigured
    Fail,
    /// The lookup could not be completed
    Indeterminate,
}

impl CheckStatus {
    /// Returns true only for a confirmed pass
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Result of evaluating one authentication mechanism for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    /// Which mechanism was evaluated
    pub mechanism: Mechanism,

    /// Pass, fail, or indeterminate
    pub status: CheckStatus,

    /// Raw text of the matched DNS record, when one was found.
    /// Present even for failing records so callers can display them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,

    /// Human-readable reason for a non-passing status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ComplianceCheck {
    /// A passing check, optionally carrying the matched record
    #[must_use]
    pub fn pass(mechanism: Mechanism, record: Option<String>) -> Self {
        Self {
            mechanism,
            status: CheckStatus::Pass,
            record,
            detail: None,
        }
    }

    /// A failing check with a reason and the offending record, if any
    #[must_use]
    pub fn fail(mechanism: Mechanism, detail: impl Into<String>, record: Option<String>) -> Self {
        Self {
            mechanism,
            status: CheckStatus::Fail,
            record,
            detail: Some(detail.into()),
        }
    }

    /// An indeterminate check (lookup error or timeout)
    #[must_use]
    pub fn indeterminate(mechanism: Mechanism, detail: impl Into<String>) -> Self {
        Self {
            mechanism,
            status: CheckStatus::Indeterminate,
            record: None,
            detail: Some(detail.into()),
        }
    }

    /// Returns true if this check passed
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.status.is_pass()
    }
}
