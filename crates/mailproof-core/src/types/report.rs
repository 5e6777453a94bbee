use serde::{Deserialize, Serialize};

use super::check::{CheckStatus, ComplianceCheck, Mechanism};

/// Aggregate verdict over a whole report.
///
/// Two-valued on purpose: an indeterminate check counts as not-passing,
/// so the aggregate never needs a third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// All three mechanisms passed
    Pass,
    /// At least one mechanism did not pass
    Fail,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Full compliance report for one domain.
///
/// `checks` always holds exactly three entries in `[SPF, DKIM, DMARC]`
/// order, each mechanism exactly once; [`ComplianceReport::new`] is the
/// only way to construct one and enforces the invariant. Reports are
/// immutable value objects created fresh per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The normalized domain that was scanned
    pub domain: String,

    /// Per-mechanism results, fixed order `[SPF, DKIM, DMARC]`
    pub checks: Vec<ComplianceCheck>,

    /// Aggregate verdict
    pub overall: OverallStatus,
}

impl ComplianceReport {
    /// Build a report from the three per-mechanism checks.
    ///
    /// The output order is fixed regardless of the order the checks
    /// completed in.
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        spf: ComplianceCheck,
        dkim: ComplianceCheck,
        dmarc: ComplianceCheck,
    ) -> Self {
        debug_assert_eq!(spf.mechanism, Mechanism::Spf);
        debug_assert_eq!(dkim.mechanism, Mechanism::Dkim);
        debug_assert_eq!(dmarc.mechanism, Mechanism::Dmarc);

        let checks = vec![spf, dkim, dmarc];
        let overall = if checks.iter().all(ComplianceCheck::is_pass) {
            OverallStatus::Pass
        } else {
            OverallStatus::Fail
        };

        Self {
            domain: domain.into(),
            checks,
            overall,
        }
    }

    /// The SPF check
    #[must_use]
    pub fn spf(&self) -> &ComplianceCheck {
        &self.checks[0]
    }

    /// The DKIM check
    #[must_use]
    pub fn dkim(&self) -> &ComplianceCheck {
        &self.checks[1]
    }

    /// The DMARC check
    #[must_use]
    pub fn dmarc(&self) -> &ComplianceCheck {
        &self.checks[2]
    }

    /// Number of passing checks (0..=3)
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.is_pass()).count()
    }

    /// Compliance score on a 0-100 scale, pass-count based
    #[must_use]
    pub fn score(&self) -> u8 {
        (self.passed() * 100 / 3) as u8
    }

    /// Checks that did not pass, for remediation display
    pub fn failing(&self) -> impl Iterator<Item = &ComplianceCheck> {
        self.checks.iter().filter(|c| !c.is_pass())
    }

    /// Returns true if any check came back indeterminate
    #[must_use]
    pub fn has_indeterminate(&self) -> bool {
        self.checks
            .iter()
            .any(|c| c.status == CheckStatus::Indeterminate)
    }
}
