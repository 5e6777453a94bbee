//! Request/response shapes for the scan API boundary.
//!
//! The web client consumes the three mechanism results as named fields
//! (`spf`, `dkim`, `dmarc`), not as the ordered `checks` array carried
//! by [`ComplianceReport`]. [`ScanResponse`] is the adapter between the
//! two shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::check::ComplianceCheck;
use super::report::{ComplianceReport, OverallStatus};

/// Scan request body: `{ "domain": "example.com" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Domain to scan, raw user input
    pub domain: String,
}

/// Scan response with named per-mechanism fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Normalized domain that was scanned
    pub domain: String,

    /// SPF result
    pub spf: ComplianceCheck,

    /// DKIM result
    pub dkim: ComplianceCheck,

    /// DMARC result
    pub dmarc: ComplianceCheck,

    /// Aggregate verdict
    pub overall: OverallStatus,

    /// Compliance score, 0-100
    pub score: u8,

    /// When the scan completed
    pub scanned_at: DateTime<Utc>,
}

impl From<ComplianceReport> for ScanResponse {
    fn from(report: ComplianceReport) -> Self {
        Self {
            spf: report.spf().clone(),
            dkim: report.dkim().clone(),
            dmarc: report.dmarc().clone(),
            overall: report.overall,
            score: report.score(),
            scanned_at: Utc::now(),
            domain: report.domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::check::Mechanism;

    #[test]
    fn response_reshapes_checks_to_named_fields() {
        let report = ComplianceReport::new(
            "example.com",
            ComplianceCheck::pass(Mechanism::Spf, Some("v=spf1 -all".into())),
            ComplianceCheck::fail(Mechanism::Dkim, "no DKIM record found", None),
            ComplianceCheck::pass(Mechanism::Dmarc, Some("v=DMARC1; p=reject;".into())),
        );

        let response = ScanResponse::from(report);
        assert_eq!(response.domain, "example.com");
        assert_eq!(response.spf.mechanism, Mechanism::Spf);
        assert_eq!(response.dkim.mechanism, Mechanism::Dkim);
        assert_eq!(response.dmarc.mechanism, Mechanism::Dmarc);
        assert_eq!(response.overall, OverallStatus::Fail);
        assert_eq!(response.score, 66);
    }

    #[test]
    fn response_json_uses_observed_field_names() {
        let report = ComplianceReport::new(
            "example.com",
            ComplianceCheck::pass(Mechanism::Spf, None),
            ComplianceCheck::pass(Mechanism::Dkim, None),
            ComplianceCheck::pass(Mechanism::Dmarc, None),
        );
        let json = serde_json::to_value(ScanResponse::from(report)).unwrap();
        assert_eq!(json["spf"]["status"], "pass");
        assert_eq!(json["dkim"]["status"], "pass");
        assert_eq!(json["dmarc"]["status"], "pass");
        assert_eq!(json["overall"], "pass");
    }
}
