use thiserror::Error;

/// Classified outcome of a failed DNS lookup.
///
/// The distinction matters: [`LookupError::NoRecords`] is an
/// authoritative "nothing is published there" answer and maps to a
/// failing check, while the other variants mean the lookup itself could
/// not be completed and map to an indeterminate check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// NXDOMAIN or an empty answer: the name resolves to no TXT records
    #[error("no records found")]
    NoRecords,

    /// The lookup exceeded its deadline
    #[error("lookup timed out")]
    Timeout,

    /// Upstream resolver reported SERVFAIL
    #[error("server failure")]
    ServFail,

    /// Any other resolution error
    #[error("DNS error: {0}")]
    Other(String),
}

impl LookupError {
    /// Returns true when the answer is authoritative absence rather
    /// than a transport problem.
    #[must_use]
    pub const fn is_confirmed_absence(&self) -> bool {
        matches!(self, Self::NoRecords)
    }
}

impl From<LookupError> for mailproof_core::MailproofError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Timeout => Self::Timeout(0),
            other => Self::Dns(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_no_records_is_confirmed_absence() {
        assert!(LookupError::NoRecords.is_confirmed_absence());
        assert!(!LookupError::Timeout.is_confirmed_absence());
        assert!(!LookupError::ServFail.is_confirmed_absence());
        assert!(!LookupError::Other("refused".into()).is_confirmed_absence());
    }
}
