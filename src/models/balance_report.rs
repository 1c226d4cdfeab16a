use std::fmt::{self, Display};

use models::*;

/// Status code reported by etherscan. `"1"` is success, anything else is failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamStatus(String);

impl UpstreamStatus {
    pub const OK: &'static str = "1";

    pub fn new(status: String) -> Self {
        UpstreamStatus(status)
    }

    pub fn is_ok(&self) -> bool {
        self.0 == Self::OK
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl Display for UpstreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    pub account: AccountAddress,
    /// Balance in base units (wei), not validated yet
    pub balance: String,
}

/// Parsed `balancemulti` response. Entries are kept in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    pub status: UpstreamStatus,
    pub message: String,
    pub entries: Vec<BalanceEntry>,
    /// Number of `result` items that were not `{account: string, balance: string}`
    pub skipped_entries: usize,
}

impl BalanceReport {
    /// Upstream reported success
    pub fn is_healthy(&self) -> bool {
        self.status.is_ok()
    }
}

/// Outcome of parsing the upstream body. Parsing never fails outright,
/// but a body that is not a json object is told apart from one that merely reports failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Parsed(BalanceReport),
    Unparseable(String),
}

impl ParseResult {
    pub fn into_report(self) -> BalanceReport {
        match self {
            ParseResult::Parsed(report) => report,
            ParseResult::Unparseable(_) => BalanceReport::default(),
        }
    }
}
