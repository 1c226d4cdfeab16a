use serde_json::{self, Map, Value};

use models::*;

pub const UP_METRIC: &str = "etherscan_up";
pub const BALANCE_METRIC: &str = "etherscan_balance";
pub const ACCOUNT_LABEL: &str = "account";

/// Turns a raw `balancemulti` body into exposition text.
///
/// Nothing here fails: garbage from upstream ends up as `etherscan_up 0`
/// with whatever balances could be recovered.
#[derive(Debug, Clone, Copy)]
pub struct ExportPipeline {
    precision: usize,
}

impl Default for ExportPipeline {
    fn default() -> Self {
        ExportPipeline::new(ETHER_PRECISION)
    }
}

impl ExportPipeline {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn parse(&self, body: &[u8]) -> ParseResult {
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(e) => return ParseResult::Unparseable(e.to_string()),
        };
        match value {
            Value::Object(object) => ParseResult::Parsed(report_from_object(&object)),
            other => ParseResult::Unparseable(format!("expected json object, got {}", other)),
        }
    }

    pub fn export(&self, body: &[u8]) -> Exposition {
        let parsed = self.parse(body);
        match parsed {
            ParseResult::Parsed(ref report) if !report.is_healthy() => {
                error!(
                    "Received negative status in etherscan response '{}', message: '{}'",
                    report.status, report.message
                );
                error!("{}", String::from_utf8_lossy(body));
            }
            ParseResult::Unparseable(ref reason) => {
                error!("Failed to parse etherscan response: {}", reason);
                error!("{}", String::from_utf8_lossy(body));
            }
            _ => (),
        }
        let report = parsed.into_report();
        if report.skipped_entries > 0 {
            warn!("Skipped {} malformed entries in etherscan response", report.skipped_entries);
        }
        let availability = Availability::from_healthy(report.is_healthy() && report.skipped_entries == 0);
        self.render(&report, availability)
    }

    /// Output for a scrape where upstream could not be reached at all
    pub fn export_unavailable(&self) -> Exposition {
        self.render(&BalanceReport::default(), Availability::Down)
    }

    /// `up` sample first, then one balance per entry in report order.
    /// A balance that is not a base 10 integer is left out and turns `up` to 0.
    pub fn render(&self, report: &BalanceReport, availability: Availability) -> Exposition {
        let mut converted = Availability::Up;
        let mut balances = Vec::with_capacity(report.entries.len());
        for entry in &report.entries {
            match DecimalValue::from_base_units(&entry.balance, self.precision) {
                Ok(value) => balances.push(
                    Sample::new(BALANCE_METRIC, value.to_string()).with_label(ACCOUNT_LABEL, entry.account.raw().to_string()),
                ),
                Err(e) => {
                    warn!("Skipping balance of account {:?}: {}", entry.account.raw(), e);
                    converted = Availability::Down;
                }
            }
        }

        let mut exposition = Exposition::default();
        exposition.push(Sample::new(UP_METRIC, availability.and(converted).to_string()));
        for sample in balances {
            exposition.push(sample);
        }
        exposition
    }
}

fn report_from_object(object: &Map<String, Value>) -> BalanceReport {
    let text = |key: &str| object.get(key).and_then(Value::as_str).unwrap_or("").to_string();
    let mut report = BalanceReport {
        status: UpstreamStatus::new(text("status")),
        message: text("message"),
        ..Default::default()
    };
    // on failure etherscan puts an error message into `result` instead of an array
    if let Some(Value::Array(items)) = object.get("result") {
        for item in items {
            match entry_from_value(item) {
                Some(entry) => report.entries.push(entry),
                None => report.skipped_entries += 1,
            }
        }
    }
    report
}

fn entry_from_value(item: &Value) -> Option<BalanceEntry> {
    let account = item.get("account")?.as_str()?;
    let balance = match item.get("balance")? {
        Value::String(balance) => balance.clone(),
        // exact digits are kept thanks to `arbitrary_precision`
        Value::Number(balance) => balance.to_string(),
        _ => return None,
    };
    Some(BalanceEntry {
        account: AccountAddress::new(account.to_string()),
        balance,
    })
}
