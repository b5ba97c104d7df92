use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One activity record from the data API (`GET /activity?user=<addr>`).
///
/// The API is loose about which fields are present per record, so everything
/// except the identifiers a caller cannot do without is optional. A missing
/// or non-integer `timestamp` is kept as `None` and handled by the view; it
/// is never substituted with a fake instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub proxy_wallet: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub usdc_size: Option<f64>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub outcome_index: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub event_slug: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pseudonym: Option<String>,
}

/// The activity endpoint answers either with a bare array or with a
/// `{"data": [...]}` envelope depending on deployment. Both decode here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActivityResponse {
    List(Vec<Activity>),
    Envelope { data: Vec<Activity> },
}

impl ActivityResponse {
    pub fn into_records(self) -> Vec<Activity> {
        match self {
            Self::List(records) => records,
            Self::Envelope { data } => data,
        }
    }
}

/// Aggregate metrics derived from a list of activity records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub records: usize,
    pub total_usdc: f64,
    pub buy_count: usize,
    pub buy_usdc: f64,
    pub sell_count: usize,
    pub sell_usdc: f64,
    pub distinct_markets: usize,
}

impl ActivitySummary {
    /// Sum volumes and per-side counts over the records. Records without a
    /// `usdcSize` contribute zero volume; records without a `side` count
    /// toward neither side.
    pub fn from_records(records: &[Activity]) -> Self {
        let mut summary = Self {
            records: records.len(),
            total_usdc: 0.0,
            buy_count: 0,
            buy_usdc: 0.0,
            sell_count: 0,
            sell_usdc: 0.0,
            distinct_markets: 0,
        };
        let mut markets: HashSet<&str> = HashSet::new();

        for record in records {
            let usdc = record.usdc_size.unwrap_or(0.0);
            summary.total_usdc += usdc;
            match record.side.as_deref() {
                Some(side) if side.eq_ignore_ascii_case("BUY") => {
                    summary.buy_count += 1;
                    summary.buy_usdc += usdc;
                }
                Some(side) if side.eq_ignore_ascii_case("SELL") => {
                    summary.sell_count += 1;
                    summary.sell_usdc += usdc;
                }
                _ => {}
            }
            if let Some(condition_id) = record.condition_id.as_deref() {
                markets.insert(condition_id);
            }
        }

        summary.distinct_markets = markets.len();
        summary
    }
}
