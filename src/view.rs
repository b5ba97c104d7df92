use std::fmt::Write as _;

use crate::time::format_timestamp;
use crate::types::{Activity, ActivitySummary};

const TIME_WIDTH: usize = 21;
const TITLE_WIDTH: usize = 40;
const TYPE_WIDTH: usize = 8;
const SIDE_WIDTH: usize = 5;
const USDC_WIDTH: usize = 12;

/// Placeholder for fields absent from a record.
const EMPTY_CELL: &str = "-";

/// Render activity records as a fixed-column text table.
///
/// The `Time` cell is the formatter's output inserted verbatim; records
/// without a usable timestamp render `-` there instead of a fake instant.
pub fn render_table(records: &[Activity]) -> String {
    if records.is_empty() {
        return "No activity found for this user.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<TIME_WIDTH$} {:<TITLE_WIDTH$} {:<TYPE_WIDTH$} {:<SIDE_WIDTH$} {:>USDC_WIDTH$}",
        "TIME", "TITLE", "TYPE", "SIDE", "USDC",
    );
    let _ = writeln!(
        out,
        "{}",
        "-".repeat(TIME_WIDTH + TITLE_WIDTH + TYPE_WIDTH + SIDE_WIDTH + USDC_WIDTH + 4)
    );

    for record in records {
        let time = record
            .timestamp
            .map(format_timestamp)
            .unwrap_or_else(|| EMPTY_CELL.to_string());
        let title = truncate(record.title.as_deref().unwrap_or(EMPTY_CELL), TITLE_WIDTH);
        let activity_type = record.activity_type.as_deref().unwrap_or(EMPTY_CELL);
        let side = record.side.as_deref().unwrap_or(EMPTY_CELL);
        let usdc = record
            .usdc_size
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| EMPTY_CELL.to_string());

        let _ = writeln!(
            out,
            "{time:<TIME_WIDTH$} {title:<TITLE_WIDTH$} {activity_type:<TYPE_WIDTH$} {side:<SIDE_WIDTH$} {usdc:>USDC_WIDTH$}",
        );
    }
    out
}

/// Render the derived summary metrics block shown under the table.
pub fn render_summary(summary: &ActivitySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Records:          {}", summary.records);
    let _ = writeln!(out, "Distinct markets: {}", summary.distinct_markets);
    let _ = writeln!(out, "Total volume:     ${:.2}", summary.total_usdc);
    let _ = writeln!(
        out,
        "Buys:             {} (${:.2})",
        summary.buy_count, summary.buy_usdc
    );
    let _ = writeln!(
        out,
        "Sells:            {} (${:.2})",
        summary.sell_count, summary.sell_usdc
    );
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(timestamp: Option<i64>, title: &str, side: &str, usdc: f64) -> Activity {
        let mut r: Activity = serde_json::from_value(json!({})).unwrap();
        r.timestamp = timestamp;
        r.title = Some(title.to_string());
        r.activity_type = Some("TRADE".to_string());
        r.side = Some(side.to_string());
        r.usdc_size = Some(usdc);
        r
    }

    #[test]
    fn empty_list_renders_placeholder_message() {
        assert_eq!(render_table(&[]), "No activity found for this user.\n");
    }

    #[test]
    fn table_contains_formatted_time_verbatim() {
        let out = render_table(&[record(Some(1704112440), "Some market", "BUY", 10.0)]);
        assert!(out.contains("1/1/2024, 12:34 PM"), "got:\n{out}");
        assert!(out.contains("Some market"));
        assert!(out.contains("BUY"));
        assert!(out.contains("10.00"));
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        let out = render_table(&[record(None, "No clock", "SELL", 1.0)]);
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("- "), "got row: {row}");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(100);
        let out = render_table(&[record(Some(0), &long, "BUY", 1.0)]);
        assert!(out.contains("xxx..."));
        assert!(!out.contains(&long));
    }

    #[test]
    fn summary_block_lists_metrics() {
        let records = vec![
            record(Some(0), "a", "BUY", 10.0),
            record(Some(0), "b", "SELL", 2.5),
        ];
        let summary = ActivitySummary::from_records(&records);
        let out = render_summary(&summary);
        assert!(out.contains("Records:          2"));
        assert!(out.contains("Total volume:     $12.50"));
        assert!(out.contains("Buys:             1 ($10.00)"));
        assert!(out.contains("Sells:            1 ($2.50)"));
    }
}
