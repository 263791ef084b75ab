//! Report formatting for television status and channel lineups.
//!
//! Pure functions — (state, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::lineup::Lineup;
use crate::television::Television;
use crate::types::OutputFormat;

/// JSON shape of a status report.
#[derive(Serialize)]
struct StatusJson<'a> {
    #[serde(flatten)]
    television: &'a Television,
    /// Station on the current channel; null while the set is off.
    channel_name: Option<&'a str>,
}

/// Format the television status for output.
pub fn format_status(tv: &Television, lineup: &Lineup, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_status_human(tv, lineup),
        OutputFormat::Json => format_json(&StatusJson {
            television: tv,
            channel_name: current_station(tv, lineup),
        }),
    }
}

/// Format the channel lineup for output.
pub fn format_lineup(lineup: &Lineup, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_lineup_human(lineup),
        OutputFormat::Json => format_json(lineup.entries()),
    }
}

/// Name of the station being shown, if the set is on.
fn current_station<'a>(tv: &Television, lineup: &'a Lineup) -> Option<&'a str> {
    if !tv.is_on() {
        return None;
    }
    lineup.entry(tv.channel()).map(|e| e.name.as_str())
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_status_human(tv: &Television, lineup: &Lineup) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", tv));
    out.push_str(&format!("Muted = {}\n", tv.is_muted()));
    if let Some(name) = current_station(tv, lineup) {
        out.push_str(&format!("Watching: {}\n", name));
    }
    out
}

fn format_lineup_human(lineup: &Lineup) -> String {
    let mut out = String::new();
    out.push_str("=== Channel Lineup ===\n");
    for (channel, entry) in lineup.entries().iter().enumerate() {
        out.push_str(&format!(
            "  {}  {:<8} {}\n",
            channel,
            entry.name,
            entry.asset.display()
        ));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn watching_cnn() -> Television {
        Television::with_state(true, true, 3, 1).unwrap()
    }

    // --- Human format tests ---

    #[test]
    fn human_status_includes_summary_line() {
        let output = format_status(&watching_cnn(), &Lineup::default(), OutputFormat::Human);
        assert!(output.contains("Power = true, Channel = 1, Volume = 3"));
        assert!(output.contains("Muted = true"));
        assert!(output.contains("Watching: CNN"));
    }

    #[test]
    fn human_status_off_hides_station() {
        let output = format_status(&Television::new(), &Lineup::default(), OutputFormat::Human);
        assert!(output.contains("Power = false"));
        assert!(!output.contains("Watching"));
    }

    #[test]
    fn human_lineup_lists_every_channel() {
        let output = format_lineup(&Lineup::default(), OutputFormat::Human);
        assert!(output.contains("=== Channel Lineup ==="));
        assert!(output.contains("0  ESPN"));
        assert!(output.contains("cbs_logo.png"));
        assert_eq!(output.lines().count(), 5);
    }

    // --- JSON format tests ---

    #[test]
    fn json_status_has_expected_fields() {
        let output = format_status(&watching_cnn(), &Lineup::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed["power"], true);
        assert_eq!(parsed["muted"], true);
        assert_eq!(parsed["volume"], 3);
        assert_eq!(parsed["channel"], 1);
        assert_eq!(parsed["channel_name"], "CNN");
    }

    #[test]
    fn json_status_off_has_null_station() {
        let output = format_status(&Television::new(), &Lineup::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["power"], false);
        assert!(parsed["channel_name"].is_null());
    }

    #[test]
    fn json_lineup_is_array_of_entries() {
        let output = format_lineup(&Lineup::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2]["name"], "CN");
        assert_eq!(entries[2]["asset"], "cn_logo.png");
    }
}
