//! Input normalizers for the create-or-update payload
//!
//! Both normalizers are deliberately lenient: priorities the service would
//! reject fall back to "normal", and malformed due dates are dropped rather
//! than failing the whole operation. Callers rely on this contract.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

/// Priority sent when the input is absent or unrecognized ("normal")
pub const DEFAULT_PRIORITY: i64 = 3;

/// Normalize a raw priority value into the 1-4 range ClickUp accepts.
///
/// Accepts an integer, a digit string, or a named level (urgent/high/
/// normal/low, case-insensitive). Anything absent, out of range, or
/// unrecognized maps to [`DEFAULT_PRIORITY`].
pub fn normalize_priority(raw: Option<&Value>) -> i64 {
    let Some(value) = raw else {
        return DEFAULT_PRIORITY;
    };
    match value {
        Value::Number(number) => number
            .as_i64()
            .filter(|v| (1..=4).contains(v))
            .unwrap_or(DEFAULT_PRIORITY),
        Value::String(name) => priority_from_str(name),
        Value::Null => DEFAULT_PRIORITY,
        _ => DEFAULT_PRIORITY,
    }
}

fn priority_from_str(raw: &str) -> i64 {
    let lowered = raw.to_lowercase();
    if lowered.chars().all(|c| c.is_ascii_digit()) && !lowered.is_empty() {
        return lowered
            .parse::<i64>()
            .ok()
            .filter(|v| (1..=4).contains(v))
            .unwrap_or(DEFAULT_PRIORITY);
    }
    match lowered.as_str() {
        "urgent" => 1,
        "high" => 2,
        "normal" => 3,
        "low" => 4,
        _ => DEFAULT_PRIORITY,
    }
}

/// Normalize a `YYYY-MM-DD` date string into epoch milliseconds at
/// 00:00:00 UTC of that day.
///
/// Returns `None` for absent or malformed input; a bad date never fails the
/// operation.
pub fn normalize_due_date(raw: Option<&str>) -> Option<i64> {
    let date_str = raw?;
    if date_str.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis()),
        Err(_) => {
            warn!(due_date = date_str, "unparseable due date, omitting");
            None
        }
    }
}
