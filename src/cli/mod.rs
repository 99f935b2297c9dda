pub mod headers;
pub mod layout;
pub mod translate;
pub mod zoom;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use timelane::timeline::Timestamp;

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` as the start of that day (UTC).
pub fn parse_start(s: &str) -> Result<Timestamp, String> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0)
        .ok_or_else(|| "invalid midnight time".to_string())?;
    parse_with_day_time(s, midnight)
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` as the last millisecond of that day (UTC).
pub fn parse_end(s: &str) -> Result<Timestamp, String> {
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| "invalid end-of-day time".to_string())?;
    parse_with_day_time(s, end_of_day)
}

fn parse_with_day_time(s: &str, time: NaiveTime) -> Result<Timestamp, String> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("expected RFC 3339 timestamp or YYYY-MM-DD, got {s:?}"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}
