use crate::models::{MoodLog, TimelineResponse, TimelineRow};
use chrono::NaiveDate;

/// Projects the full log into reverse-chronological rows. ISO date keys sort
/// chronologically as strings, so ordering needs no parsed dates.
pub fn build_timeline(log: &MoodLog) -> TimelineResponse {
    let mut rows: Vec<TimelineRow> = log
        .entries
        .iter()
        .map(|entry| TimelineRow {
            date: entry.date.clone(),
            display_date: display_date(&entry.date),
            mood: entry.mood.clone(),
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    TimelineResponse { rows }
}

/// Long-form date for a row, e.g. "January 5, 2024". A key that does not
/// parse is shown as-is.
fn display_date(key: &str) -> String {
    match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => key.to_string(),
    }
}
