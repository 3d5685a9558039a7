use serde::{Deserialize, Serialize};

/// One mood record. `date` is a local-timezone `YYYY-MM-DD` key; the log
/// holds at most one entry per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: String,
}

/// The whole mood history. Persisted as a bare JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    pub entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn mood_for(&self, date: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.mood.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub mood: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimelineRow {
    pub date: String,
    pub display_date: String,
    pub mood: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub rows: Vec<TimelineRow>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub mood: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}
