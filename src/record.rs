use crate::models::{MoodEntry, MoodLog};
use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Upserts the mood for `date`: overwrite the existing entry for that key if
/// there is one, append otherwise. Returns the entry as recorded.
pub fn record_mood(log: &mut MoodLog, date: NaiveDate, mood: &str) -> MoodEntry {
    let key = date_key(date);
    if let Some(entry) = log.entries.iter_mut().find(|entry| entry.date == key) {
        entry.mood = mood.to_string();
        return entry.clone();
    }

    let entry = MoodEntry {
        date: key,
        mood: mood.to_string(),
    };
    log.entries.push(entry.clone());
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn records_a_new_day() {
        let mut log = MoodLog::default();
        let entry = record_mood(&mut log, day(2024, 1, 5), "happy");
        assert_eq!(entry.date, "2024-01-05");
        assert_eq!(entry.mood, "happy");
        assert_eq!(log.entries.len(), 1);
    }

    #[test]
    fn same_day_overwrites_instead_of_appending() {
        let mut log = MoodLog::default();
        record_mood(&mut log, day(2024, 1, 5), "happy");
        record_mood(&mut log, day(2024, 1, 5), "sad");

        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.mood_for("2024-01-05"), Some("sad"));
    }

    #[test]
    fn distinct_days_get_distinct_entries() {
        let mut log = MoodLog::default();
        record_mood(&mut log, day(2024, 1, 5), "happy");
        record_mood(&mut log, day(2024, 1, 6), "calm");

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.mood_for("2024-01-05"), Some("happy"));
        assert_eq!(log.mood_for("2024-01-06"), Some("calm"));
    }

    #[test]
    fn at_most_one_entry_per_date_across_any_sequence() {
        let mut log = MoodLog::default();
        let moods = ["happy", "sad", "meh", "happy", "angry"];
        for (index, mood) in moods.iter().enumerate() {
            record_mood(&mut log, day(2024, 2, 1 + (index as u32 % 2)), mood);
        }

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.mood_for("2024-02-01"), Some("angry"));
        assert_eq!(log.mood_for("2024-02-02"), Some("happy"));
    }
}
