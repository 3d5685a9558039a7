use crate::models::{CalendarDay, CalendarResponse, MoodLog};
use chrono::{Datelike, NaiveDate};
use std::env;

/// Which weekday heads the grid. The column of day 1 (and so the number of
/// leading blank cells) follows from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

pub fn resolve_week_start() -> WeekStart {
    match env::var("WEEK_START") {
        Ok(value) if value.eq_ignore_ascii_case("monday") => WeekStart::Monday,
        _ => WeekStart::Sunday,
    }
}

/// Builds the month grid: leading blanks to align day 1, then one cell per
/// day, each tagged with the mood recorded for that date key, if any.
/// Returns `None` when year/month do not name a calendar month.
pub fn build_month(
    year: i32,
    month: u32,
    week_start: WeekStart,
    log: &MoodLog,
) -> Option<CalendarResponse> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading_blanks = match week_start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday(),
        WeekStart::Monday => first.weekday().num_days_from_monday(),
    };

    // Day 0 of the next month is the last day of this one.
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    let days_in_month = next_month_first.pred_opt()?.day();

    let days = (1..=days_in_month)
        .map(|day| CalendarDay {
            day,
            mood: log
                .mood_for(&format!("{year:04}-{month:02}-{day:02}"))
                .map(str::to_string),
        })
        .collect();

    Some(CalendarResponse {
        year,
        month,
        title: first.format("%B %Y").to_string(),
        leading_blanks,
        days,
    })
}
