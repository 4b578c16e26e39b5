//! Pure month-grid math for the calendar view.
//!
//! The grid covers the current calendar month only: a Sunday-first week
//! layout with leading blank cells equal to the weekday offset of the first
//! of the month. Day selection is transient; it lives for one command
//! invocation and is never persisted.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Sunday-indexed weekday of the first of the month.
    pub leading_blanks: u32,
    pub days: u32,
    pub today: u32,
    pub selected: Option<u32>,
}

impl MonthGrid {
    pub fn new(today: NaiveDate, selected: Option<u32>) -> Self {
        let leading_blanks = today
            .with_day(1)
            .map(|first| first.weekday().num_days_from_sunday())
            .unwrap_or(0);
        MonthGrid {
            year: today.year(),
            month: today.month(),
            leading_blanks,
            days: days_in_month(today.year(), today.month()),
            today: today.day(),
            selected,
        }
    }

    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days).contains(&day)
    }

    /// ISO date string for a day of this month.
    pub fn date_for(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
