//! Client-side search and date filtering of fetched lists.

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, Employee};

/// Filter employees by a case-insensitive substring of name, email, department, or id.
///
/// A blank query returns the whole list. Matches keep their original order.
pub fn filter_employees(all: &[Employee], query: &str) -> Vec<Employee> {
    if query.trim().is_empty() {
        return all.to_vec();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
                || e.id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep only records for the given date. `None` keeps everything.
pub fn filter_attendance_by_date(all: &[AttendanceRecord], date: Option<NaiveDate>) -> Vec<AttendanceRecord> {
    match date {
        Some(date) => all.iter().filter(|a| a.date == date).cloned().collect(),
        None => all.to_vec(),
    }
}
