//! CSV export functionality.
//!
//! Every data field is wrapped in double quotes, but quotes and newlines
//! inside a field are written as-is. Downstream consumers read this exact
//! shape, so values containing `"` or line breaks produce malformed rows.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{AttendanceRecord, Employee};
use crate::presence::{employee_department, employee_name};

/// Employee export columns.
pub const EMPLOYEE_HEADERS: [&str; 4] = ["Employee ID", "Name", "Email", "Department"];

/// Attendance export columns.
pub const ATTENDANCE_HEADERS: [&str; 5] = ["Date", "Employee ID", "Employee Name", "Department", "Status"];

/// Serialize headers and rows as CSV text without a trailing newline.
pub fn to_csv<H, R, F>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    let header_line = headers.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line);
    for row in rows {
        let fields: Vec<String> = row.as_ref().iter().map(|f| format!("\"{}\"", f.as_ref())).collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// CSV for a (usually filtered) employee list.
pub fn employees_csv(employees: &[Employee]) -> String {
    let rows: Vec<[&str; 4]> = employees
        .iter()
        .map(|e| [e.id.as_str(), e.name.as_str(), e.email.as_str(), e.department.as_str()])
        .collect();

    to_csv(&EMPLOYEE_HEADERS, &rows)
}

/// CSV for attendance records, resolving names and departments from `employees`.
pub fn attendance_csv(records: &[AttendanceRecord], employees: &[Employee]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|a| {
            [
                a.date.to_string(),
                a.employee_id.clone(),
                employee_name(&a.employee_id, employees).to_string(),
                employee_department(&a.employee_id, employees).to_string(),
                a.status.to_string(),
            ]
        })
        .collect();

    to_csv(&ATTENDANCE_HEADERS, &rows)
}

/// File name for an employee export made on `today`.
pub fn employees_filename(today: NaiveDate) -> String {
    format!("employees_{today}.csv", today = today.format("%Y-%m-%d"))
}

/// File name for an attendance export; `None` means all dates.
pub fn attendance_filename(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("attendance_{date}.csv", date = date.format("%Y-%m-%d")),
        None => "attendance_all.csv".to_string(),
    }
}

/// Write CSV content to `dir/filename`, creating `dir` if needed.
pub fn save_csv(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, content)?;
    tracing::info!("Exported {} bytes to {:?}", content.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;

    #[test]
    fn test_to_csv_basic() {
        let csv = to_csv(&["A", "B"], &[["1", "2"], ["3", "4"]]);
        assert_eq!(csv, "A,B\n\"1\",\"2\"\n\"3\",\"4\"");
    }

    #[test]
    fn test_to_csv_headers_only() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(to_csv(&["Date", "Status"], &rows), "Date,Status");
    }

    #[test]
    fn test_to_csv_keeps_embedded_quotes_unescaped() {
        let csv = to_csv(&["Name"], &[["Jo \"JJ\" Lee"]]);
        assert_eq!(csv, "Name\n\"Jo \"JJ\" Lee\"");
    }

    #[test]
    fn test_employees_csv() {
        let employees = vec![Employee {
            id: "E1".to_string(),
            name: "Ann, Jr".to_string(),
            email: "ann@x.com".to_string(),
            department: "HR".to_string(),
        }];

        assert_eq!(
            employees_csv(&employees),
            "Employee ID,Name,Email,Department\n\"E1\",\"Ann, Jr\",\"ann@x.com\",\"HR\""
        );
    }

    #[test]
    fn test_attendance_csv_resolves_unknown_employee() {
        let records = vec![AttendanceRecord {
            id: "A1".to_string(),
            employee_id: "E9".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            status: AttendanceStatus::Present,
        }];

        assert_eq!(
            attendance_csv(&records, &[]),
            "Date,Employee ID,Employee Name,Department,Status\n\"2025-02-03\",\"E9\",\"Unknown\",\"Unknown\",\"Present\""
        );
    }

    #[test]
    fn test_filenames() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();

        assert_eq!(employees_filename(day), "employees_2025-11-05.csv");
        assert_eq!(attendance_filename(Some(day)), "attendance_2025-11-05.csv");
        assert_eq!(attendance_filename(None), "attendance_all.csv");
    }

    #[test]
    fn test_save_csv_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");

        let path = save_csv(&dir, "employees_2025-01-01.csv", "A,B").unwrap();

        assert_eq!(path, dir.join("employees_2025-01-01.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "A,B");
    }
}
