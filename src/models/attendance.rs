//! Attendance records and the mark-attendance request body.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status for one employee on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Wire and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(format!("unknown attendance status '{other}' (expected present or absent)")),
        }
    }
}

/// Attendance record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body of `POST /attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let json = r#"{"id":"A1","employeeId":"E1","date":"2025-03-04","status":"Absent"}"#;
        let rec: AttendanceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(rec.employee_id, "E1");
        assert_eq!(rec.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(rec.status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_mark_body_uses_camel_case() {
        let body = MarkAttendance {
            employee_id: "E1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["employeeId"], "E1");
        assert_eq!(value["date"], "2025-03-04");
        assert_eq!(value["status"], "Present");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("present".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Present));
        assert_eq!(" Absent ".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Absent));
        assert!("late".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":"A1","employeeId":"E1","date":"2025-03-04","status":"Late"}"#;
        assert!(serde_json::from_str::<AttendanceRecord>(json).is_err());
    }
}
