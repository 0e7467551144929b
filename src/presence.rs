//! Today's attendance status per employee, resolved from a snapshot.

use chrono::{Local, NaiveDate};

use crate::models::{AttendanceRecord, AttendanceStatus, Employee};

/// Shown when a record references an employee missing from the list.
pub const UNKNOWN: &str = "Unknown";

/// Current local calendar date, the day attendance is marked for.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Status of the first snapshot record for `employee_id`, or `None` if not yet marked.
pub fn status_for(employee_id: &str, snapshot: &[AttendanceRecord]) -> Option<AttendanceStatus> {
    snapshot.iter().find(|a| a.employee_id == employee_id).map(|a| a.status)
}

/// Enabled state of the two mark buttons for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkButtons {
    pub present_enabled: bool,
    pub absent_enabled: bool,
}

impl MarkButtons {
    /// A button is disabled only when it would re-mark the current status.
    pub fn for_status(current: Option<AttendanceStatus>) -> Self {
        Self {
            present_enabled: current != Some(AttendanceStatus::Present),
            absent_enabled: current != Some(AttendanceStatus::Absent),
        }
    }

    /// Whether marking `target` is currently allowed.
    pub fn allows(&self, target: AttendanceStatus) -> bool {
        match target {
            AttendanceStatus::Present => self.present_enabled,
            AttendanceStatus::Absent => self.absent_enabled,
        }
    }
}

/// Name of the employee with `employee_id`.
pub fn employee_name<'a>(employee_id: &str, employees: &'a [Employee]) -> &'a str {
    employees
        .iter()
        .find(|e| e.id == employee_id)
        .map(|e| e.name.as_str())
        .unwrap_or(UNKNOWN)
}

/// Department of the employee with `employee_id`.
pub fn employee_department<'a>(employee_id: &str, employees: &'a [Employee]) -> &'a str {
    employees
        .iter()
        .find(|e| e.id == employee_id)
        .map(|e| e.department.as_str())
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("A-{employee_id}"),
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status,
        }
    }

    #[test]
    fn test_unmarked_when_snapshot_empty() {
        assert_eq!(status_for("E1", &[]), None);
    }

    #[test]
    fn test_status_from_snapshot() {
        let snapshot = vec![record("E2", AttendanceStatus::Absent), record("E1", AttendanceStatus::Present)];

        assert_eq!(status_for("E1", &snapshot), Some(AttendanceStatus::Present));
        assert_eq!(status_for("E2", &snapshot), Some(AttendanceStatus::Absent));
        assert_eq!(status_for("E3", &snapshot), None);
    }

    #[test]
    fn test_first_record_wins() {
        let snapshot = vec![record("E1", AttendanceStatus::Absent), record("E1", AttendanceStatus::Present)];
        assert_eq!(status_for("E1", &snapshot), Some(AttendanceStatus::Absent));
    }

    #[test]
    fn test_buttons() {
        let unmarked = MarkButtons::for_status(None);
        assert!(unmarked.present_enabled && unmarked.absent_enabled);

        let present = MarkButtons::for_status(Some(AttendanceStatus::Present));
        assert!(!present.allows(AttendanceStatus::Present));
        assert!(present.allows(AttendanceStatus::Absent));

        let absent = MarkButtons::for_status(Some(AttendanceStatus::Absent));
        assert!(absent.allows(AttendanceStatus::Present));
        assert!(!absent.allows(AttendanceStatus::Absent));
    }

    #[test]
    fn test_lookup_falls_back_to_unknown() {
        let employees = vec![Employee {
            id: "E1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            department: "HR".to_string(),
        }];

        assert_eq!(employee_name("E1", &employees), "Ann");
        assert_eq!(employee_department("E1", &employees), "HR");
        assert_eq!(employee_name("E9", &employees), UNKNOWN);
        assert_eq!(employee_department("E9", &employees), UNKNOWN);
    }
}
