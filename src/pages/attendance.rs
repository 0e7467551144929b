//! Attendance page: date filter, today's marking, CSV export.

use chrono::NaiveDate;
use tracing::info;

use super::or_empty;
use crate::client::Gateway;
use crate::error::Result;
use crate::export;
use crate::filter::filter_attendance_by_date;
use crate::models::{AttendanceRecord, AttendanceStatus, Employee};
use crate::presence::{MarkButtons, status_for};

/// Result of a mark request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The backend recorded the new status.
    Marked(AttendanceRecord),
    /// The employee already had this status today; nothing was sent.
    Unchanged,
}

/// Attendance management page state.
pub struct AttendancePage<G> {
    gateway: G,
    today: NaiveDate,
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
    today_snapshot: Vec<AttendanceRecord>,
    selected_date: Option<NaiveDate>,
}

impl<G: Gateway> AttendancePage<G> {
    /// Create the page for `today`; the date filter starts on today.
    pub fn new(gateway: G, today: NaiveDate) -> Self {
        Self {
            gateway,
            today,
            employees: Vec::new(),
            records: Vec::new(),
            today_snapshot: Vec::new(),
            selected_date: Some(today),
        }
    }

    /// Fetch employees and all attendance concurrently, then today's snapshot.
    ///
    /// Each list falls back to empty on its own failure.
    pub async fn load(&mut self) {
        let (employees, records) = tokio::join!(self.gateway.list_employees(), self.gateway.list_attendance(None));
        self.employees = or_empty(employees, "employees");
        self.records = or_empty(records, "attendance");

        let snapshot = self.gateway.list_attendance(Some(self.today)).await;
        self.today_snapshot = or_empty(snapshot, "today's attendance");

        info!(
            "Loaded {} employees, {} attendance records ({} today)",
            self.employees.len(),
            self.records.len(),
            self.today_snapshot.len()
        );
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn today_snapshot(&self) -> &[AttendanceRecord] {
        &self.today_snapshot
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Set the date filter; `None` shows all dates.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    /// Records for the selected date.
    pub fn filtered(&self) -> Vec<AttendanceRecord> {
        filter_attendance_by_date(&self.records, self.selected_date)
    }

    /// Today's status for an employee, `None` when not yet marked.
    pub fn status_for(&self, employee_id: &str) -> Option<AttendanceStatus> {
        status_for(employee_id, &self.today_snapshot)
    }

    pub fn buttons_for(&self, employee_id: &str) -> MarkButtons {
        MarkButtons::for_status(self.status_for(employee_id))
    }

    /// Mark an employee for today, then refetch.
    ///
    /// Re-marking the current status is skipped, like a disabled button.
    pub async fn mark(&mut self, employee_id: &str, status: AttendanceStatus) -> Result<MarkOutcome> {
        if !self.buttons_for(employee_id).allows(status) {
            info!("{employee_id} already marked {status} today");
            return Ok(MarkOutcome::Unchanged);
        }

        let record = self.gateway.mark_attendance(employee_id, self.today, status).await?;
        info!("Marked {employee_id} {status} for {}", self.today);

        self.load().await;
        Ok(MarkOutcome::Marked(record))
    }

    /// CSV of the filtered view with employee names and departments resolved.
    pub fn export_csv(&self) -> String {
        export::attendance_csv(&self.filtered(), &self.employees)
    }

    pub fn export_filename(&self) -> String {
        export::attendance_filename(self.selected_date)
    }
}
