//! Data models for employees, attendance records, and dashboard statistics.

pub mod attendance;
pub mod dashboard;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus, MarkAttendance};
pub use dashboard::{DashboardStats, DepartmentShare, StatusCount, TrendPoint};
pub use employee::{DEPARTMENTS, Employee, EmployeeDraft};
