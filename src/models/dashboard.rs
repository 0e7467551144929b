//! Dashboard statistics, computed server-side.

use serde::{Deserialize, Serialize};

/// Aggregate statistics from `GET /dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_employees: u64,
    pub present_today: u64,
    pub absent_today: u64,
    pub total_departments: u64,
    pub weekly_trend: Vec<TrendPoint>,
    pub department_distribution: Vec<DepartmentShare>,
    pub today_attendance_status: Vec<StatusCount>,
}

/// Present count for one day of the weekly trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub present: u64,
}

/// Headcount of one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentShare {
    pub name: String,
    pub value: u64,
}

/// Count of employees with one attendance status today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub name: String,
    pub count: u64,
}
