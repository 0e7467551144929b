//! Dashboard page data.

use tracing::warn;

use super::or_empty;
use crate::client::Gateway;
use crate::error::Result;
use crate::models::{DashboardStats, Employee};

/// Number of employees shown in the "recent employees" list.
pub const RECENT_EMPLOYEES: usize = 5;

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_employees: Vec<Employee>,
}

/// Fetch stats and employees concurrently.
///
/// Failing to get stats fails the whole view; the employee list degrades to empty.
pub async fn load_dashboard<G: Gateway>(gateway: &G) -> Result<DashboardView> {
    let (stats, employees) = tokio::join!(gateway.dashboard_stats(), gateway.list_employees());

    let stats = stats.inspect_err(|e| warn!("Error fetching dashboard stats: {e}"))?;
    let mut recent_employees = or_empty(employees, "employees");
    recent_employees.truncate(RECENT_EMPLOYEES);

    Ok(DashboardView {
        stats,
        recent_employees,
    })
}
