//! Page controllers: cached backend data plus the views derived from it.
//!
//! Each page loads its lists through a [`Gateway`](crate::client::Gateway),
//! replaces them wholesale on every refetch, and refetches after every
//! successful mutation.

pub mod attendance;
pub mod dashboard;
pub mod employees;

pub use attendance::{AttendancePage, MarkOutcome};
pub use dashboard::{DashboardView, RECENT_EMPLOYEES, load_dashboard};
pub use employees::EmployeesPage;

use tracing::warn;

use crate::error::Result;

/// Use an empty list when a list fetch fails, so the rest of the page still renders.
pub fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("Error fetching {what}: {e}");
        Vec::new()
    })
}
