//! Employee list page: search, create/update/delete, CSV export.

use chrono::NaiveDate;
use tracing::info;

use super::or_empty;
use crate::client::Gateway;
use crate::error::{AppError, Result};
use crate::export;
use crate::filter::filter_employees;
use crate::form::validate;
use crate::models::{Employee, EmployeeDraft};

/// Employee management page state.
pub struct EmployeesPage<G> {
    gateway: G,
    employees: Vec<Employee>,
    search: String,
}

impl<G: Gateway> EmployeesPage<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            employees: Vec::new(),
            search: String::new(),
        }
    }

    /// Fetch the employee list. A failed fetch leaves the page with an empty list.
    pub async fn load(&mut self) {
        self.employees = or_empty(self.gateway.list_employees().await, "employees");
        info!("Loaded {} employees", self.employees.len());
    }

    /// All cached employees, in backend order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Employees matching the current search.
    pub fn filtered(&self) -> Vec<Employee> {
        filter_employees(&self.employees, &self.search)
    }

    /// Validate and save a draft, then refetch.
    ///
    /// `editing_id` selects update instead of create. An invalid draft is
    /// rejected with [`AppError::InvalidForm`] before any request is sent.
    pub async fn submit(&mut self, draft: &EmployeeDraft, editing_id: Option<&str>) -> Result<Employee> {
        let errors = validate(draft);
        if !errors.is_empty() {
            return Err(AppError::InvalidForm(errors));
        }

        let saved = match editing_id {
            Some(id) => self.gateway.update_employee(id, draft).await?,
            None => self.gateway.create_employee(draft).await?,
        };
        info!("Saved employee {}", saved.id);

        self.load().await;
        Ok(saved)
    }

    /// Delete an employee, then refetch.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.gateway.delete_employee(id).await?;
        info!("Deleted employee {id}");

        self.load().await;
        Ok(())
    }

    /// CSV of the filtered view.
    pub fn export_csv(&self) -> String {
        export::employees_csv(&self.filtered())
    }

    /// Export file name for a download made on `today`.
    pub fn export_filename(&self, today: NaiveDate) -> String {
        export::employees_filename(today)
    }
}
