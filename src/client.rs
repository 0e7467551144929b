//! REST backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Url, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{AttendanceRecord, AttendanceStatus, DashboardStats, Employee, EmployeeDraft, MarkAttendance};
use crate::presence::today;

/// Backend operations used by the pages.
///
/// [`ApiClient`] talks to the REST backend; tests substitute in-memory
/// implementations.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /employees`
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// `GET /employees/:id`
    async fn get_employee(&self, id: &str) -> Result<Employee>;

    /// `POST /employees`
    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee>;

    /// `PUT /employees/:id`
    async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> Result<Employee>;

    /// `DELETE /employees/:id`
    async fn delete_employee(&self, id: &str) -> Result<()>;

    /// `GET /attendance`, optionally restricted to one date.
    async fn list_attendance(&self, date: Option<NaiveDate>) -> Result<Vec<AttendanceRecord>>;

    /// `GET /attendance/:employeeId`
    async fn employee_attendance(&self, employee_id: &str) -> Result<Vec<AttendanceRecord>>;

    /// `POST /attendance`; the backend overwrites an existing mark for the same day.
    async fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord>;

    /// `GET /dashboard/stats`
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Attendance snapshot for the current local date.
    async fn today_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance(Some(today())).await
    }
}

/// HTTP client for the employee/attendance REST backend.
///
/// No retries and no caching: every call is one request, and transport
/// failures or non-2xx statuses come back as [`AppError::Http`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    base: Url,
}

impl ApiClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - Backend URL including path prefix (e.g., "http://localhost:5000/api")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|e| AppError::config(format!("Invalid base URL '{base_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AppError::config(format!("Invalid base URL '{base_url}': no path")));
        }

        let client = Client::builder().default_headers(headers).timeout(timeout).build()?;

        Ok(Self { client, base_url, base })
    }

    /// Create a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend answers at the base URL with a 2xx status.
    pub async fn health(&self) -> Result<bool> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(response.status().is_success())
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and decode the (possibly enveloped) JSON payload.
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let body: Value = self.send(request, what).await?.json().await?;
        Ok(serde_json::from_value(unwrap_envelope(body))?)
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<reqwest::Response> {
        debug!("Request: {what}");
        let response = request.send().await.and_then(|r| r.error_for_status());
        if let Err(e) = &response {
            warn!("{what} failed: {e}");
        }
        Ok(response?)
    }
}

#[async_trait]
impl Gateway for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.fetch(self.client.get(self.url(&["employees"])), "list employees").await
    }

    async fn get_employee(&self, id: &str) -> Result<Employee> {
        let id = require_id(id, "Employee ID")?;
        self.fetch(self.client.get(self.url(&["employees", id])), "get employee")
            .await
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee> {
        self.fetch(self.client.post(self.url(&["employees"])).json(draft), "create employee")
            .await
    }

    async fn update_employee(&self, id: &str, draft: &EmployeeDraft) -> Result<Employee> {
        let id = require_id(id, "Employee ID")?;
        let request = self.client.put(self.url(&["employees", id])).json(draft);
        self.fetch(request, "update employee").await
    }

    async fn delete_employee(&self, id: &str) -> Result<()> {
        let id = require_id(id, "Employee ID")?;
        let request = self.client.delete(self.url(&["employees", id]));
        self.send(request, "delete employee").await?;
        Ok(())
    }

    async fn list_attendance(&self, date: Option<NaiveDate>) -> Result<Vec<AttendanceRecord>> {
        let mut request = self.client.get(self.url(&["attendance"]));
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        self.fetch(request, "list attendance").await
    }

    async fn employee_attendance(&self, employee_id: &str) -> Result<Vec<AttendanceRecord>> {
        let employee_id = require_id(employee_id, "Employee ID")?;
        let request = self.client.get(self.url(&["attendance", employee_id]));
        self.fetch(request, "employee attendance").await
    }

    async fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord> {
        let employee_id = require_id(employee_id, "Employee ID")?;
        let body = MarkAttendance {
            employee_id: employee_id.to_string(),
            date,
            status,
        };
        self.fetch(self.client.post(self.url(&["attendance"])).json(&body), "mark attendance")
            .await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.fetch(self.client.get(self.url(&["dashboard", "stats"])), "dashboard stats")
            .await
    }
}

/// Use the `data` field of a `{ data, success }` envelope when present, else the whole body.
pub fn unwrap_envelope(mut body: Value) -> Value {
    if let Value::Object(map) = &mut body {
        if map.get("data").is_some_and(|data| !data.is_null()) {
            return map.remove("data").unwrap_or(Value::Null);
        }
    }
    body
}

/// Trimmed id, usable as a single path segment.
fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::validation(format!("{what} cannot be empty")));
    }
    // dot segments are dropped when the URL path is built
    if id == "." || id == ".." {
        return Err(AppError::validation(format!("{what} '{id}' is not a valid id")));
    }
    Ok(id)
}
