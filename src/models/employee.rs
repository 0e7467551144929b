//! Employee model and the draft used for create and update requests.

use serde::{Deserialize, Serialize};

/// Departments offered by the employee form.
pub const DEPARTMENTS: [&str; 6] = ["Engineering", "HR", "Sales", "Finance", "Marketing", "Operations"];

/// Employee as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Unsaved employee form state; also the body of POST and PUT requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeDraft {
    /// Create a draft from field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    /// Create a draft pre-filled for editing an existing employee.
    pub fn edit(emp: &Employee) -> Self {
        Self {
            name: emp.name.clone(),
            email: emp.email.clone(),
            department: emp.department.clone(),
        }
    }

    /// Reset the draft to empty values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_wire_format() {
        let json = r#"{"id":"E1","name":"Ann","email":"ann@x.com","department":"HR"}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(emp.id, "E1");
        assert_eq!(emp.department, "HR");
    }

    #[test]
    fn test_edit_copies_fields() {
        let emp = Employee {
            id: "E7".to_string(),
            name: "Bo".to_string(),
            email: "bo@corp.io".to_string(),
            department: "Sales".to_string(),
        };
        let mut draft = EmployeeDraft::edit(&emp);
        assert_eq!(draft, EmployeeDraft::new("Bo", "bo@corp.io", "Sales"));

        draft.reset();
        assert_eq!(draft, EmployeeDraft::default());
    }
}
