//! Employee entity types
//!
//! `Employee` is a persisted row and always carries an id. `EmployeeDetails`
//! is the caller-supplied payload: every field except the id, which storage
//! owns.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Storage-assigned employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub salary: f64,
    pub hometown: String,
}

impl Employee {
    /// Attach an id to a set of details
    pub fn from_details(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self {
            id,
            name: details.name,
            age: details.age,
            salary: details.salary,
            hometown: details.hometown,
        }
    }

    /// Overwrite every mutable field from `details`. The id is left untouched.
    pub fn apply(&mut self, details: EmployeeDetails) {
        self.name = details.name;
        self.age = details.age;
        self.salary = details.salary;
        self.hometown = details.hometown;
    }

    /// The mutable fields of this record
    pub fn details(&self) -> EmployeeDetails {
        EmployeeDetails {
            id: None,
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
            hometown: self.hometown.clone(),
        }
    }
}

/// Request payload for create and update
///
/// Accepts the full employee JSON shape so clients can send back a record
/// they previously read. The `id` field is accepted and ignored. `age` and
/// `salary` may be numbers or numeric strings, as HTML form inputs submit.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub age: i32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub salary: f64,
    pub hometown: String,
}

impl EmployeeDetails {
    pub fn new(name: impl Into<String>, age: i32, salary: f64, hometown: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            salary,
            hometown: hometown.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_json_shape() {
        let employee = Employee::from_details(
            EmployeeId::new(7),
            EmployeeDetails::new("Ana", 30, 5000.0, "Lima"),
        );

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["age"], 30);
        assert_eq!(json["salary"], 5000.0);
        assert_eq!(json["hometown"], "Lima");
    }

    #[test]
    fn test_details_accept_and_ignore_id() {
        let with_id: EmployeeDetails = serde_json::from_str(
            r#"{"id": 42, "name": "Ana", "age": 30, "salary": 5000, "hometown": "Lima"}"#,
        )
        .unwrap();
        let with_null: EmployeeDetails = serde_json::from_str(
            r#"{"id": null, "name": "Ana", "age": 30, "salary": 5000, "hometown": "Lima"}"#,
        )
        .unwrap();
        let without: EmployeeDetails = serde_json::from_str(
            r#"{"name": "Ana", "age": 30, "salary": 5000.5, "hometown": "Lima"}"#,
        )
        .unwrap();

        assert_eq!(with_id.id, Some(42));
        assert_eq!(with_null.id, None);
        assert_eq!(without.salary, 5000.5);

        let employee = Employee::from_details(EmployeeId::new(1), with_id);
        assert_eq!(employee.id, EmployeeId::new(1));
    }

    #[test]
    fn test_details_require_all_fields() {
        let result: Result<EmployeeDetails, _> =
            serde_json::from_str(r#"{"name": "Ana", "age": 30}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_details_accept_numeric_strings() {
        let details: EmployeeDetails = serde_json::from_str(
            r#"{"name": "Ana", "age": "30", "salary": "5000.5", "hometown": "Lima"}"#,
        )
        .unwrap();

        assert_eq!(details.age, 30);
        assert_eq!(details.salary, 5000.5);
    }

    #[test]
    fn test_details_reject_non_numeric_strings() {
        let result: Result<EmployeeDetails, _> = serde_json::from_str(
            r#"{"name": "Ana", "age": "thirty", "salary": "5000", "hometown": "Lima"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut employee = Employee::from_details(
            EmployeeId::new(3),
            EmployeeDetails::new("Ana", 30, 5000.0, "Lima"),
        );
        employee.apply(EmployeeDetails::new("Bea", 41, 7200.0, "Cusco"));

        assert_eq!(employee.id, EmployeeId::new(3));
        assert_eq!(employee.name, "Bea");
        assert_eq!(employee.age, 41);
        assert_eq!(employee.salary, 7200.0);
        assert_eq!(employee.hometown, "Cusco");
    }
}
