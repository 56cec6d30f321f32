//! Employee model.
//!
//! Only the fields needed to label attendance exports are modelled here;
//! the roster itself lives in the backend.

use serde::{Deserialize, Serialize};

/// An employee as shown on attendance sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department name, if assigned.
    #[serde(default)]
    pub department: Option<String>,
}

impl Employee {
    /// Returns the employee's display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Amina".to_string(),
    ///     last_name: "Rahman".to_string(),
    ///     department: None,
    /// };
    /// assert_eq!(employee.full_name(), "Amina Rahman");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
