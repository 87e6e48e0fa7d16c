//! Crew types.

use serde::{Deserialize, Serialize};
use serviceworks_client::serde_helpers::{null_default, string_or_number};

/// An employee of the company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(alias = "employeeID", alias = "EmployeeID", alias = "EmployeeId", deserialize_with = "null_default")]
    pub employee_id: i64,
    #[serde(alias = "FirstName", deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(alias = "LastName", deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(alias = "Address", deserialize_with = "null_default")]
    pub address: String,
    #[serde(alias = "Zip", deserialize_with = "string_or_number")]
    pub zip: String,
    #[serde(alias = "CityName", deserialize_with = "null_default")]
    pub city_name: String,
    #[serde(alias = "State", deserialize_with = "null_default")]
    pub state: String,
    #[serde(alias = "Phone", deserialize_with = "null_default")]
    pub phone: String,
    #[serde(alias = "Email", deserialize_with = "null_default")]
    pub email: String,
    #[serde(alias = "UserId", deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(alias = "Color", deserialize_with = "null_default")]
    pub color: String,
    #[serde(alias = "IsTechnician", deserialize_with = "null_default")]
    pub is_technician: bool,
    #[serde(alias = "IsActive", deserialize_with = "null_default")]
    pub is_active: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// `data` of `Configuration/GetUserLists`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserLists {
    #[serde(default, alias = "EmployeeList", deserialize_with = "null_default")]
    pub employee_list: Vec<Employee>,
}
