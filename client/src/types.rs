//! Domain DTOs for the employee API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently,
//! so the client crate has no compile-time dependency on the service. The
//! JSON surface is camelCase (`lastDay`, `createdAt`, `updatedAt`).
//! `EmployeePayload` always serializes `lastDay` (as `null` when the form
//! field is blank) so an update can clear a previously set date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single employee record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub salary: f64,
    pub doj: NaiveDate,
    #[serde(rename = "lastDay")]
    pub last_day: Option<NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The user-supplied fields sent on create and update. The same shape serves
/// both: the form always submits every field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub salary: f64,
    pub doj: NaiveDate,
    #[serde(rename = "lastDay")]
    pub last_day: Option<NaiveDate>,
}
