//! Request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces a
//! `Request` and a `parse_*` method that consumes a `Response`; the caller
//! executes the round-trip in between, keeping this module deterministic and
//! free of I/O.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{Method, Request, Response};
use crate::types::{Employee, EmployeePayload};

/// Stateless builder/parser for the `/employees` resource collection.
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    base_url: String,
}

impl EmployeeApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> Request {
        Request {
            method: Method::Get,
            url: format!("{}/employees", self.base_url),
            json_body: None,
        }
    }

    pub fn build_create(&self, payload: &EmployeePayload) -> Result<Request, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Request {
            method: Method::Post,
            url: format!("{}/employees", self.base_url),
            json_body: Some(body),
        })
    }

    pub fn build_update(&self, id: Uuid, payload: &EmployeePayload) -> Result<Request, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(Request {
            method: Method::Put,
            url: format!("{}/employees/{id}", self.base_url),
            json_body: Some(body),
        })
    }

    pub fn build_delete(&self, id: Uuid) -> Request {
        Request {
            method: Method::Delete,
            url: format!("{}/employees/{id}", self.base_url),
            json_body: None,
        }
    }

    /// Parse the collection listing. A 200 whose body is not a JSON array is
    /// treated as an empty collection rather than an error, mirroring the
    /// defensive handling the form has always had.
    pub fn parse_list(&self, response: Response) -> Result<Vec<Employee>, ApiError> {
        check_status(&response, 200)?;
        let value: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        if !value.is_array() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create(&self, response: Response) -> Result<Employee, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update(&self, response: Response) -> Result<Employee, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete(&self, response: Response) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success statuses onto the error taxonomy: 404 is a missing
/// record, 400 carries the server's validation message, everything else is
/// surfaced raw.
fn check_status(response: &Response, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::Rejected(extract_error_message(&response.body))),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw
/// body when it has some other shape.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
