//! Application state for the employee form and list.
//!
//! # Design
//! `App` owns the two pieces of state the frontend has: the collection
//! snapshot and the form draft (plus the id being edited, when in update
//! mode). Like `EmployeeApi`, it never performs I/O: mutations are split
//! into a `build_*` step that yields a `Request` and an `apply_*` step that
//! consumes the `Response` and advances the state. After every successful
//! mutation the host is expected to re-fetch the collection rather than
//! patch the snapshot locally.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::api::EmployeeApi;
use crate::error::{ApiError, DraftError, SubmitError};
use crate::http::{Request, Response};
use crate::types::{Employee, EmployeePayload};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// One of the seven form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Designation,
    Department,
    Salary,
    Doj,
    LastDay,
}

impl Field {
    /// Resolve a user-typed field name. Accepts the camelCase wire name for
    /// the last-day field as well as snake/lower variants.
    pub fn parse(name: &str) -> Option<Field> {
        match name.to_ascii_lowercase().as_str() {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "designation" => Some(Field::Designation),
            "department" => Some(Field::Department),
            "salary" => Some(Field::Salary),
            "doj" => Some(Field::Doj),
            "lastday" | "last_day" => Some(Field::LastDay),
            _ => None,
        }
    }
}

/// The in-progress, unsaved form state. All fields are raw strings, exactly
/// as typed; nothing is validated until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub salary: String,
    pub doj: String,
    pub last_day: String,
}

impl Draft {
    fn from_employee(employee: &Employee) -> Self {
        Draft {
            name: employee.name.clone(),
            email: employee.email.clone(),
            designation: employee.designation.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            doj: employee.doj.to_string(),
            last_day: employee
                .last_day
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate the draft and produce the submit payload: required fields
    /// present after trimming, a plausible email, a strictly positive
    /// salary, parseable dates. A blank last day means absent.
    pub fn validate(&self) -> Result<EmployeePayload, DraftError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let designation = self.designation.trim();
        let department = self.department.trim();
        let salary = self.salary.trim();
        let doj = self.doj.trim();
        let last_day = self.last_day.trim();

        if name.is_empty()
            || email.is_empty()
            || designation.is_empty()
            || department.is_empty()
            || salary.is_empty()
            || doj.is_empty()
        {
            return Err(DraftError::MissingRequired);
        }

        if !EMAIL_RE.is_match(email) {
            return Err(DraftError::InvalidEmail);
        }

        let salary: f64 = salary.parse().map_err(|_| DraftError::InvalidSalary)?;
        if !salary.is_finite() || salary <= 0.0 {
            return Err(DraftError::InvalidSalary);
        }

        let doj = NaiveDate::parse_from_str(doj, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate("doj"))?;

        let last_day = if last_day.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(last_day, "%Y-%m-%d")
                    .map_err(|_| DraftError::InvalidDate("lastDay"))?,
            )
        };

        Ok(EmployeePayload {
            name: name.to_string(),
            email: email.to_string(),
            designation: designation.to_string(),
            department: department.to_string(),
            salary,
            doj,
            last_day,
        })
    }
}

/// The whole client application: collection snapshot, form draft, and the
/// create-vs-update mode switch.
#[derive(Debug)]
pub struct App {
    api: EmployeeApi,
    employees: Vec<Employee>,
    draft: Draft,
    editing: Option<Uuid>,
}

impl App {
    pub fn new(api: EmployeeApi) -> Self {
        App {
            api,
            employees: Vec::new(),
            draft: Draft::default(),
            editing: None,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Build the collection fetch issued on startup and after every
    /// successful mutation.
    pub fn build_load(&self) -> Request {
        self.api.build_list()
    }

    /// Replace the snapshot with the server's collection.
    pub fn apply_load(&mut self, response: Response) -> Result<(), ApiError> {
        self.employees = self.api.parse_list(response)?;
        Ok(())
    }

    /// Overwrite a single draft field with whatever the operator typed.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Designation => &mut self.draft.designation,
            Field::Department => &mut self.draft.department,
            Field::Salary => &mut self.draft.salary,
            Field::Doj => &mut self.draft.doj,
            Field::LastDay => &mut self.draft.last_day,
        };
        *slot = value.to_string();
    }

    /// Copy an existing record into the draft and switch to update mode.
    /// Returns false when the id is not in the current snapshot.
    pub fn start_edit(&mut self, id: Uuid) -> bool {
        match self.employees.iter().find(|e| e.id == id) {
            Some(employee) => {
                self.draft = Draft::from_employee(employee);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    /// Drop the draft and return to create mode.
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
    }

    /// Validate the draft and build the create or update request, depending
    /// on whether an edit target is set. The draft itself is untouched.
    pub fn build_submit(&self) -> Result<Request, SubmitError> {
        let payload = self.draft.validate()?;
        let request = match self.editing {
            Some(id) => self.api.build_update(id, &payload)?,
            None => self.api.build_create(&payload)?,
        };
        Ok(request)
    }

    /// Consume the submit response. On success the draft is cleared and the
    /// app returns to create mode; on failure the draft is left intact so
    /// the operator can correct it.
    pub fn apply_submit(&mut self, response: Response) -> Result<Employee, ApiError> {
        let employee = match self.editing {
            Some(_) => self.api.parse_update(response)?,
            None => self.api.parse_create(response)?,
        };
        self.draft = Draft::default();
        self.editing = None;
        Ok(employee)
    }

    pub fn build_delete(&self, id: Uuid) -> Request {
        self.api.build_delete(id)
    }

    pub fn apply_delete(&self, response: Response) -> Result<(), ApiError> {
        self.api.parse_delete(response)
    }
}
