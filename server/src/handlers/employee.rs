use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use log::error;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::employee::Employee;

#[derive(Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(custom = "validate_not_blank")]
    name: String,
    #[validate(email(message = "Invalid email format"))]
    email: String,
    #[validate(custom = "validate_not_blank")]
    designation: String,
    #[validate(custom = "validate_not_blank")]
    department: String,
    #[validate(range(min = 0.0, message = "Salary must be zero or positive"))]
    salary: f64,
    doj: NaiveDate,
    #[serde(rename = "lastDay", default)]
    last_day: Option<NaiveDate>,
}

#[derive(Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[validate(custom = "validate_not_blank")]
    name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    email: Option<String>,
    #[validate(custom = "validate_not_blank")]
    designation: Option<String>,
    #[validate(custom = "validate_not_blank")]
    department: Option<String>,
    #[validate(range(min = 0.0, message = "Salary must be zero or positive"))]
    salary: Option<f64>,
    doj: Option<NaiveDate>,
    // Outer None = field absent (keep stored value), Some(None) = explicit
    // null (clear the date).
    #[serde(rename = "lastDay", default, deserialize_with = "deserialize_present")]
    last_day: Option<Option<NaiveDate>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("required field is blank"));
    }
    Ok(())
}

impl NewEmployee {
    fn trimmed(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.designation = self.designation.trim().to_string();
        self.department = self.department.trim().to_string();
        self
    }
}

impl EmployeeUpdate {
    fn trimmed(mut self) -> Self {
        self.name = self.name.map(|v| v.trim().to_string());
        self.email = self.email.map(|v| v.trim().to_string());
        self.designation = self.designation.map(|v| v.trim().to_string());
        self.department = self.department.map(|v| v.trim().to_string());
        self
    }
}

fn parse_employee_id(raw: &str) -> Result<Uuid, AppError> {
    // An id that does not parse can never name a stored record.
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Employee not found".to_string()))
}

pub async fn list_employees(pool: web::Data<sqlx::PgPool>) -> Result<HttpResponse, AppError> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at DESC")
            .fetch_all(&**pool)
            .await
            .map_err(|err| {
                error!("Failed to list employees: {}", err);
                AppError::Database("Failed to list employees".to_string())
            })?;

    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    pool: web::Data<sqlx::PgPool>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    let new_employee = new_employee.into_inner().trimmed();
    new_employee
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    let now = Utc::now();

    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (id, name, email, designation, department, salary, doj, last_day, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&new_employee.name)
    .bind(&new_employee.email)
    .bind(&new_employee.designation)
    .bind(&new_employee.department)
    .bind(new_employee.salary)
    .bind(new_employee.doj)
    .bind(new_employee.last_day)
    .bind(now)
    .bind(now)
    .fetch_one(&**pool)
    .await
    .map_err(|err| {
        error!("Failed to create employee: {}", err);
        AppError::Database("Failed to create employee".to_string())
    })?;

    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    pool: web::Data<sqlx::PgPool>,
    path: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&path.into_inner())?;

    let updates = updates.into_inner().trimmed();
    updates
        .validate()
        .map_err(|err| AppError::Validation(err.to_string()))?;

    let mut employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(&**pool)
        .await
        .map_err(|err| {
            error!("Failed to look up employee {}: {}", id, err);
            AppError::Database("Failed to look up employee".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    if let Some(name) = updates.name {
        employee.name = name;
    }
    if let Some(email) = updates.email {
        employee.email = email;
    }
    if let Some(designation) = updates.designation {
        employee.designation = designation;
    }
    if let Some(department) = updates.department {
        employee.department = department;
    }
    if let Some(salary) = updates.salary {
        employee.salary = salary;
    }
    if let Some(doj) = updates.doj {
        employee.doj = doj;
    }
    if let Some(last_day) = updates.last_day {
        employee.last_day = last_day;
    }
    employee.updated_at = Utc::now();

    let employee = sqlx::query_as::<_, Employee>(
        "UPDATE employees SET name = $1, email = $2, designation = $3, department = $4, \
         salary = $5, doj = $6, last_day = $7, updated_at = $8 \
         WHERE id = $9 \
         RETURNING *",
    )
    .bind(&employee.name)
    .bind(&employee.email)
    .bind(&employee.designation)
    .bind(&employee.department)
    .bind(employee.salary)
    .bind(employee.doj)
    .bind(employee.last_day)
    .bind(employee.updated_at)
    .bind(employee.id)
    .fetch_one(&**pool)
    .await
    .map_err(|err| {
        error!("Failed to update employee {}: {}", id, err);
        AppError::Database("Failed to update employee".to_string())
    })?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    pool: web::Data<sqlx::PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_employee_id(&path.into_inner())?;

    let existing = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(&**pool)
        .await
        .map_err(|err| {
            error!("Failed to look up employee {}: {}", id, err);
            AppError::Database("Failed to look up employee".to_string())
        })?;

    if existing.is_none() {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(&**pool)
        .await
        .map_err(|err| {
            error!("Failed to delete employee {}: {}", id, err);
            AppError::Database("Failed to delete employee".to_string())
        })?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> &'static str {
        r#"{
            "name": "Asha Rao",
            "email": "asha@example.com",
            "designation": "Engineer",
            "department": "R&D",
            "salary": 1000,
            "doj": "2024-01-01"
        }"#
    }

    #[test]
    fn valid_new_employee_passes_validation() {
        let payload: NewEmployee = serde_json::from_str(valid_payload()).unwrap();
        let payload = payload.trimmed();
        assert!(payload.validate().is_ok());
        assert!(payload.last_day.is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "  Asha Rao  ",
                "email": " asha@example.com ",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 1000,
                "doj": "2024-01-01"
            }"#,
        )
        .unwrap();
        let payload = payload.trimmed();
        assert_eq!(payload.name, "Asha Rao");
        assert_eq!(payload.email, "asha@example.com");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "   ",
                "email": "asha@example.com",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 1000,
                "doj": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert!(payload.trimmed().validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "email": "not-an-email",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 1000,
                "doj": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert!(payload.trimmed().validate().is_err());
    }

    #[test]
    fn negative_salary_is_rejected() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "email": "asha@example.com",
                "designation": "Engineer",
                "department": "R&D",
                "salary": -5,
                "doj": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert!(payload.trimmed().validate().is_err());
    }

    #[test]
    fn zero_salary_is_accepted() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "email": "asha@example.com",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 0,
                "doj": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert!(payload.trimmed().validate().is_ok());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let result: Result<NewEmployee, _> = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 1000,
                "doj": "2024-01-01"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn last_day_null_on_create_means_absent() {
        let payload: NewEmployee = serde_json::from_str(
            r#"{
                "name": "Asha Rao",
                "email": "asha@example.com",
                "designation": "Engineer",
                "department": "R&D",
                "salary": 1000,
                "doj": "2024-01-01",
                "lastDay": null
            }"#,
        )
        .unwrap();
        assert!(payload.last_day.is_none());
    }

    #[test]
    fn update_distinguishes_absent_from_null_last_day() {
        let absent: EmployeeUpdate = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert!(absent.last_day.is_none());

        let cleared: EmployeeUpdate = serde_json::from_str(r#"{"lastDay":null}"#).unwrap();
        assert_eq!(cleared.last_day, Some(None));

        let set: EmployeeUpdate = serde_json::from_str(r#"{"lastDay":"2025-06-30"}"#).unwrap();
        assert_eq!(
            set.last_day,
            Some(Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()))
        );
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        let updates: EmployeeUpdate = serde_json::from_str(r#"{}"#).unwrap();
        assert!(updates.trimmed().validate().is_ok());
    }

    #[test]
    fn update_with_malformed_email_is_rejected() {
        let updates: EmployeeUpdate =
            serde_json::from_str(r#"{"email":"broken@"}"#).unwrap();
        assert!(updates.trimmed().validate().is_err());
    }

    #[test]
    fn update_with_negative_salary_is_rejected() {
        let updates: EmployeeUpdate = serde_json::from_str(r#"{"salary":-1}"#).unwrap();
        assert!(updates.trimmed().validate().is_err());
    }

    #[test]
    fn unparseable_id_is_reported_as_not_found() {
        let err = parse_employee_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
