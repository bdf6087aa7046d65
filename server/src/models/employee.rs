use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: Uuid::nil(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            designation: "Engineer".to_string(),
            department: "R&D".to_string(),
            salary: 1000.0,
            doj: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_day: None,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["doj"], "2024-01-01");
        assert!(json["lastDay"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("last_day").is_none());
    }

    #[test]
    fn roundtrips_through_json() {
        let employee = sample();
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, employee.id);
        assert_eq!(back.name, employee.name);
        assert_eq!(back.salary, employee.salary);
        assert_eq!(back.doj, employee.doj);
        assert_eq!(back.last_day, employee.last_day);
    }
}
