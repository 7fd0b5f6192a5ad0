use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric primary key of an employee row.
pub type Ssn = i64;

/// The nine non-key attributes of an employee.
///
/// JSON keys follow the column names of the `employee` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "Fname")]
    pub first_name: String,
    #[serde(rename = "Minit")]
    pub middle_initial: Option<String>,
    #[serde(rename = "Lname")]
    pub last_name: String,
    #[serde(rename = "Bdate")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Salary")]
    pub salary: Option<f64>,
    #[serde(rename = "Super_ssn")]
    pub super_ssn: Option<Ssn>,
    #[serde(rename = "DL_id")]
    pub dl_id: Option<String>,
}

impl EmployeeRecord {
    /// Creates a record with only the non-nullable names set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            middle_initial: None,
            last_name: last_name.into(),
            birth_date: None,
            address: None,
            sex: None,
            salary: None,
            super_ssn: None,
            dl_id: None,
        }
    }

    pub fn with_middle_initial(mut self, minit: impl Into<String>) -> Self {
        self.middle_initial = Some(minit.into());
        self
    }

    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_super_ssn(mut self, ssn: Ssn) -> Self {
        self.super_ssn = Some(ssn);
        self
    }

    pub fn with_dl_id(mut self, dl_id: impl Into<String>) -> Self {
        self.dl_id = Some(dl_id.into());
        self
    }
}

/// A persisted employee row: the identifier plus its record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Ssn")]
    pub ssn: Ssn,
    #[serde(flatten)]
    pub record: EmployeeRecord,
}

impl Employee {
    pub fn new(ssn: Ssn, record: EmployeeRecord) -> Self {
        Self { ssn, record }
    }

    /// Full display name, e.g. `John B. Smith`.
    pub fn full_name(&self) -> String {
        match self.record.middle_initial.as_deref() {
            Some(minit) if !minit.is_empty() => format!(
                "{} {}. {}",
                self.record.first_name, minit, self.record.last_name
            ),
            _ => format!("{} {}", self.record.first_name, self.record.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_serializes_with_column_names() {
        let employee = Employee::new(
            7,
            EmployeeRecord::new("John", "Smith")
                .with_middle_initial("B")
                .with_birth_date(NaiveDate::from_ymd_opt(1965, 1, 9).unwrap())
                .with_salary(30000.0)
                .with_dl_id("D123"),
        );

        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["Ssn"], 7);
        assert_eq!(json["Fname"], "John");
        assert_eq!(json["Minit"], "B");
        assert_eq!(json["Bdate"], "1965-01-09");
        assert_eq!(json["Salary"], 30000.0);
        assert_eq!(json["Super_ssn"], serde_json::Value::Null);
        assert_eq!(json["DL_id"], "D123");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_employee_deserializes_from_row_json() {
        let json = serde_json::json!({
            "Ssn": 3,
            "Fname": "Alicia",
            "Minit": "J",
            "Lname": "Zelaya",
            "Bdate": "1968-07-19",
            "Address": "3321 Castle, Spring, TX",
            "Sex": "F",
            "Salary": 25000.0,
            "Super_ssn": 1,
            "DL_id": null
        });

        let employee: Employee = serde_json::from_value(json).unwrap();

        assert_eq!(employee.ssn, 3);
        assert_eq!(employee.record.last_name, "Zelaya");
        assert_eq!(employee.record.super_ssn, Some(1));
        assert_eq!(employee.record.dl_id, None);
    }

    #[test]
    fn test_full_name() {
        let with_minit = Employee::new(1, EmployeeRecord::new("John", "Smith").with_middle_initial("B"));
        let without = Employee::new(2, EmployeeRecord::new("Ahmad", "Jabbar"));

        assert_eq!(with_minit.full_name(), "John B. Smith");
        assert_eq!(without.full_name(), "Ahmad Jabbar");
    }
}
