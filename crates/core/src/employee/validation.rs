use serde_json::Value;

use super::error::ValidationError;
use super::types::EmployeeRecord;

/// Keys every create/update body must carry, in column order.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "Fname",
    "Minit",
    "Lname",
    "Bdate",
    "Address",
    "Sex",
    "Salary",
    "Super_ssn",
    "DL_id",
];

/// Returns the required keys absent from a JSON object, in canonical order.
///
/// A key that is present with a `null` value counts as present.
pub fn missing_fields(body: &serde_json::Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !body.contains_key(*field))
        .collect()
}

/// Validates a create/update body and converts it into an [`EmployeeRecord`].
///
/// Presence is checked before types so that a body missing keys always
/// reports every missing key. Unknown keys are ignored.
pub fn parse_employee_record(body: Value) -> Result<EmployeeRecord, ValidationError> {
    let Value::Object(map) = body else {
        return Err(ValidationError::NotAnObject);
    };

    let missing = missing_fields(&map);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| ValidationError::InvalidField(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "Fname": "Franklin",
            "Minit": "T",
            "Lname": "Wong",
            "Bdate": "1955-12-08",
            "Address": "638 Voss, Houston, TX",
            "Sex": "M",
            "Salary": 40000,
            "Super_ssn": null,
            "DL_id": "TX-4471"
        })
    }

    #[test]
    fn test_parse_full_body() {
        let record = parse_employee_record(full_body()).unwrap();

        assert_eq!(record.first_name, "Franklin");
        assert_eq!(record.middle_initial.as_deref(), Some("T"));
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(1955, 12, 8));
        assert_eq!(record.salary, Some(40000.0));
        assert_eq!(record.super_ssn, None);
        assert_eq!(record.dl_id.as_deref(), Some("TX-4471"));
    }

    #[test]
    fn test_null_values_count_as_present() {
        let body = json!({
            "Fname": "James",
            "Minit": null,
            "Lname": "Borg",
            "Bdate": null,
            "Address": null,
            "Sex": null,
            "Salary": null,
            "Super_ssn": null,
            "DL_id": null
        });

        let record = parse_employee_record(body).unwrap();
        assert_eq!(record, EmployeeRecord::new("James", "Borg"));
    }

    #[test]
    fn test_missing_fields_are_all_reported_in_order() {
        let mut body = full_body();
        let map = body.as_object_mut().unwrap();
        map.remove("Salary");
        map.remove("Minit");

        let err = parse_employee_record(body).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["Minit", "Salary"]));
    }

    #[test]
    fn test_empty_object_reports_every_field() {
        let err = parse_employee_record(json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(REQUIRED_FIELDS.to_vec()));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert_eq!(
            parse_employee_record(json!([1, 2, 3])).unwrap_err(),
            ValidationError::NotAnObject
        );
        assert_eq!(
            parse_employee_record(json!("Fname")).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn test_wrong_type_is_invalid_field() {
        let mut body = full_body();
        body["Salary"] = json!("a lot");

        let err = parse_employee_record(body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField(_)));
    }

    #[test]
    fn test_null_first_name_is_invalid_field() {
        let mut body = full_body();
        body["Fname"] = Value::Null;

        let err = parse_employee_record(body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField(_)));
    }

    #[test]
    fn test_bad_birth_date_is_invalid_field() {
        let mut body = full_body();
        body["Bdate"] = json!("yesterday");

        let err = parse_employee_record(body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField(_)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut body = full_body();
        body["Ssn"] = json!(999);
        body["Dno"] = json!(5);

        assert!(parse_employee_record(body).is_ok());
    }
}
