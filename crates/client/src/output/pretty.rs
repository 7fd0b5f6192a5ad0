//! Pretty output formatting.

use employees_core::employee::{Employee, MutationResponse};

/// Format an employee for display.
pub fn format_employee(employee: &Employee) -> String {
    let record = &employee.record;
    let mut output = format!("{}\n  SSN: {}", employee.full_name(), employee.ssn);
    if let Some(bdate) = &record.birth_date {
        output.push_str(&format!("\n  Born: {}", bdate));
    }
    if let Some(sex) = &record.sex {
        output.push_str(&format!("\n  Sex: {}", sex));
    }
    if let Some(address) = &record.address {
        output.push_str(&format!("\n  Address: {}", address));
    }
    if let Some(salary) = record.salary {
        output.push_str(&format!("\n  Salary: {:.2}", salary));
    }
    if let Some(super_ssn) = record.super_ssn {
        output.push_str(&format!("\n  Supervisor: {}", super_ssn));
    }
    if let Some(dl_id) = &record.dl_id {
        output.push_str(&format!("\n  License: {}", dl_id));
    }
    output
}

/// Format employees for display.
pub fn format_employees(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.".to_string();
    }
    let mut output = format!("EMPLOYEES ({})\n", employees.len());
    output.push_str(&"-".repeat(40));
    for employee in employees {
        output.push_str(&format!("\n{}", format_employee(employee)));
        output.push('\n');
    }
    output
}

/// Format a create/update/delete acknowledgement.
pub fn format_mutation(response: &MutationResponse) -> String {
    match response.ssn {
        Some(ssn) => format!(
            "{} (SSN {}, {} row(s) affected)",
            response.message, ssn, response.affected_rows
        ),
        None => format!(
            "{} ({} row(s) affected)",
            response.message, response.affected_rows
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employees_core::employee::EmployeeRecord;

    #[test]
    fn test_format_employee_skips_missing_fields() {
        let employee = Employee::new(
            4,
            EmployeeRecord::new("Jennifer", "Wallace")
                .with_middle_initial("S")
                .with_salary(43000.0),
        );

        assert_eq!(
            format_employee(&employee),
            "Jennifer S. Wallace\n  SSN: 4\n  Salary: 43000.00"
        );
    }

    #[test]
    fn test_format_employees_empty() {
        assert_eq!(format_employees(&[]), "No employees found.");
    }

    #[test]
    fn test_format_mutation() {
        assert_eq!(
            format_mutation(&MutationResponse::added(1, 9)),
            "New Employee Added! (SSN 9, 1 row(s) affected)"
        );
        assert_eq!(
            format_mutation(&MutationResponse::deleted(1)),
            "Employee Deleted! (1 row(s) affected)"
        );
    }
}
