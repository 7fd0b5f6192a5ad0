//! Employee CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use employees_core::employee::{EmployeeRecord, Ssn};

use crate::client::employees::SearchEmployeesQuery;

/// Employee management commands.
#[derive(Debug, Parser)]
pub struct EmployeesCommand {
    #[command(subcommand)]
    pub action: EmployeesAction,
}

/// The nine employee fields. Omitted optional fields are sent as `null`.
#[derive(Debug, Clone, Args)]
pub struct EmployeeFields {
    /// First name.
    #[arg(long)]
    pub fname: String,
    /// Middle initial.
    #[arg(long)]
    pub minit: Option<String>,
    /// Last name.
    #[arg(long)]
    pub lname: String,
    /// Birth date (YYYY-MM-DD).
    #[arg(long)]
    pub bdate: Option<NaiveDate>,
    /// Address.
    #[arg(long)]
    pub address: Option<String>,
    /// Sex.
    #[arg(long)]
    pub sex: Option<String>,
    /// Salary.
    #[arg(long, value_parser = parse_salary)]
    pub salary: Option<f64>,
    /// Supervisor SSN.
    #[arg(long)]
    pub super_ssn: Option<Ssn>,
    /// Driver's license ID.
    #[arg(long)]
    pub dl_id: Option<String>,
}

/// Salary must be a finite number; JSON has no NaN or infinity.
fn parse_salary(s: &str) -> Result<f64, String> {
    let salary: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if salary.is_finite() {
        Ok(salary)
    } else {
        Err(format!("salary must be a finite number, got {s}"))
    }
}

impl From<EmployeeFields> for EmployeeRecord {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            first_name: fields.fname,
            middle_initial: fields.minit,
            last_name: fields.lname,
            birth_date: fields.bdate,
            address: fields.address,
            sex: fields.sex,
            salary: fields.salary,
            super_ssn: fields.super_ssn,
            dl_id: fields.dl_id,
        }
    }
}

/// Search criteria flags.
#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// First name contains.
    #[arg(long)]
    pub fname: Option<String>,
    /// Last name contains.
    #[arg(long)]
    pub lname: Option<String>,
    /// Address contains.
    #[arg(long)]
    pub address: Option<String>,
    /// Sex equals.
    #[arg(long)]
    pub sex: Option<String>,
    /// Driver's license ID equals.
    #[arg(long)]
    pub dl_id: Option<String>,
    /// Supervisor SSN equals.
    #[arg(long)]
    pub super_ssn: Option<Ssn>,
}

impl From<SearchArgs> for SearchEmployeesQuery {
    fn from(args: SearchArgs) -> Self {
        Self {
            first_name: args.fname,
            last_name: args.lname,
            address: args.address,
            sex: args.sex,
            dl_id: args.dl_id,
            super_ssn: args.super_ssn,
        }
    }
}

/// Available employee actions.
#[derive(Debug, Subcommand)]
pub enum EmployeesAction {
    /// List all employees.
    List,
    /// Get employee by SSN.
    Get {
        /// Employee SSN.
        ssn: Ssn,
    },
    /// Create a new employee.
    Create(EmployeeFields),
    /// Replace every field of an employee.
    Update {
        /// Employee SSN.
        ssn: Ssn,
        #[command(flatten)]
        fields: EmployeeFields,
    },
    /// Delete employee by SSN.
    Delete {
        /// Employee SSN.
        ssn: Ssn,
    },
    /// Search employees.
    Search(SearchArgs),
}
