//! employees_client - CLI client for the employees API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::EmployeesClient;
pub use error::{ClientError, Result};
