mod error;
mod responses;
mod search;
mod types;
mod validation;

pub use error::{SearchError, ValidationError};
pub use responses::{
    ErrorResponse, MutationResponse, EMPLOYEE_ADDED, EMPLOYEE_DELETED, EMPLOYEE_NOT_FOUND,
    EMPLOYEE_UPDATED,
};
pub use search::{
    escape_like, MatchKind, SearchCondition, SearchField, SearchFilter, SearchValue,
};
pub use types::{Employee, EmployeeRecord, Ssn};
pub use validation::{missing_fields, parse_employee_record, REQUIRED_FIELDS};
