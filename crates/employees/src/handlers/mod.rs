pub mod employees;
pub mod error;
pub mod health;
pub mod root;

pub use error::{AppError, RequestTimeout};
