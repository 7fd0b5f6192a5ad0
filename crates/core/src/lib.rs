//! Functional core for the employees service.
//!
//! Pure data types and functions shared by the server and the client. Nothing
//! in this crate performs I/O.

pub mod employee;
pub mod storage;
