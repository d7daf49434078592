//! Repository layer contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the CRUD contract the controller consumes.
//! - Isolate SQL details from service/menu orchestration.
//!
//! # Invariants
//! - Write paths enforce `Student::validate()` before SQL mutations.
//! - Persistence errors are logged once at this boundary and surfaced as
//!   typed errors; "not found" is a semantic result, not a transport error.

pub mod student_repo;
