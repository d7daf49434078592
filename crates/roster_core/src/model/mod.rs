//! Domain model for the student catalog.
//!
//! # Responsibility
//! - Define the canonical student record persisted by the repository layer.
//! - Provide per-field validation predicates shared by all input paths.
//!
//! # Invariants
//! - A `Student` handed to persistence always has all four fields populated.
//! - `id` is the only identity a record carries; it never changes in place.

pub mod student;
pub mod validate;
