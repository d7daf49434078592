//! Student record definition and whole-record validation.
//!
//! # Responsibility
//! - Hold the four persisted fields of a catalog entry.
//! - Report the first field constraint a candidate record violates.
//!
//! # Invariants
//! - `id` is the primary key; repository operations never rewrite it.
//! - Write paths must call [`Student::validate`] before any SQL mutation.

use crate::model::validate::{
    is_valid_address, is_valid_age, is_valid_id, is_valid_name, AGE_RANGE, MAX_ADDRESS_LEN,
    MAX_ID_LEN, MAX_NAME_LEN,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One row of the student catalog.
///
/// Plain data holder: construction and field access only. Identity is the
/// `id` field; no custom equality contract beyond the derived one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    pub name: String,
    pub age: i32,
    pub address: String,
}

/// First constraint violated by a candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    InvalidId,
    InvalidName,
    InvalidAge(i32),
    InvalidAddress,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId => write!(
                f,
                "id must be non-blank and at most {MAX_ID_LEN} characters"
            ),
            Self::InvalidName => write!(
                f,
                "name must be non-blank and at most {MAX_NAME_LEN} characters"
            ),
            Self::InvalidAge(age) => write!(
                f,
                "age {age} is outside {}..={}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
            Self::InvalidAddress => write!(
                f,
                "address must be non-blank and at most {MAX_ADDRESS_LEN} characters"
            ),
        }
    }
}

impl Error for StudentValidationError {}

impl Student {
    /// Creates a record from already-collected field values.
    ///
    /// Does not validate; callers that accept external input should follow
    /// up with [`Student::validate`] or the per-field predicates.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            address: address.into(),
        }
    }

    /// Checks all four fields, returning the first violation found.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if !is_valid_id(&self.id) {
            return Err(StudentValidationError::InvalidId);
        }
        if !is_valid_name(&self.name) {
            return Err(StudentValidationError::InvalidName);
        }
        if !is_valid_age(self.age) {
            return Err(StudentValidationError::InvalidAge(self.age));
        }
        if !is_valid_address(&self.address) {
            return Err(StudentValidationError::InvalidAddress);
        }
        Ok(())
    }
}
