//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for controllers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or uniqueness
//!   enforcement.
//! - The service stays storage-agnostic; it is generic over the repository
//!   contract.

use crate::model::student::Student;
use crate::repo::student_repo::{RepoResult, StudentRepository};

/// Use-case wrapper over a student repository, injected explicitly at
/// startup rather than resolved through any global state.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Prepares the backing table. Callers treat failure as fatal startup.
    pub fn ensure_schema(&self) -> RepoResult<()> {
        self.repo.ensure_schema()
    }

    /// Whether a record with `id` is currently stored.
    pub fn student_exists(&self, id: &str) -> RepoResult<bool> {
        self.repo.exists(id)
    }

    /// Persists a new record. A duplicate id surfaces as
    /// [`crate::RepoError::DuplicateId`] even when the caller's existence
    /// pre-check passed, since the store is the final arbiter.
    pub fn register_student(&self, student: &Student) -> RepoResult<()> {
        self.repo.insert(student)
    }

    /// Overwrites the non-key fields of an existing record.
    pub fn update_student(&self, student: &Student) -> RepoResult<()> {
        self.repo.update(student)
    }

    /// Removes the record with `id`; removing it twice yields not-found on
    /// the second call.
    pub fn remove_student(&self, id: &str) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }

    /// Fetches one record, `Ok(None)` when absent.
    pub fn get_student(&self, id: &str) -> RepoResult<Option<Student>> {
        self.repo.find_by_id(id)
    }

    /// All records ordered by ascending id.
    pub fn list_students(&self) -> RepoResult<Vec<Student>> {
        self.repo.list_all()
    }
}
