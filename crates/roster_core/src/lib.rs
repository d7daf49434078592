//! Core domain logic for the roster student catalog.
//! This crate is the single source of truth for record constraints and
//! persistence contracts.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{Config, ConfigError, LoggingConfig, StoreConfig};
pub use db::{ConnectionProvider, DbError, DbResult, SqliteFileProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Student, StudentValidationError};
pub use model::validate::{is_valid_address, is_valid_age, is_valid_id, is_valid_name};
pub use repo::student_repo::{
    RepoError, RepoResult, SqliteStudentRepository, StudentRepository,
};
pub use service::student_service::StudentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
