//! Connection-provider seam between the repository and the store.
//!
//! # Responsibility
//! - Yield one ready-to-use connection per repository operation.
//! - Surface open/bootstrap failures as errors, never as a dead handle.
//!
//! # Invariants
//! - Connections are independent; nothing is cached between calls.
//! - A yielded connection has schema migrations fully applied.

use super::{open_db, DbResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Supplies a live store connection per call.
///
/// The repository acquires through this trait and releases by drop, so the
/// connection is returned on every exit path including errors.
pub trait ConnectionProvider {
    fn connection(&self) -> DbResult<Connection>;
}

/// Provider backed by a SQLite database file on disk.
#[derive(Debug, Clone)]
pub struct SqliteFileProvider {
    path: PathBuf,
}

impl SqliteFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionProvider for SqliteFileProvider {
    fn connection(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}
