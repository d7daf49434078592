//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the canonical `students` table.
//! - Translate between in-memory records and table rows.
//!
//! # Invariants
//! - Every operation acquires one connection from the provider, performs a
//!   single statement, and releases the connection by drop on every exit
//!   path.
//! - Uniqueness of `id` is ultimately guaranteed by the primary-key
//!   constraint; the `exists` pre-check is advisory and a lost race maps to
//!   [`RepoError::DuplicateId`], never a silent double write.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{ConnectionProvider, DbError};
use crate::model::student::{Student, StudentValidationError};
use log::error;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT id, name, age, address FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// The record failed field validation before reaching the store.
    Validation(StudentValidationError),
    /// A row with the same id already exists (primary-key violation).
    DuplicateId(String),
    /// The targeted id has no row.
    NotFound(String),
    /// Connection or statement failure underneath the operation.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "student id already exists: {id}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<StudentValidationError> for RepoError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract consumed by the controller/service layer.
pub trait StudentRepository {
    /// Idempotently prepares the backing table. Startup precondition: the
    /// caller treats failure as fatal.
    fn ensure_schema(&self) -> RepoResult<()>;
    /// Whether a record with `id` is currently stored. Implemented via
    /// `find_by_id`, so cost and correctness track it exactly.
    fn exists(&self, id: &str) -> RepoResult<bool>;
    fn insert(&self, student: &Student) -> RepoResult<()>;
    /// Overwrites name, age and address of the row matching the record's
    /// id in one statement; the id itself is never rewritten.
    fn update(&self, student: &Student) -> RepoResult<()>;
    fn delete_by_id(&self, id: &str) -> RepoResult<()>;
    /// `Ok(None)` means no such row; persistence failures surface as
    /// `Err(RepoError::Db(..))` and stay distinguishable from absence.
    fn find_by_id(&self, id: &str) -> RepoResult<Option<Student>>;
    /// All records ordered by ascending id; empty store yields an empty vec.
    fn list_all(&self) -> RepoResult<Vec<Student>>;
}

/// SQLite-backed student repository with connection-per-call acquisition.
pub struct SqliteStudentRepository<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> SqliteStudentRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn connection(&self, op: &str) -> RepoResult<Connection> {
        self.provider.connection().map_err(|err| {
            error!("event={op} module=repo status=error stage=connect error={err}");
            RepoError::Db(err)
        })
    }

    fn db_error(&self, op: &str, err: rusqlite::Error) -> RepoError {
        error!("event={op} module=repo status=error stage=statement error={err}");
        RepoError::Db(DbError::Sqlite(err))
    }
}

impl<P: ConnectionProvider> StudentRepository for SqliteStudentRepository<P> {
    fn ensure_schema(&self) -> RepoResult<()> {
        // Acquiring a bootstrapped connection applies pending migrations,
        // which create the students table on a fresh store.
        self.connection("schema_ensure").map(drop)
    }

    fn exists(&self, id: &str) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn insert(&self, student: &Student) -> RepoResult<()> {
        student.validate()?;

        let conn = self.connection("student_insert")?;
        match conn.execute(
            "INSERT INTO students (id, name, age, address) VALUES (?1, ?2, ?3, ?4);",
            params![student.id, student.name, student.age, student.address],
        ) {
            Ok(_) => Ok(()),
            Err(err) if is_constraint_violation(&err) => {
                // The exists/insert sequence used by callers is not atomic;
                // the primary key is the real uniqueness guarantee.
                Err(RepoError::DuplicateId(student.id.clone()))
            }
            Err(err) => Err(self.db_error("student_insert", err)),
        }
    }

    fn update(&self, student: &Student) -> RepoResult<()> {
        student.validate()?;

        let conn = self.connection("student_update")?;
        let changed = conn
            .execute(
                "UPDATE students SET name = ?1, age = ?2, address = ?3 WHERE id = ?4;",
                params![student.name, student.age, student.address, student.id],
            )
            .map_err(|err| self.db_error("student_update", err))?;

        if changed == 0 {
            return Err(RepoError::NotFound(student.id.clone()));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        let conn = self.connection("student_delete")?;
        let changed = conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])
            .map_err(|err| self.db_error("student_delete", err))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Student>> {
        let conn = self.connection("student_find")?;
        let result = (|| -> RepoResult<Option<Student>> {
            let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            match rows.next()? {
                Some(row) => Ok(Some(parse_student_row(row)?)),
                None => Ok(None),
            }
        })();

        match result {
            Err(RepoError::Db(DbError::Sqlite(err))) => Err(self.db_error("student_find", err)),
            other => other,
        }
    }

    fn list_all(&self) -> RepoResult<Vec<Student>> {
        let conn = self.connection("student_list")?;
        let result = (|| -> RepoResult<Vec<Student>> {
            let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut students = Vec::new();
            while let Some(row) = rows.next()? {
                students.push(parse_student_row(row)?);
            }
            Ok(students)
        })();

        match result {
            Err(RepoError::Db(DbError::Sqlite(err))) => Err(self.db_error("student_list", err)),
            other => other,
        }
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let student = Student {
        id: row.get("id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        address: row.get("address")?,
    };
    // Rows written around the validation layer (or by older binaries) must
    // not leak into callers as silently-accepted records.
    student.validate()?;
    Ok(student)
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
    )
}
