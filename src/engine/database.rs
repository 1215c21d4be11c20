use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use crate::engine::convert::CONVERSION_SQL;
use crate::engine::service::{ConversionCall, ConversionService, Reading, ServiceError};

/// Name of the routine installed by default and looked up when none is configured.
pub const DEFAULT_PROCEDURE: &str = "Convert_Temperature";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS stored_procedures (
     name TEXT PRIMARY KEY COLLATE NOCASE,
     body TEXT NOT NULL
 );";

/// Conversion service backed by a routine stored in an SQLite database.
///
/// SQLite has no stored procedures, so the routine lives in the
/// `stored_procedures` table as a scalar SQL expression over the named
/// parameters `:temperature` and `:unit`.
#[derive(Debug, Clone)]
pub struct SqliteConversionService {
    path: PathBuf,
    procedure: String,
}

impl SqliteConversionService {
    pub fn new(path: impl Into<PathBuf>, procedure: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            procedure: procedure.into(),
        }
    }
}

impl ConversionService for SqliteConversionService {
    fn open(&self) -> Result<Box<dyn ConversionCall + '_>, ServiceError> {
        // No SQLITE_OPEN_CREATE: a missing database is a connection failure.
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ServiceError::Connect(e.to_string()))?;

        log::debug!("Connected to {}", self.path.display());
        Ok(Box::new(SqliteCall {
            conn,
            path: &self.path,
            procedure: &self.procedure,
        }))
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.procedure)
    }
}

struct SqliteCall<'a> {
    conn: Connection,
    path: &'a Path,
    procedure: &'a str,
}

impl SqliteCall<'_> {
    fn lookup_body(&self) -> Result<String, ServiceError> {
        self.conn
            .query_row(
                "SELECT body FROM stored_procedures WHERE name = ?1",
                params![self.procedure],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(execution)?
            .ok_or_else(|| ServiceError::ProcedureNotFound(self.procedure.to_string()))
    }
}

impl ConversionCall for SqliteCall<'_> {
    fn execute(&mut self, reading: &Reading) -> Result<f64, ServiceError> {
        let body = self.lookup_body()?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {body}"))
            .map_err(execution)?;

        // The stored body may use either parameter or neither.
        if let Some(idx) = stmt.parameter_index(":temperature").map_err(execution)? {
            stmt.raw_bind_parameter(idx, reading.value)
                .map_err(execution)?;
        }
        if let Some(idx) = stmt.parameter_index(":unit").map_err(execution)? {
            stmt.raw_bind_parameter(idx, reading.unit.code())
                .map_err(execution)?;
        }

        let mut rows = stmt.raw_query();
        let value = match rows.next().map_err(execution)? {
            Some(row) => row.get::<_, Option<f64>>(0).map_err(execution)?,
            None => None,
        };

        log::debug!(
            "{}({}, {}) -> {:?}",
            self.procedure,
            reading.value,
            reading.unit,
            value
        );
        value.ok_or_else(|| ServiceError::NoResult(self.procedure.to_string()))
    }
}

impl Drop for SqliteCall<'_> {
    fn drop(&mut self) {
        log::debug!("Released connection to {}", self.path.display());
    }
}

fn execution(e: rusqlite::Error) -> ServiceError {
    ServiceError::Execution(e.to_string())
}

/// Creates the database if needed and stores the conversion routine under `name`.
pub fn install_procedure(path: &Path, name: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    conn.execute_batch(SCHEMA)
        .context("Failed to create the stored_procedures table")?;
    conn.execute(
        "INSERT OR REPLACE INTO stored_procedures (name, body) VALUES (?1, ?2)",
        params![name, CONVERSION_SQL],
    )
    .with_context(|| format!("Failed to store procedure '{name}'"))?;

    log::info!("Installed procedure {} into {}", name, path.display());
    Ok(())
}
