//! State repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist and load resources, projects (with allocations) and risks.
//! - Replace the whole state atomically from a snapshot.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Lists preserve insertion order; allocations keep their order per project.
//! - Allocation resource references and risk project references are stored
//!   even when they do not resolve.

use crate::db::DbError;
use crate::model::project::{Allocation, Project, ProjectId, ProjectStatus};
use crate::model::resource::{Resource, ResourceId};
use crate::model::risk::{Risk, RiskStatus};
use crate::model::state::AppState;
use crate::model::validation::ValidationError;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for state persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    /// A record with the same primary key already exists.
    Duplicate { table: &'static str, id: String },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Duplicate { table, id } => write!(f, "duplicate id `{id}` in {table}"),
            Self::InvalidData(message) => write!(f, "invalid persisted state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
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

/// Repository interface for dashboard state.
pub trait StateRepository {
    fn create_resource(&self, resource: &Resource) -> RepoResult<ResourceId>;
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId>;
    fn create_risk(&self, risk: &Risk) -> RepoResult<String>;
    fn list_resources(&self) -> RepoResult<Vec<Resource>>;
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn list_risks(&self) -> RepoResult<Vec<Risk>>;
    /// Replaces all stored state with `state`; nothing changes on error.
    fn replace_state(&self, state: &AppState) -> RepoResult<()>;

    /// Loads the full snapshot.
    fn load_state(&self) -> RepoResult<AppState> {
        Ok(AppState {
            resources: self.list_resources()?,
            projects: self.list_projects()?,
            risks: self.list_risks()?,
        })
    }
}

/// SQLite-backed state repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn create_resource(&self, resource: &Resource) -> RepoResult<ResourceId> {
        resource.validate()?;
        insert_resource(self.conn, resource)?;
        Ok(resource.id.clone())
    }

    fn create_project(&self, project: &Project) -> RepoResult<ProjectId> {
        project.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        insert_project(&tx, project)?;
        tx.commit()?;
        Ok(project.id.clone())
    }

    fn create_risk(&self, risk: &Risk) -> RepoResult<String> {
        risk.validate()?;
        insert_risk(self.conn, risk)?;
        Ok(risk.id.clone())
    }

    fn list_resources(&self) -> RepoResult<Vec<Resource>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, role, capacity, avatar FROM resources ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut resources = Vec::new();
        while let Some(row) = rows.next()? {
            resources.push(parse_resource_row(row)?);
        }
        Ok(resources)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, status, start_date, end_date FROM projects ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        let mut alloc_stmt = self.conn.prepare(
            "SELECT resource_id, hours FROM allocations WHERE project_id = ?1 ORDER BY seq ASC;",
        )?;
        for project in &mut projects {
            let mut alloc_rows = alloc_stmt.query([project.id.as_str()])?;
            while let Some(row) = alloc_rows.next()? {
                project.allocations.push(Allocation {
                    resource_id: row.get("resource_id")?,
                    hours: row.get("hours")?,
                });
            }
        }

        Ok(projects)
    }

    fn list_risks(&self) -> RepoResult<Vec<Risk>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, project_id, probability, impact, status
             FROM risks ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut risks = Vec::new();
        while let Some(row) = rows.next()? {
            risks.push(parse_risk_row(row)?);
        }
        Ok(risks)
    }

    fn replace_state(&self, state: &AppState) -> RepoResult<()> {
        state.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(
            "DELETE FROM risks;
             DELETE FROM allocations;
             DELETE FROM projects;
             DELETE FROM resources;",
        )?;
        for resource in &state.resources {
            insert_resource(&tx, resource)?;
        }
        for project in &state.projects {
            insert_project(&tx, project)?;
        }
        for risk in &state.risks {
            insert_risk(&tx, risk)?;
        }
        tx.commit()?;

        Ok(())
    }
}

fn insert_resource(conn: &Connection, resource: &Resource) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO resources (id, name, role, capacity, avatar) VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            resource.id.as_str(),
            resource.name.as_str(),
            resource.role.as_str(),
            resource.capacity,
            resource.avatar.as_str(),
        ],
    )
    .map_err(|err| map_duplicate(err, "resources", &resource.id))?;
    Ok(())
}

fn insert_project(conn: &Connection, project: &Project) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO projects (id, name, status, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            project.id.as_str(),
            project.name.as_str(),
            project.status.as_str(),
            project.start_date,
            project.end_date,
        ],
    )
    .map_err(|err| map_duplicate(err, "projects", &project.id))?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO allocations (project_id, seq, resource_id, hours) VALUES (?1, ?2, ?3, ?4);",
    )?;
    for (seq, allocation) in project.allocations.iter().enumerate() {
        let seq = i64::try_from(seq)
            .map_err(|_| RepoError::InvalidData(format!("too many allocations in `{}`", project.id)))?;
        stmt.execute(params![
            project.id.as_str(),
            seq,
            allocation.resource_id.as_str(),
            allocation.hours,
        ])?;
    }
    Ok(())
}

fn insert_risk(conn: &Connection, risk: &Risk) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO risks (id, title, project_id, probability, impact, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![
            risk.id.as_str(),
            risk.title.as_str(),
            risk.project_id.as_deref(),
            risk.probability,
            risk.impact,
            risk.status.as_str(),
        ],
    )
    .map_err(|err| map_duplicate(err, "risks", &risk.id))?;
    Ok(())
}

fn map_duplicate(err: rusqlite::Error, table: &'static str, id: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::ConstraintViolation
            && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        {
            return RepoError::Duplicate {
                table,
                id: id.to_string(),
            };
        }
    }
    err.into()
}

fn parse_resource_row(row: &Row<'_>) -> RepoResult<Resource> {
    let resource = Resource {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        capacity: row.get("capacity")?,
        avatar: row.get("avatar")?,
    };
    resource.validate()?;
    Ok(resource)
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let status_text: String = row.get("status")?;
    let status = ProjectStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid project status `{status_text}` in projects.status"))
    })?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        status,
        allocations: Vec::new(),
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    })
}

fn parse_risk_row(row: &Row<'_>) -> RepoResult<Risk> {
    let status_text: String = row.get("status")?;
    let status = RiskStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid risk status `{status_text}` in risks.status"))
    })?;

    let risk = Risk {
        id: row.get("id")?,
        title: row.get("title")?,
        project_id: row.get("project_id")?,
        probability: scale_value(row, "probability")?,
        impact: scale_value(row, "impact")?,
        status,
    };
    risk.validate()?;
    Ok(risk)
}

fn scale_value(row: &Row<'_>, column: &str) -> RepoResult<u8> {
    let value: i64 = row.get(column)?;
    u8::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid {column} value `{value}` in risks.{column}")))
}
