//! Persistence gateway: the `hospitals` table behind a trait, explicit SQL,
//! and database bootstrap.

use crate::error::AppError;
use crate::model::{Hospital, HospitalFields};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Key-based store for hospital records. The service holds this behind an
/// `Arc<dyn _>`, so tests can swap in a non-Postgres gateway.
#[async_trait]
pub trait HospitalStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Hospital>, AppError>;
    async fn find_all(&self) -> Result<Vec<Hospital>, AppError>;
    /// One window of rows in id order, plus the total row count.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Hospital>, u64), AppError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    /// Insert a validated record; the store assigns the id.
    async fn insert(&self, fields: &HospitalFields) -> Result<Hospital, AppError>;
    async fn update(&self, record: &Hospital) -> Result<Hospital, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Hospital>, AppError>;
    async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Hospital>, AppError>;
    /// Cheap liveness probe for the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}

const COLUMNS: &str = "id, hospital_name, hospital_address, hospital_city, hospital_state";

/// PostgreSQL-backed gateway over a connection pool.
pub struct PgHospitalStore {
    pool: PgPool,
}

impl PgHospitalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HospitalStore for PgHospitalStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Hospital>, AppError> {
        let sql = format!("SELECT {} FROM hospitals WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Hospital>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Hospital>, AppError> {
        let sql = format!("SELECT {} FROM hospitals ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Hospital>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Hospital>, u64), AppError> {
        let sql = format!(
            "SELECT {} FROM hospitals ORDER BY id LIMIT $1 OFFSET $2",
            COLUMNS
        );
        tracing::debug!(sql = %sql, limit, offset, "query");
        let rows = sqlx::query_as::<_, Hospital>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hospitals")
            .fetch_one(&self.pool)
            .await?;
        Ok((rows, total.0 as u64))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM hospitals WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists.0)
    }

    async fn insert(&self, fields: &HospitalFields) -> Result<Hospital, AppError> {
        let sql = format!(
            "INSERT INTO hospitals (hospital_name, hospital_address, hospital_city, hospital_state) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Hospital>(&sql)
            .bind(&fields.hospital_name)
            .bind(&fields.hospital_address)
            .bind(&fields.hospital_city)
            .bind(&fields.hospital_state)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;
        Ok(row)
    }

    async fn update(&self, record: &Hospital) -> Result<Hospital, AppError> {
        let sql = format!(
            "UPDATE hospitals SET hospital_name = $2, hospital_address = $3, \
             hospital_city = $4, hospital_state = $5 WHERE id = $1 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id = record.id, "query");
        let row = sqlx::query_as::<_, Hospital>(&sql)
            .bind(record.id)
            .bind(&record.hospital_name)
            .bind(&record.hospital_address)
            .bind(&record.hospital_city)
            .bind(&record.hospital_state)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(id, "delete hospital");
        sqlx::query("DELETE FROM hospitals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Hospital>, AppError> {
        let sql = format!(
            "SELECT {} FROM hospitals WHERE hospital_name = $1 ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Hospital>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Hospital>, AppError> {
        let sql = format!(
            "SELECT {} FROM hospitals WHERE hospital_name = $1 AND hospital_address = $2 ORDER BY id",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Hospital>(&sql)
            .bind(name)
            .bind(address)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Constraint violations from writes become client-recoverable errors
/// carrying the driver message; anything else stays a database error.
fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if !matches!(db.kind(), sqlx::error::ErrorKind::Other) {
            return AppError::BadRequest(format!("Data integrity violation: {}", db.message()));
        }
    }
    AppError::Db(e)
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Idempotent DDL for the hospitals table.
pub async fn ensure_hospitals_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS hospitals (
            id BIGSERIAL PRIMARY KEY,
            hospital_name TEXT NOT NULL,
            hospital_address TEXT NOT NULL,
            hospital_city TEXT NOT NULL,
            hospital_state TEXT NOT NULL
        )
        "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
