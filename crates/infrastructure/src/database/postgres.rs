//! PostgreSQL Repository Implementations
//!
//! Concrete implementations of the booking repository ports using SQLx.
//! Each repository owns its schema and creates it on startup.

use crate::config::DatabaseConfig;
use domain::booking::{Appointment, AppointmentRepository, Professional, ProfessionalRepository};
use domain::shared_kernel::{
    AppointmentId, AppointmentStatus, DomainError, DomainResult, ProfessionalId,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{Pool, Postgres, Row};
use tracing::info;

/// PostgreSQL connection pool manager
pub struct DatabasePool {
    pool: Pool<Postgres>,
}

impl DatabasePool {
    /// Create a new database pool from configuration
    pub async fn new(config: &DatabaseConfig) -> DomainResult<Self> {
        info!("Connecting to PostgreSQL database...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(std::time::Duration::from_millis(config.connection_timeout_ms))
            .connect(&config.url)
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to connect to database: {}", e))
            })?;

        info!("Successfully connected to PostgreSQL database");
        Ok(Self { pool })
    }

    /// Get the underlying pool reference
    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// Execute a health check on the database
    pub async fn health_check(&self) -> DomainResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::Infrastructure(format!("Database health check failed: {}", e))
            })?;

        Ok(())
    }
}

/// Convert AppointmentStatus to its database string representation
fn status_to_db(status: &AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "pending",
        AppointmentStatus::Confirmed => "confirmed",
        AppointmentStatus::Cancelled => "cancelled",
    }
}

/// Convert a database string to AppointmentStatus
fn db_to_status(status: &str) -> AppointmentStatus {
    match status {
        "pending" => AppointmentStatus::Pending,
        "confirmed" => AppointmentStatus::Confirmed,
        "cancelled" => AppointmentStatus::Cancelled,
        _ => AppointmentStatus::Pending,
    }
}

/// PostgreSQL implementation of AppointmentRepository
///
/// The embedded professional snapshot is stored as JSONB next to an
/// extracted professional_id column used for the scoped listing. There is
/// no foreign key to the professionals table: appointments may reference
/// professionals that were never registered.
pub struct PostgresAppointmentRepository {
    pool: Pool<Postgres>,
}

impl PostgresAppointmentRepository {
    /// Create a new PostgreSQL appointment repository
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the appointments table and its index if they do not exist
    pub async fn init_schema(&self) -> DomainResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id TEXT PRIMARY KEY,
                client_name TEXT NOT NULL,
                date DATE NOT NULL,
                time TIME NOT NULL,
                status TEXT NOT NULL,
                professional_id TEXT NOT NULL,
                professional JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create appointments table: {}", e))
        })?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_appointments_professional_id \
             ON appointments (professional_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create appointments index: {}", e))
        })?;

        Ok(())
    }

    fn row_to_appointment(row: &PgRow) -> DomainResult<Appointment> {
        let id: String = row.get("id");
        let client_name: String = row.get("client_name");
        let date: chrono::NaiveDate = row.get("date");
        let time: chrono::NaiveTime = row.get("time");
        let status: String = row.get("status");
        let professional: serde_json::Value = row.get("professional");

        let professional: Professional = serde_json::from_value(professional).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to deserialize professional: {}", e))
        })?;

        Ok(Appointment {
            id: AppointmentId(id),
            client_name,
            date,
            time,
            status: db_to_status(&status),
            professional,
        })
    }
}

#[async_trait::async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn save(&self, appointment: &Appointment) -> DomainResult<()> {
        let professional = serde_json::to_value(&appointment.professional).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to serialize professional: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO appointments (id, client_name, date, time, status, professional_id, professional)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                client_name = EXCLUDED.client_name,
                date = EXCLUDED.date,
                time = EXCLUDED.time,
                status = EXCLUDED.status,
                professional_id = EXCLUDED.professional_id,
                professional = EXCLUDED.professional
            "#,
        )
        .bind(&appointment.id.0)
        .bind(&appointment.client_name)
        .bind(appointment.date)
        .bind(appointment.time)
        .bind(status_to_db(&appointment.status))
        .bind(&appointment.professional.id.0)
        .bind(professional)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to save appointment: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AppointmentId) -> DomainResult<Option<Appointment>> {
        let row = sqlx::query(
            r#"
            SELECT id, client_name, date, time, status, professional
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to find appointment: {}", e)))?;

        match row {
            Some(row) => Ok(Some(Self::row_to_appointment(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_professional(
        &self,
        professional_id: &ProfessionalId,
    ) -> DomainResult<Vec<Appointment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_name, date, time, status, professional
            FROM appointments
            WHERE professional_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(&professional_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to list appointments: {}", e)))?;

        let mut appointments = Vec::with_capacity(rows.len());
        for row in rows {
            appointments.push(Self::row_to_appointment(&row)?);
        }

        Ok(appointments)
    }
}

/// PostgreSQL implementation of ProfessionalRepository
pub struct PostgresProfessionalRepository {
    pool: Pool<Postgres>,
}

impl PostgresProfessionalRepository {
    /// Create a new PostgreSQL professional repository
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the professionals table if it does not exist
    pub async fn init_schema(&self) -> DomainResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS professionals (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create professionals table: {}", e))
        })?;

        Ok(())
    }

    fn row_to_professional(row: &PgRow) -> Professional {
        Professional {
            id: ProfessionalId(row.get("id")),
            name: row.get("name"),
            email: row.get("email"),
            password: row.get("password"),
        }
    }
}

#[async_trait::async_trait]
impl ProfessionalRepository for PostgresProfessionalRepository {
    async fn save(&self, professional: &Professional) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO professionals (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                password = EXCLUDED.password
            "#,
        )
        .bind(&professional.id.0)
        .bind(&professional.name)
        .bind(&professional.email)
        .bind(&professional.password)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to save professional: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfessionalId) -> DomainResult<Option<Professional>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM professionals
            WHERE id = $1
            "#,
        )
        .bind(&id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Failed to find professional: {}", e)))?;

        Ok(row.map(|row| Self::row_to_professional(&row)))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Professional>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM professionals
            WHERE email = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Infrastructure(format!("Failed to find professional by email: {}", e))
        })?;

        Ok(row.map(|row| Self::row_to_professional(&row)))
    }
}
