use crate::models::{MatchNotification, NannyApplication, ParentRequest};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Connection pool settings
#[derive(Debug, Clone, Copy)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

impl PoolOptions {
    fn builder(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .test_before_acquire(true)
    }
}

const PARENT_REQUEST_COLUMNS: &str = r#"
    id, nom, telephone, adresse, type_service, horaire_debut, horaire_fin,
    nombre_enfants, forfait, commentaires, statut, date_creation
"#;

const NANNY_APPLICATION_COLUMNS: &str = r#"
    id, nom, telephone, adresse, type_poste, experience, disponibilites,
    documents, statut, date_creation
"#;

/// PostgreSQL client over the tables of the childcare application
///
/// Requests and applications are owned by the application's forms; this
/// client only reads them. The one write is the "new match" notification.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Connect and verify the database is reachable
    pub async fn new(database_url: &str, options: PoolOptions) -> Result<Self, PostgresError> {
        let pool = options.builder().connect(database_url).await?;
        Ok(Self::from_pool(pool))
    }

    /// Build the pool without opening a connection; connections are made on
    /// first use
    pub fn connect_lazy(database_url: &str, options: PoolOptions) -> Result<Self, PostgresError> {
        let pool = options.builder().connect_lazy(database_url)?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        let defaults = PoolOptions::default();
        let options = PoolOptions {
            max_connections: max_connections.unwrap_or(defaults.max_connections),
            min_connections: min_connections.unwrap_or(defaults.min_connections),
            acquire_timeout: acquire_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
            idle_timeout: idle_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.idle_timeout),
        };

        tracing::info!(
            "Connecting to PostgreSQL (max: {}, min: {} connections)",
            options.max_connections,
            options.min_connections
        );

        Self::new(url, options).await
    }

    /// All parent requests, every status included
    pub async fn get_parent_requests(&self) -> Result<Vec<ParentRequest>, PostgresError> {
        let query = format!(
            "SELECT {} FROM parent_requests ORDER BY date_creation ASC, id ASC",
            PARENT_REQUEST_COLUMNS
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let requests: Vec<ParentRequest> = rows.iter().map(parent_request_from_row).collect();

        tracing::debug!("Loaded {} parent requests", requests.len());

        Ok(requests)
    }

    pub async fn get_parent_request(&self, id: &str) -> Result<ParentRequest, PostgresError> {
        let query = format!(
            "SELECT {} FROM parent_requests WHERE id = $1",
            PARENT_REQUEST_COLUMNS
        );

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| parent_request_from_row(&row))
            .ok_or_else(|| PostgresError::NotFound(format!("Parent request {}", id)))
    }

    /// All nanny applications, every status included
    pub async fn get_nanny_applications(&self) -> Result<Vec<NannyApplication>, PostgresError> {
        let query = format!(
            "SELECT {} FROM nanny_applications ORDER BY date_creation ASC, id ASC",
            NANNY_APPLICATION_COLUMNS
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let applications: Vec<NannyApplication> =
            rows.iter().map(nanny_application_from_row).collect();

        tracing::debug!("Loaded {} nanny applications", applications.len());

        Ok(applications)
    }

    pub async fn get_nanny_application(&self, id: &str) -> Result<NannyApplication, PostgresError> {
        let query = format!(
            "SELECT {} FROM nanny_applications WHERE id = $1",
            NANNY_APPLICATION_COLUMNS
        );

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(|row| nanny_application_from_row(&row))
            .ok_or_else(|| PostgresError::NotFound(format!("Nanny application {}", id)))
    }

    /// Store a "new match" notification for the admin dashboard
    ///
    /// Returns the id of the stored notification.
    pub async fn create_notification(
        &self,
        notification: &MatchNotification,
    ) -> Result<String, PostgresError> {
        let query = r#"
            INSERT INTO notifications (id, type, titre, message, lue, related_id, date_creation)
            VALUES ($1, $2, $3, $4, FALSE, $5, NOW())
        "#;

        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(query)
            .bind(&id)
            .bind(&notification.kind)
            .bind(&notification.titre)
            .bind(&notification.message)
            .bind(&notification.related_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Stored notification {} for {} (score {})",
            id,
            notification.related_id,
            notification.score
        );

        Ok(id)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn parent_request_from_row(row: &PgRow) -> ParentRequest {
    ParentRequest {
        id: row.get("id"),
        nom: row.get("nom"),
        telephone: row.get("telephone"),
        adresse: row.get("adresse"),
        type_service: row.get("type_service"),
        horaire_debut: row.get("horaire_debut"),
        horaire_fin: row.get("horaire_fin"),
        nombre_enfants: row.get("nombre_enfants"),
        forfait: row.get("forfait"),
        commentaires: row.get("commentaires"),
        statut: row.get("statut"),
        date_creation: row.get("date_creation"),
    }
}

fn nanny_application_from_row(row: &PgRow) -> NannyApplication {
    NannyApplication {
        id: row.get("id"),
        nom: row.get("nom"),
        telephone: row.get("telephone"),
        adresse: row.get("adresse"),
        type_poste: row.get("type_poste"),
        experience: row.get("experience"),
        disponibilites: row.get("disponibilites"),
        documents: row.get("documents"),
        statut: row.get("statut"),
        date_creation: row.get("date_creation"),
    }
}
