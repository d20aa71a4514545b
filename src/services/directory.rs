use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{College, CollegeType, CreateCollegeRequest};

/// Errors that can occur when reading or writing the college directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("College not found: {0}")]
    NotFound(Uuid),

    #[error("College name already exists: {0}")]
    DuplicateName(String),
}

/// Cache key for the full directory snapshot
const SNAPSHOT_KEY: &str = "colleges:all";

/// Read-mostly store of colleges
///
/// `list_all` serves a cached snapshot of the whole directory so the
/// nearby-college ranker does not hit the database on every property write.
/// The snapshot carries the configured TTL and is explicitly invalidated on
/// every college write, so it is never stale beyond that bound. The cache is
/// owned here, not ambient.
pub struct CollegeDirectory {
    pool: PgPool,
    snapshot: Cache<&'static str, Arc<Vec<College>>>,
}

impl CollegeDirectory {
    pub fn new(pool: PgPool, snapshot_ttl_secs: u64) -> Self {
        let snapshot = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(snapshot_ttl_secs))
            .build();

        Self { pool, snapshot }
    }

    /// The full directory, cached snapshot first
    pub async fn list_all(&self) -> Result<Arc<Vec<College>>, DirectoryError> {
        if let Some(colleges) = self.snapshot.get(SNAPSHOT_KEY).await {
            tracing::trace!("college snapshot cache hit");
            return Ok(colleges);
        }

        let colleges = Arc::new(self.fetch_all().await?);
        self.snapshot.insert(SNAPSHOT_KEY, colleges.clone()).await;
        tracing::debug!("college snapshot refreshed ({} entries)", colleges.len());

        Ok(colleges)
    }

    async fn fetch_all(&self) -> Result<Vec<College>, DirectoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, address, location, latitude, longitude, image, college_type, created_at
            FROM colleges
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(college_from_row).collect())
    }

    /// Single lookup by id
    pub async fn get(&self, id: Uuid) -> Result<College, DirectoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, address, location, latitude, longitude, image, college_type, created_at
            FROM colleges
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| college_from_row(&r))
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Administrative write adding a college
    ///
    /// Invalidates the snapshot so subsequent property writes rank against
    /// the new entry immediately.
    pub async fn insert(&self, req: CreateCollegeRequest) -> Result<College, DirectoryError> {
        let id = Uuid::new_v4();
        let address = req.address.clone().unwrap_or_else(|| req.location.clone());
        let college_type = req.college_type.unwrap_or_default();

        let result = sqlx::query(
            r#"
            INSERT INTO colleges (id, name, address, location, latitude, longitude, image, college_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id, name, address, location, latitude, longitude, image, college_type, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&address)
        .bind(&req.location)
        .bind(req.latitude)
        .bind(req.longitude)
        .bind(&req.image)
        .bind(college_type.as_str())
        .fetch_one(&self.pool)
        .await;

        let row = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db)) if db.constraint() == Some("colleges_name_key") => {
                return Err(DirectoryError::DuplicateName(req.name));
            }
            Err(e) => return Err(e.into()),
        };

        self.snapshot.invalidate(SNAPSHOT_KEY).await;
        tracing::info!("college added: {} ({})", req.name, id);

        Ok(college_from_row(&row))
    }
}

pub(crate) fn college_from_row(row: &PgRow) -> College {
    let college_type: String = row.get("college_type");

    College {
        id: row.get("id"),
        name: row.get("name"),
        address: row.get("address"),
        location: row.get("location"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        image: row.get("image"),
        college_type: CollegeType::parse(&college_type),
        created_at: row.get("created_at"),
    }
}
