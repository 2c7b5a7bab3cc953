//! Repository for the `universities` reference table.

use sqlx::PgPool;

use crate::models::university::University;
use crate::models::user::StudyStream;

const COLUMNS: &str = "id, name, stream, city, state";

/// Provides list/insert operations for the university reference list.
pub struct UniversityRepo;

impl UniversityRepo {
    /// List universities, optionally restricted to one stream, by name.
    pub async fn list(
        pool: &PgPool,
        stream: Option<StudyStream>,
    ) -> Result<Vec<University>, sqlx::Error> {
        match stream {
            Some(stream) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM universities WHERE stream = $1 ORDER BY name ASC"
                );
                sqlx::query_as::<_, University>(&query)
                    .bind(stream)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM universities ORDER BY name ASC");
                sqlx::query_as::<_, University>(&query).fetch_all(pool).await
            }
        }
    }

    /// Insert or replace a reference row (seed binary).
    pub async fn upsert(pool: &PgPool, university: &University) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO universities (id, name, stream, city, state)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE
             SET name = EXCLUDED.name, stream = EXCLUDED.stream,
                 city = EXCLUDED.city, state = EXCLUDED.state",
        )
        .bind(&university.id)
        .bind(&university.name)
        .bind(university.stream)
        .bind(&university.city)
        .bind(&university.state)
        .execute(pool)
        .await?;
        Ok(())
    }
}
