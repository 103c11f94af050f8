use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::DirectorPayload;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub id: Uuid,
    pub name: String,
    pub birth_year: i32,
    pub nationality: String,
    pub created_at: OffsetDateTime,
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Director>> {
    let rows = sqlx::query_as::<_, Director>(
        r#"
        SELECT id, name, birth_year, nationality, created_at
        FROM directors
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Director>> {
    let row = sqlx::query_as::<_, Director>(
        r#"
        SELECT id, name, birth_year, nationality, created_at
        FROM directors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    birth_year: i32,
    nationality: &str,
) -> anyhow::Result<Director> {
    let row = sqlx::query_as::<_, Director>(
        r#"
        INSERT INTO directors (name, birth_year, nationality)
        VALUES ($1, $2, $3)
        RETURNING id, name, birth_year, nationality, created_at
        "#,
    )
    .bind(name)
    .bind(birth_year)
    .bind(nationality)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Partial update: provided fields replace, missing fields keep their value.
pub async fn update_by_id(
    db: &PgPool,
    id: Uuid,
    payload: &DirectorPayload,
) -> anyhow::Result<Option<Director>> {
    let row = sqlx::query_as::<_, Director>(
        r#"
        UPDATE directors
        SET name        = COALESCE($2, name),
            birth_year  = COALESCE($3, birth_year),
            nationality = COALESCE($4, nationality)
        WHERE id = $1
        RETURNING id, name, birth_year, nationality, created_at
        "#,
    )
    .bind(id)
    .bind(payload.name.as_deref())
    .bind(payload.birth_year)
    .bind(payload.nationality.as_deref())
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Returns false when no such director existed. Movies referencing the
/// deleted director are left untouched.
pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let row = sqlx::query_as::<_, (Uuid,)>(
        r#"
        DELETE FROM directors
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row.is_some())
}
