use anyhow::Context;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::directors::repo::Director;

use super::dto::{MovieDetails, MoviePayload};

/// Flat row shape for the movie/director LEFT JOIN. The director columns
/// are all NULL when the reference is missing or dangling.
#[derive(Debug, FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    genre: String,
    release_year: i32,
    created_at: OffsetDateTime,
    director_id: Option<Uuid>,
    director_name: Option<String>,
    director_birth_year: Option<i32>,
    director_nationality: Option<String>,
    director_created_at: Option<OffsetDateTime>,
}

impl MovieRow {
    fn into_details(self) -> MovieDetails {
        let director = match (
            self.director_id,
            self.director_name,
            self.director_birth_year,
            self.director_nationality,
            self.director_created_at,
        ) {
            (Some(id), Some(name), Some(birth_year), Some(nationality), Some(created_at)) => {
                Some(Director {
                    id,
                    name,
                    birth_year,
                    nationality,
                    created_at,
                })
            }
            _ => None,
        };
        MovieDetails {
            id: self.id,
            title: self.title,
            genre: self.genre,
            release_year: self.release_year,
            director,
            created_at: self.created_at,
        }
    }
}

const SELECT_WITH_DIRECTOR: &str = r#"
    SELECT m.id, m.title, m.genre, m.release_year, m.created_at,
           d.id          AS director_id,
           d.name        AS director_name,
           d.birth_year  AS director_birth_year,
           d.nationality AS director_nationality,
           d.created_at  AS director_created_at
    FROM movies m
    LEFT JOIN directors d ON d.id = m.director_id
"#;

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<MovieDetails>> {
    let rows = sqlx::query_as::<_, MovieRow>(&format!(
        "{SELECT_WITH_DIRECTOR} ORDER BY m.created_at DESC"
    ))
    .fetch_all(db)
    .await?;
    Ok(rows.into_iter().map(MovieRow::into_details).collect())
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<MovieDetails>> {
    let row = sqlx::query_as::<_, MovieRow>(&format!("{SELECT_WITH_DIRECTOR} WHERE m.id = $1"))
        .bind(id)
        .fetch_optional(db)
        .await?;
    Ok(row.map(MovieRow::into_details))
}

/// Insert a movie, then re-read it with the director resolved. The two
/// steps are independent: the referenced director is never checked, and a
/// movie may be created against an id that does not exist.
pub async fn create(
    db: &PgPool,
    title: &str,
    genre: &str,
    release_year: i32,
    director_id: Option<Uuid>,
) -> anyhow::Result<MovieDetails> {
    let (id,) = sqlx::query_as::<_, (Uuid,)>(
        r#"
        INSERT INTO movies (title, genre, release_year, director_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(genre)
    .bind(release_year)
    .bind(director_id)
    .fetch_one(db)
    .await?;

    get_by_id(db, id)
        .await?
        .context("reload created movie")
}

/// Partial update: provided fields replace, missing fields keep their value.
pub async fn update_by_id(
    db: &PgPool,
    id: Uuid,
    payload: &MoviePayload,
) -> anyhow::Result<Option<MovieDetails>> {
    let updated = sqlx::query_as::<_, (Uuid,)>(
        r#"
        UPDATE movies
        SET title        = COALESCE($2, title),
            genre        = COALESCE($3, genre),
            release_year = COALESCE($4, release_year),
            director_id  = COALESCE($5, director_id)
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(payload.title.as_deref())
    .bind(payload.genre.as_deref())
    .bind(payload.release_year)
    .bind(payload.director)
    .fetch_optional(db)
    .await?;

    match updated {
        Some((id,)) => get_by_id(db, id).await,
        None => Ok(None),
    }
}

pub async fn delete_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let row = sqlx::query_as::<_, (Uuid,)>(
        r#"
        DELETE FROM movies
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row.is_some())
}
