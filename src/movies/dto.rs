use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::directors::repo::Director;

/// Body for movie create and update. Create requires title, genre and
/// releaseYear; update treats missing fields as "keep the stored value".
/// `director` carries the raw director id; it is not checked against the
/// directors collection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub director: Option<Uuid>,
}

/// Movie as returned to clients, with the director reference resolved to
/// the full record. A missing or dangling reference serializes as null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: Option<Director>,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn movie(director: Option<Director>) -> MovieDetails {
        MovieDetails {
            id: Uuid::new_v4(),
            title: "Alien".into(),
            genre: "Sci-Fi".into(),
            release_year: 1979,
            director,
            created_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn dangling_reference_serializes_as_null_director() {
        let json = serde_json::to_value(movie(None)).unwrap();
        assert_eq!(json["director"], serde_json::Value::Null);
        assert_eq!(json["releaseYear"], 1979);
    }

    #[test]
    fn resolved_reference_embeds_the_director() {
        let director = Director {
            id: Uuid::new_v4(),
            name: "Ridley Scott".into(),
            birth_year: 1937,
            nationality: "British".into(),
            created_at: datetime!(2024-01-01 00:00 UTC),
        };
        let json = serde_json::to_value(movie(Some(director))).unwrap();
        assert_eq!(json["director"]["name"], "Ridley Scott");
        assert_eq!(json["director"]["birthYear"], 1937);
    }
}
