use serde::Deserialize;

/// Body for director create and update. Create requires every field;
/// update treats missing fields as "keep the stored value".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPayload {
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub nationality: Option<String>,
}
