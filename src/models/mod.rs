use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book the user has recorded as read
///
/// `author` and `category` may each hold several comma-separated values,
/// exactly as entered; the preference aggregator splits them when counting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct ReadBook {
    /// Store-assigned identifier, stable for the record's lifetime
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    /// When the record entered the shelf
    pub added_at: DateTime<Utc>,
}

/// Insert/update payload for a read book, after input defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
}

/// A single catalog result returned to the client
///
/// `authors` and `categories` are joined, comma-separated strings with the
/// boundary defaults already applied. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BookRecommendation {
    pub title: String,
    pub authors: String,
    pub categories: String,
}

/// Dominant author/category summary of a reading history
///
/// Derived transiently per recommendation run; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceProfile {
    pub favorite_author: String,
    pub favorite_category: String,
}

// ============================================================================
// Google Books API Types
// ============================================================================

/// Raw response from GET /volumes
#[derive(Debug, Clone, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// One volume entry in a volumes response
#[derive(Debug, Clone, Deserialize)]
pub struct Volume {
    #[serde(default, rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// The volumeInfo block; every field the API may omit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
}

impl From<Volume> for BookRecommendation {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;

        BookRecommendation {
            title: info
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "No title".to_string()),
            authors: join_or_default(info.authors, "No author"),
            categories: join_or_default(info.categories, "No category"),
        }
    }
}

/// Joins a list field with ", ", falling back to the literal default when
/// the field is missing or empty
fn join_or_default(values: Option<Vec<String>>, default: &str) -> String {
    match values {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => default.to_string(),
    }
}
