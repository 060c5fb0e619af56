use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of material a content source holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
    Audio,
    Url,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Url => "url",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "image" => Ok(ContentType::Image),
            "video" => Ok(ContentType::Video),
            "audio" => Ok(ContentType::Audio),
            "url" => Ok(ContentType::Url),
            other => Err(format!("Unknown content type '{other}'")),
        }
    }
}

/// Lifecycle status of a generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Edited,
    Exported,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Edited => "edited",
            ContentStatus::Exported => "exported",
        }
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "edited" => Ok(ContentStatus::Edited),
            "exported" => Ok(ContentStatus::Exported),
            other => Err(format!("Unknown status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentSourceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content_type: String,
    pub source_content: String,
    pub source_url: Option<String>,
    /// S3 key of the original uploaded file, when the source came in as one.
    pub file_url: Option<String>,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedContentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source_id: Uuid,
    pub brand_voice_id: Option<Uuid>,
    pub platform: String,
    pub format: String,
    pub generated_text: String,
    pub status: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GenerationHistoryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source_id: Uuid,
    pub platforms_generated: Vec<String>,
    pub total_outputs: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_round_trip() {
        for ct in ["text", "image", "video", "audio", "url"] {
            assert_eq!(ContentType::from_str(ct).unwrap().as_str(), ct);
        }
        assert!(ContentType::from_str("pdf").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["draft", "edited", "exported"] {
            assert_eq!(ContentStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(ContentStatus::from_str("published").is_err());
    }
}
