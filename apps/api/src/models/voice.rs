use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The eight tones a brand voice profile can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Humorous,
    Inspirational,
    Technical,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Authoritative,
        Tone::Humorous,
        Tone::Inspirational,
        Tone::Technical,
        Tone::Conversational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Humorous => "humorous",
            Tone::Inspirational => "inspirational",
            Tone::Technical => "technical",
            Tone::Conversational => "conversational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "friendly" => Ok(Tone::Friendly),
            "authoritative" => Ok(Tone::Authoritative),
            "humorous" => Ok(Tone::Humorous),
            "inspirational" => Ok(Tone::Inspirational),
            "technical" => Ok(Tone::Technical),
            "conversational" => Ok(Tone::Conversational),
            other => Err(format!("Unknown tone '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BrandVoiceRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub tone: String,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    pub example_texts: Vec<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrandVoiceRow {
    /// Stored tones are validated on write; fall back to the default tone if
    /// an old row predates validation.
    pub fn tone(&self) -> Tone {
        Tone::from_str(&self.tone).unwrap_or_default()
    }
}
