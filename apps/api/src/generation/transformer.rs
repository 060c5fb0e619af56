//! Transformer — single- and multi-platform generation orchestration.
//!
//! `transform_content` is the unit of work: simulated provider latency,
//! tone resolution, strategy dispatch, metadata assembly.
//! `transform_multiple` fans the unit out across platform/format pairs and
//! joins all completions, preserving the caller's ordering.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::{self, Platform};
use crate::errors::AppError;
use crate::generation::strategy::{resolve, GenerationMode};
use crate::generation::text::{count_words, read_time};
use crate::models::voice::{BrandVoiceRow, Tone};

/// Simulated provider round-trip, uniform in this range. Stands in for the
/// latency of a real inference call until the external provider lands.
const MIN_DELAY_MS: u64 = 1000;
const MAX_DELAY_MS: u64 = 2000;

/// Brand voice fields the transformer cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub name: String,
    pub tone: Tone,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    pub example_texts: Vec<String>,
}

impl From<&BrandVoiceRow> for VoiceDescriptor {
    fn from(row: &BrandVoiceRow) -> Self {
        VoiceDescriptor {
            name: row.name.clone(),
            tone: row.tone(),
            style_guide: row.style_guide.clone(),
            target_audience: row.target_audience.clone(),
            example_texts: row.example_texts.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub source_content: String,
    pub platform: Platform,
    pub format: String,
    pub tone: Option<Tone>,
    pub voice: Option<VoiceDescriptor>,
    pub mode: GenerationMode,
}

/// One platform/format pair requested by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSelection {
    pub platform: Platform,
    pub format: String,
}

/// Options shared across every pair of a multi-platform request.
#[derive(Debug, Clone, Default)]
pub struct SharedOptions {
    pub tone: Option<Tone>,
    pub voice: Option<VoiceDescriptor>,
    pub mode: GenerationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformMetadata {
    pub character_count: usize,
    pub word_count: usize,
    pub estimated_read_time: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub platform: Platform,
    pub format: String,
    pub content: String,
    pub metadata: TransformMetadata,
}

/// Transforms one source into one platform-native output.
///
/// Effective tone: request override → voice tone → professional.
/// `character_count` is the Unicode scalar count of the generated text.
pub async fn transform_content(options: TransformOptions) -> Result<TransformResult, AppError> {
    simulate_processing_delay().await;

    let tone = options
        .tone
        .or_else(|| options.voice.as_ref().map(|v| v.tone))
        .unwrap_or_default();

    let content = resolve(options.mode).generate(&options, tone).await?;

    let word_count = count_words(&content);
    let metadata = TransformMetadata {
        character_count: content.chars().count(),
        word_count,
        estimated_read_time: read_time(word_count),
        generated_at: Utc::now(),
    };

    Ok(TransformResult {
        platform: options.platform,
        format: options.format,
        content,
        metadata,
    })
}

/// Fans `transform_content` out across all pairs. Every pair runs as its own
/// task; results come back in the caller's pair order, and any single
/// failure fails the whole batch.
pub async fn transform_multiple(
    source_content: &str,
    selections: &[PlatformSelection],
    shared: &SharedOptions,
) -> Result<Vec<TransformResult>, AppError> {
    let mut handles = Vec::with_capacity(selections.len());
    for selection in selections {
        let options = TransformOptions {
            source_content: source_content.to_string(),
            platform: selection.platform,
            format: selection.format.clone(),
            tone: shared.tone,
            voice: shared.voice.clone(),
            mode: shared.mode,
        };
        handles.push(tokio::spawn(transform_content(options)));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Generation task failed: {e}")))??;
        results.push(result);
    }
    Ok(results)
}

/// Length check against the platform's catalog limit.
#[derive(Debug, Clone, Serialize)]
pub struct LengthCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn validate_content_length(content: &str, platform: Platform) -> LengthCheck {
    let Some(limit) = catalog::config(platform).character_limit else {
        return LengthCheck {
            valid: true,
            message: None,
        };
    };

    if content.chars().count() > limit {
        return LengthCheck {
            valid: false,
            message: Some(format!(
                "Content exceeds {platform} limit of {limit} characters"
            )),
        };
    }

    LengthCheck {
        valid: true,
        message: None,
    }
}

/// Per-platform post-processing hooks. Identity for now; the signatures are
/// the extension point for hashtag suggestion and mobile formatting.
pub fn optimize_for_platform(content: String, platform: Platform) -> String {
    match platform {
        Platform::Twitter => optimize_for_twitter(content),
        Platform::Linkedin => optimize_for_linkedin(content),
        Platform::Instagram => optimize_for_instagram(content),
        _ => content,
    }
}

fn optimize_for_twitter(content: String) -> String {
    content
}

fn optimize_for_linkedin(content: String) -> String {
    content
}

fn optimize_for_instagram(content: String) -> String {
    content
}

async fn simulate_processing_delay() {
    let delay_ms = rand::thread_rng().gen_range(MIN_DELAY_MS..MAX_DELAY_MS);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Hello world. This is a test.";

    fn mock_options(platform: Platform, format: &str) -> TransformOptions {
        TransformOptions {
            source_content: SOURCE.to_string(),
            platform,
            format: format.to_string(),
            tone: None,
            voice: None,
            mode: GenerationMode::Mock,
        }
    }

    fn voice(tone: Tone) -> VoiceDescriptor {
        VoiceDescriptor {
            name: "Acme".to_string(),
            tone,
            style_guide: None,
            target_audience: Some("creators".to_string()),
            example_texts: vec![],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_twitter_thread_end_to_end() {
        let result = transform_content(mock_options(Platform::Twitter, "thread"))
            .await
            .unwrap();

        assert_eq!(result.platform, Platform::Twitter);
        assert_eq!(result.format, "thread");
        assert!(!result.content.is_empty());
        assert!(result.content.contains("Hello world."));
        assert_eq!(result.metadata.estimated_read_time, "< 1 min");
    }

    #[tokio::test(start_paused = true)]
    async fn test_metadata_counts_match_content() {
        let result = transform_content(mock_options(Platform::Linkedin, "post"))
            .await
            .unwrap();

        assert_eq!(
            result.metadata.character_count,
            result.content.chars().count()
        );
        assert!(result.metadata.word_count >= 1);
        assert_eq!(
            result.metadata.word_count,
            count_words(&result.content)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_tone_selects_template_variant() {
        let mut options = mock_options(Platform::Linkedin, "post");
        options.mode = GenerationMode::Template;
        options.voice = Some(voice(Tone::Casual));

        let result = transform_content(options).await.unwrap();
        assert!(result.content.contains("Here's what I've learned:"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tone_override_beats_voice_tone() {
        let mut options = mock_options(Platform::Linkedin, "post");
        options.mode = GenerationMode::Template;
        options.voice = Some(voice(Tone::Casual));
        options.tone = Some(Tone::Professional);

        let result = transform_content(options).await.unwrap();
        assert!(result.content.contains("Key insights:"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_mode_propagates_not_implemented() {
        let mut options = mock_options(Platform::Twitter, "post");
        options.mode = GenerationMode::External;

        let result = transform_content(options).await;
        assert!(matches!(result, Err(AppError::NotImplemented)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiple_returns_n_results_in_request_order() {
        let selections = vec![
            PlatformSelection {
                platform: Platform::Blog,
                format: "article".to_string(),
            },
            PlatformSelection {
                platform: Platform::Twitter,
                format: "thread".to_string(),
            },
            PlatformSelection {
                platform: Platform::Instagram,
                format: "caption".to_string(),
            },
        ];

        let results = transform_multiple(SOURCE, &selections, &SharedOptions::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        for (result, selection) in results.iter().zip(&selections) {
            assert_eq!(result.platform, selection.platform);
            assert_eq!(result.format, selection.format);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiple_fails_whole_batch_on_single_failure() {
        let selections = vec![
            PlatformSelection {
                platform: Platform::Twitter,
                format: "thread".to_string(),
            },
            PlatformSelection {
                platform: Platform::Twitter,
                format: "post".to_string(),
            },
        ];
        let shared = SharedOptions {
            mode: GenerationMode::External,
            ..Default::default()
        };

        let result = transform_multiple(SOURCE, &selections, &shared).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_length_check_within_limit() {
        let check = validate_content_length(&"a".repeat(280), Platform::Twitter);
        assert!(check.valid);
        assert!(check.message.is_none());
    }

    #[test]
    fn test_length_check_exceeding_limit_names_platform() {
        let check = validate_content_length(&"a".repeat(281), Platform::Twitter);
        assert!(!check.valid);
        let message = check.message.unwrap();
        assert!(message.contains("twitter"));
        assert!(message.contains("280"));
    }

    #[test]
    fn test_platforms_without_limit_are_always_valid() {
        let huge = "word ".repeat(100_000);
        assert!(validate_content_length(&huge, Platform::Email).valid);
        assert!(validate_content_length(&huge, Platform::Blog).valid);
    }

    #[test]
    fn test_optimize_is_identity_for_every_platform() {
        for platform in Platform::ALL {
            let content = "Some generated content.".to_string();
            assert_eq!(
                optimize_for_platform(content.clone(), platform),
                content
            );
        }
    }
}
