//! Generation strategy selection.
//!
//! Three variants behind one trait: `mock` (canned responses, the default),
//! `template` (string-template substitution), and `external` (a real model
//! provider, not yet wired up; it fails loudly with 501 instead of silently
//! degrading to another path).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::mock::generate_mock_content;
use crate::generation::templates::{generate_from_template, TemplateContext};
use crate::generation::transformer::TransformOptions;
use crate::models::voice::Tone;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Mock,
    Template,
    External,
}

#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produces the generated text. `tone` is the effective tone already
    /// resolved by the transformer (request override → voice tone → default).
    async fn generate(&self, options: &TransformOptions, tone: Tone) -> Result<String, AppError>;
}

pub fn resolve(mode: GenerationMode) -> &'static dyn GenerationStrategy {
    match mode {
        GenerationMode::Mock => &MockGenerator,
        GenerationMode::Template => &TemplateGenerator,
        GenerationMode::External => &ExternalProvider,
    }
}

/// Canned platform-native responses derived from a source excerpt.
pub struct MockGenerator;

#[async_trait]
impl GenerationStrategy for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, options: &TransformOptions, _tone: Tone) -> Result<String, AppError> {
        Ok(generate_mock_content(
            &options.source_content,
            options.platform,
            &options.format,
        ))
    }
}

/// String-template substitution with tone-aware template resolution.
pub struct TemplateGenerator;

#[async_trait]
impl GenerationStrategy for TemplateGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, options: &TransformOptions, tone: Tone) -> Result<String, AppError> {
        let voice = options.voice.as_ref();
        Ok(generate_from_template(&TemplateContext {
            source_content: &options.source_content,
            platform: options.platform,
            format: &options.format,
            tone,
            target_audience: voice.and_then(|v| v.target_audience.as_deref()),
            brand_name: voice.map(|v| v.name.as_str()),
        }))
    }
}

/// The real model integration. Prompt shaping lives in
/// `generation::prompts`; the provider transport does not exist yet, so
/// every call fails with the not-implemented error.
pub struct ExternalProvider;

#[async_trait]
impl GenerationStrategy for ExternalProvider {
    fn name(&self) -> &'static str {
        "external"
    }

    async fn generate(&self, _options: &TransformOptions, _tone: Tone) -> Result<String, AppError> {
        Err(AppError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Platform;

    fn options(mode: GenerationMode) -> TransformOptions {
        TransformOptions {
            source_content: "Hello world. This is a test.".to_string(),
            platform: Platform::Twitter,
            format: "thread".to_string(),
            tone: None,
            voice: None,
            mode,
        }
    }

    #[test]
    fn test_mode_deserializes_from_lowercase() {
        let mode: GenerationMode = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(mode, GenerationMode::Template);
        assert_eq!(GenerationMode::default(), GenerationMode::Mock);
    }

    #[tokio::test]
    async fn test_resolve_dispatches_by_mode() {
        assert_eq!(resolve(GenerationMode::Mock).name(), "mock");
        assert_eq!(resolve(GenerationMode::Template).name(), "template");
        assert_eq!(resolve(GenerationMode::External).name(), "external");
    }

    #[tokio::test]
    async fn test_external_provider_always_fails_not_implemented() {
        let result = ExternalProvider
            .generate(&options(GenerationMode::External), Tone::Professional)
            .await;
        assert!(matches!(result, Err(AppError::NotImplemented)));
    }

    #[tokio::test]
    async fn test_mock_strategy_matches_mock_module() {
        let opts = options(GenerationMode::Mock);
        let via_strategy = MockGenerator
            .generate(&opts, Tone::Professional)
            .await
            .unwrap();
        let direct = generate_mock_content("Hello world. This is a test.", Platform::Twitter, "thread");
        assert_eq!(via_strategy, direct);
    }
}
