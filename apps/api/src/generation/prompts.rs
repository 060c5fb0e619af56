#![allow(dead_code)]

//! Prompt library for the external-provider path.
//!
//! The mock and template strategies never touch these. They exist so the
//! provider integration, when it lands, inherits fully-shaped instructions:
//! a system prompt built from the platform guidelines and the brand voice,
//! and a user prompt carrying the source content and voice examples.

use crate::catalog::Platform;
use crate::models::voice::Tone;

#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub source_content: &'a str,
    pub platform: Platform,
    pub format: &'a str,
    pub tone: Tone,
    pub style_guide: Option<&'a str>,
    pub target_audience: Option<&'a str>,
    pub example_texts: &'a [String],
}

/// System prompt: role, task shape, and per-platform stylistic rules.
pub fn build_system_prompt(ctx: &PromptContext) -> String {
    let mut prompt = format!(
        "You are an expert content strategist specializing in platform-native content creation.\n\n\
         Your task is to transform source content into {platform}-optimized {format} that:\n\
         - Maintains the core message and value\n\
         - Adapts to {platform}'s format and audience expectations\n\
         - Uses a {tone} tone\n",
        platform = ctx.platform,
        format = ctx.format,
        tone = ctx.tone,
    );

    if let Some(style_guide) = ctx.style_guide {
        prompt.push_str(&format!("- Follows this style guide: {style_guide}\n"));
    }
    if let Some(audience) = ctx.target_audience {
        prompt.push_str(&format!("- Targets: {audience}\n"));
    }

    prompt.push_str(
        "\nKey principles:\n\
         1. Platform-native content performs 3x better than generic cross-posts\n\
         2. Each platform has unique engagement patterns\n\
         3. Maintain brand voice while adapting format\n\
         4. Focus on value and clarity\n\n",
    );
    prompt.push_str(platform_guidelines(ctx.platform, ctx.format));
    prompt
}

/// User prompt: the source content, target shape, and voice examples.
pub fn build_user_prompt(ctx: &PromptContext) -> String {
    let mut prompt = format!(
        "Transform this content for {platform}:\n\n\
         SOURCE CONTENT:\n{source}\n\n\
         TARGET FORMAT: {format}\n\
         TONE: {tone}\n",
        platform = ctx.platform,
        source = ctx.source_content,
        format = ctx.format,
        tone = ctx.tone,
    );

    if !ctx.example_texts.is_empty() {
        prompt.push_str("\nBRAND VOICE EXAMPLES:\n");
        for (i, example) in ctx.example_texts.iter().enumerate() {
            prompt.push_str(&format!("{}. {example}\n", i + 1));
        }
    }

    prompt.push_str(&format!(
        "\nGenerate platform-native content that captures the essence of the source \
         while optimizing for {}'s format and audience.",
        ctx.platform
    ));
    prompt
}

/// Static stylistic guidelines per platform/format pair.
pub fn platform_guidelines(platform: Platform, format: &str) -> &'static str {
    match (platform, format) {
        (Platform::Twitter, "thread") => {
            "Twitter Thread Guidelines:\n- Start with a hook that stops the scroll\n- Number tweets (1/, 2/, 3/)\n- Keep each tweet under 280 characters\n- Use line breaks for readability\n- End with a question or call to action\n- Max 10-15 tweets for engagement"
        }
        (Platform::Twitter, "post") => {
            "Twitter Post Guidelines:\n- Lead with value in first line\n- Use 2-3 relevant hashtags\n- Include emojis sparingly\n- Stay under 280 characters\n- End with engagement prompt"
        }
        (Platform::Twitter, "reply") => {
            "Twitter Reply Guidelines:\n- Be conversational and genuine\n- Add value, don't just agree\n- Keep it concise\n- Use @mentions appropriately"
        }
        (Platform::Linkedin, "post") => {
            "LinkedIn Post Guidelines:\n- Professional yet personable tone\n- Use line breaks and emojis (→ • ✓)\n- Share insights, not just information\n- 1300-2000 characters optimal\n- End with a question\n- 3-5 relevant hashtags"
        }
        (Platform::Linkedin, "article") => {
            "LinkedIn Article Guidelines:\n- Long-form content (1000-2000 words)\n- Clear structure with headings\n- Data-driven insights\n- Professional formatting\n- Actionable takeaways"
        }
        (Platform::Linkedin, "comment") => {
            "LinkedIn Comment Guidelines:\n- Add genuine value\n- Professional tone\n- Thoughtful engagement\n- Build relationships"
        }
        (Platform::Instagram, "caption") => {
            "Instagram Caption Guidelines:\n- Hook in first line (visible without \"more\")\n- Emojis for visual breaks\n- Tell a story\n- Include call to action\n- 20-30 hashtags (add at end or first comment)\n- 2200 character limit"
        }
        (Platform::Instagram, "story") => {
            "Instagram Story Guidelines:\n- Vertical format focus\n- Text should be large and readable\n- Interactive elements\n- Swipe-up worthy\n- Mobile-first design"
        }
        (Platform::Instagram, "reel") => {
            "Instagram Reel Guidelines:\n- Hook in first 3 seconds\n- Short, punchy text\n- Trending audio consideration\n- Mobile-optimized\n- Clear value proposition"
        }
        (Platform::Email, "newsletter") => {
            "Email Newsletter Guidelines:\n- Compelling subject line\n- Personal greeting\n- Scannable format\n- Clear sections\n- Strong CTA\n- P.S. for extra engagement"
        }
        (Platform::Email, "announcement") => {
            "Email Announcement Guidelines:\n- Exciting subject line\n- Get to the point quickly\n- Highlight benefits\n- Clear next steps\n- Professional signature"
        }
        (Platform::Email, "follow-up") => {
            "Follow-up Email Guidelines:\n- Reference previous conversation\n- Add value, not just \"checking in\"\n- Clear ask or next step\n- Professional but warm"
        }
        (Platform::Blog, "article") => {
            "Blog Article Guidelines:\n- SEO-optimized title\n- Clear structure (H2, H3)\n- 1500+ words for depth\n- Internal/external links\n- Conclusion with CTA\n- Meta description ready"
        }
        (Platform::Blog, "listicle") => {
            "Listicle Guidelines:\n- Number in title\n- Consistent section format\n- Actionable items\n- Brief but valuable\n- Summary at end"
        }
        (Platform::Blog, "tutorial") => {
            "Tutorial Guidelines:\n- Step-by-step format\n- Screenshots/examples\n- Prerequisites section\n- Clear instructions\n- Troubleshooting tips"
        }
        (Platform::Facebook, "post") => {
            "Facebook Post Guidelines:\n- Conversational tone\n- Questions to drive comments\n- Visual content support\n- Community-building focus\n- Emojis and formatting"
        }
        (Platform::Facebook, "story") => {
            "Facebook Story Guidelines:\n- Mobile-first vertical\n- Interactive elements\n- 24-hour relevance\n- Casual, authentic tone"
        }
        _ => "Follow general best practices for the platform.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(examples: &'a [String]) -> PromptContext<'a> {
        PromptContext {
            source_content: "Distribution beats creation.",
            platform: Platform::Linkedin,
            format: "post",
            tone: Tone::Authoritative,
            style_guide: Some("Short sentences. No jargon."),
            target_audience: Some("B2B founders"),
            example_texts: examples,
        }
    }

    #[test]
    fn test_system_prompt_weaves_in_voice_fields() {
        let prompt = build_system_prompt(&ctx(&[]));
        assert!(prompt.contains("linkedin-optimized post"));
        assert!(prompt.contains("authoritative tone"));
        assert!(prompt.contains("Short sentences. No jargon."));
        assert!(prompt.contains("Targets: B2B founders"));
        assert!(prompt.contains("LinkedIn Post Guidelines:"));
    }

    #[test]
    fn test_user_prompt_numbers_voice_examples() {
        let examples = vec!["First sample.".to_string(), "Second sample.".to_string()];
        let prompt = build_user_prompt(&ctx(&examples));
        assert!(prompt.contains("1. First sample."));
        assert!(prompt.contains("2. Second sample."));
        assert!(prompt.contains("SOURCE CONTENT:\nDistribution beats creation."));
    }

    #[test]
    fn test_user_prompt_omits_examples_section_when_empty() {
        let prompt = build_user_prompt(&ctx(&[]));
        assert!(!prompt.contains("BRAND VOICE EXAMPLES"));
    }

    #[test]
    fn test_every_catalog_pair_has_guidelines() {
        use crate::catalog::{config, Platform};
        for platform in Platform::ALL {
            for format in config(platform).formats {
                let g = platform_guidelines(platform, format);
                assert_ne!(
                    g, "Follow general best practices for the platform.",
                    "{platform}/{format} should have dedicated guidelines"
                );
            }
        }
    }

    #[test]
    fn test_unknown_pair_gets_generic_guidelines() {
        assert_eq!(
            platform_guidelines(Platform::Twitter, "caption"),
            "Follow general best practices for the platform."
        );
    }
}
