//! Mock response generator — deterministic canned output per platform/format.
//!
//! The hook is the source text up to and including the first period; the main
//! point is the first 150 characters. Both are woven into a fixed response
//! body keyed by platform and format. Unknown combinations fall back to a
//! generic adaptation marker. Empty source yields degenerate (empty-hook)
//! output, never an error.

use crate::catalog::Platform;
use crate::generation::text::truncate_chars;

/// Characters of source content carried into the main-point slot.
const MAIN_POINT_CHARS: usize = 150;

/// Produces the canned platform-native body for the source content.
/// Pure: identical inputs always produce identical output.
pub fn generate_mock_content(source_content: &str, platform: Platform, format: &str) -> String {
    let hook = hook_of(source_content);
    let main_point = main_point_of(source_content);

    canned(platform, format, &hook, main_point).unwrap_or_else(|| {
        format!(
            "{hook}\n\n{main_point}\n\n[Content adapted for {platform} - {format}]"
        )
    })
}

/// Text up to and including the first period; the whole text gains a period
/// when none exists. Blank input yields an empty hook.
fn hook_of(source: &str) -> String {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.find('.') {
        Some(idx) => trimmed[..=idx].to_string(),
        None => format!("{trimmed}."),
    }
}

fn main_point_of(source: &str) -> &str {
    truncate_chars(source, MAIN_POINT_CHARS).trim()
}

/// Hook with its trailing period stripped, for title positions.
fn hook_title(hook: &str) -> &str {
    hook.strip_suffix('.').unwrap_or(hook)
}

fn canned(platform: Platform, format: &str, hook: &str, main: &str) -> Option<String> {
    let body = match (platform, format) {
        (Platform::Twitter, "thread") => format!(
            "🧵 Thread: {hook}\n\n1/ {main}...\n\n2/ Here's why this matters: [Platform-native content performs 3x better]\n\n3/ The key is adapting your message to each platform's unique format and audience expectations.\n\n4/ That's where AI comes in—maintaining your voice while optimizing for each channel.\n\n5/ Want to see this in action? Try transforming one piece of content across all your platforms."
        ),
        (Platform::Twitter, "post") => format!(
            "{}... \n\nTransform one message into platform-native content across all channels. \n\n#ContentStrategy #AI",
            truncate_chars(hook, 220)
        ),
        (Platform::Twitter, "reply") => format!(
            "Great point! {}... \n\nThis is exactly why platform-native content matters.",
            truncate_chars(main, 200)
        ),
        (Platform::Linkedin, "post") => format!(
            "{hook}\n\n{main}\n\nHere's what I've learned:\n\n→ Distribution beats creation\n→ Platform-native wins every time\n→ Consistency requires automation\n→ Your brand voice should stay constant\n\nThe future isn't about creating more content. It's about amplifying what you already have.\n\nWhat's your biggest content distribution challenge?\n\n#ContentStrategy #AI #Marketing"
        ),
        (Platform::Linkedin, "article") => format!(
            "# {hook}\n\n## The Challenge\n\n{main}\n\n## Why This Matters\n\nIn today's digital landscape, creating great content is only half the battle. The real challenge is getting that content in front of your audience—on every platform where they spend their time.\n\n## The Solution\n\nPlatform-native content that maintains your brand voice while adapting to each channel's unique format and audience expectations.\n\n## Key Takeaways\n\n• Focus on distribution, not just creation\n• Adapt content for each platform's format\n• Maintain consistent brand voice\n• Use AI to scale without burning out\n\n## Moving Forward\n\nThe creators and brands that thrive will be those who master the art of amplification."
        ),
        (Platform::Linkedin, "comment") => format!(
            "Insightful post! {}...\n\nThis aligns perfectly with what we're seeing in the market. Would love to hear more about your approach.",
            truncate_chars(main, 150)
        ),
        (Platform::Instagram, "caption") => format!(
            "{} ✨\n\n{}...\n\nHere's the truth: great content deserves great distribution.\n\n💡 Tips:\n• Platform-native wins\n• Maintain your voice\n• Automate what you can\n• Focus on impact\n\nWhat's your content strategy? Drop a 💭 below!\n\n#ContentCreator #SocialMediaTips #MarketingStrategy",
            truncate_chars(hook, 100),
            truncate_chars(main, 150)
        ),
        (Platform::Instagram, "story") => format!(
            "{hook}\n\nSwipe up to learn more 👆\n\n#ContentStrategy"
        ),
        (Platform::Instagram, "reel") => format!(
            "POV: You just learned how to 10x your content reach 🎯\n\n{}...\n\nSave this for later! 📌\n\n#ContentTips #CreatorEconomy",
            truncate_chars(main, 100)
        ),
        (Platform::Email, "newsletter") => format!(
            "Subject: {hook}\n\nHey there,\n\n{main}\n\nHere's what you need to know:\n\n**The Problem:**\nMost creators spend 70% of their time repurposing content manually.\n\n**The Solution:**\nPlatform-native content that adapts automatically while maintaining your unique voice.\n\n**Why It Works:**\n→ Consistent presence across platforms\n→ Better engagement (3x on average)\n→ More time for strategy\n\n**What You Can Do:**\nStart by identifying your core content pieces. Then, ask yourself: how can each piece be adapted for different platforms?\n\nThe goal isn't more content—it's better distribution.\n\nTalk soon,\n[Your Name]\n\nP.S. Reply to this email and let me know your biggest content challenge!"
        ),
        (Platform::Email, "announcement") => format!(
            "🎉 Exciting News!\n\n{hook}\n\n{main}\n\nThis changes everything for creators and marketers who want to scale their reach without burning out.\n\nReady to learn more? Click here →\n\nBest,\n[Your Name]"
        ),
        (Platform::Email, "follow-up") => format!(
            "Hey [Name],\n\nFollowing up on {}\n\n{}...\n\nWanted to make sure this was on your radar. Would love to hear your thoughts!\n\nBest,\n[Your Name]",
            hook.to_lowercase(),
            truncate_chars(main, 120)
        ),
        (Platform::Blog, "article") => format!(
            "# {hook}\n\n## Introduction\n\n{main}\n\nIn this article, we'll explore why distribution has become the critical bottleneck for content creators and how AI-powered tools are changing the game.\n\n## The Distribution Challenge\n\nCreating great content has never been easier. But getting that content in front of your audience? That's where most creators struggle.\n\nResearch shows that successful creators spend up to 70% of their time on content repurposing and distribution—leaving only 30% for actual creation.\n\n## Why Platform-Native Matters\n\nPlatform-native content consistently outperforms generic cross-posts by 3-5x. Here's why:\n\n• Each platform has unique audience expectations\n• Format matters as much as message\n• Timing and context vary by channel\n• Engagement patterns differ significantly\n\n## The Solution\n\nThe future belongs to creators who can maintain their authentic voice while adapting seamlessly to each platform's unique requirements.\n\n## Conclusion\n\n{hook} The question isn't whether to distribute your content broadly—it's how to do it effectively at scale."
        ),
        (Platform::Blog, "listicle") => format!(
            "# 5 Ways to {}\n\n{main}\n\nHere's your complete guide:\n\n## 1. Start With Strong Source Content\n\nQuality in = quality out. Make sure your original content is valuable and well-structured.\n\n## 2. Understand Platform Nuances\n\nTwitter loves threads. LinkedIn wants insights. Instagram needs visuals.\n\n## 3. Maintain Your Brand Voice\n\nConsistency across platforms builds trust and recognition.\n\n## 4. Optimize for Each Format\n\nDon't just copy-paste. Adapt the format, length, and style.\n\n## 5. Measure and Iterate\n\nTrack what works on each platform and refine your approach.\n\n## Conclusion\n\nDistribution is the new creation. Master it, and you'll 10x your impact.",
            hook_title(hook)
        ),
        (Platform::Blog, "tutorial") => format!(
            "# How to {} - Step-by-Step Guide\n\n{main}\n\n## What You'll Need\n\n• Your source content\n• Understanding of each platform's format\n• Brand voice guidelines\n• Time for adaptation (or AI tools to help)\n\n## Step 1: Identify Your Core Message\n\nStart with your key takeaway. What's the one thing you want audiences to remember?\n\n## Step 2: Map to Platform Formats\n\nTwitter: Thread or single post?\nLinkedIn: Post or article?\nInstagram: Feed, story, or reel?\n\n## Step 3: Adapt, Don't Duplicate\n\nTailor the message, format, and tone for each platform's audience.\n\n## Step 4: Maintain Voice Consistency\n\nYour brand should be recognizable across all channels.\n\n## Step 5: Schedule and Publish\n\nUse a scheduling tool or automation to maintain consistency.\n\n## Conclusion\n\n{hook} Follow this framework and watch your reach multiply.",
            hook_title(hook)
        ),
        (Platform::Facebook, "post") => format!(
            "{hook} 🎯\n\n{main}\n\nHere's what I've discovered about content distribution...\n\n[Rest of your content adapted for Facebook's format]\n\nWhat do you think? Drop a comment below! 💬\n\n#ContentStrategy #SocialMedia"
        ),
        (Platform::Facebook, "story") => format!(
            "{}\n\nTap for more 👆\n\n[Adapted for Facebook Stories format]",
            truncate_chars(hook, 80)
        ),
        _ => return None,
    };
    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Hello world. This is a test.";

    #[test]
    fn test_mock_generation_is_deterministic() {
        let a = generate_mock_content(SOURCE, Platform::Linkedin, "post");
        let b = generate_mock_content(SOURCE, Platform::Linkedin, "post");
        assert_eq!(a, b);
    }

    #[test]
    fn test_twitter_thread_carries_hook() {
        let out = generate_mock_content(SOURCE, Platform::Twitter, "thread");
        assert!(out.contains("Hello world."));
        assert!(out.starts_with("🧵 Thread: Hello world."));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_hook_is_first_period_terminated_prefix() {
        assert_eq!(hook_of("Hello world. This is a test."), "Hello world.");
        assert_eq!(hook_of("No period here"), "No period here.");
        assert_eq!(hook_of("  padded. rest"), "padded.");
    }

    #[test]
    fn test_empty_source_yields_degenerate_output_not_error() {
        assert_eq!(hook_of(""), "");
        assert_eq!(hook_of("   "), "");
        let out = generate_mock_content("", Platform::Twitter, "thread");
        assert!(out.starts_with("🧵 Thread: "));
    }

    #[test]
    fn test_unknown_format_falls_back_to_adaptation_marker() {
        let out = generate_mock_content(SOURCE, Platform::Twitter, "caption");
        assert!(out.contains("[Content adapted for twitter - caption]"));
        assert!(out.starts_with("Hello world."));
    }

    #[test]
    fn test_every_catalog_pair_has_a_canned_body() {
        use crate::catalog::{config, Platform};
        for platform in Platform::ALL {
            for format in config(platform).formats {
                let out = generate_mock_content(SOURCE, platform, format);
                assert!(
                    !out.contains("[Content adapted for"),
                    "{platform}/{format} should have a canned response"
                );
            }
        }
    }

    #[test]
    fn test_listicle_title_drops_hook_period() {
        let out = generate_mock_content(SOURCE, Platform::Blog, "listicle");
        assert!(out.starts_with("# 5 Ways to Hello world\n"));
    }

    #[test]
    fn test_follow_up_lowercases_hook() {
        let out = generate_mock_content(SOURCE, Platform::Email, "follow-up");
        assert!(out.contains("Following up on hello world."));
    }
}
