//! Platform catalog — the static source of truth for target channels.
//!
//! Each platform maps to display metadata, an ordered format list (first is
//! the default), and an optional hard character limit. Generation requests
//! are validated against this table; nothing else in the pipeline is allowed
//! to invent a platform/format pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
    Instagram,
    Email,
    Blog,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Email,
        Platform::Blog,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Email => "email",
            Platform::Blog => "blog",
            Platform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "instagram" => Ok(Platform::Instagram),
            "email" => Ok(Platform::Email),
            "blog" => Ok(Platform::Blog),
            "facebook" => Ok(Platform::Facebook),
            other => Err(format!("Unknown platform '{other}'")),
        }
    }
}

/// Static per-platform configuration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformConfig {
    pub name: &'static str,
    pub icon: &'static str,
    pub formats: &'static [&'static str],
    pub character_limit: Option<usize>,
    pub color: &'static str,
}

const TWITTER: PlatformConfig = PlatformConfig {
    name: "Twitter/X",
    icon: "Twitter",
    formats: &["thread", "post", "reply"],
    character_limit: Some(280),
    color: "#1DA1F2",
};

const LINKEDIN: PlatformConfig = PlatformConfig {
    name: "LinkedIn",
    icon: "Linkedin",
    formats: &["post", "article", "comment"],
    character_limit: Some(3000),
    color: "#0A66C2",
};

const INSTAGRAM: PlatformConfig = PlatformConfig {
    name: "Instagram",
    icon: "Instagram",
    formats: &["caption", "story", "reel"],
    character_limit: Some(2200),
    color: "#E4405F",
};

const EMAIL: PlatformConfig = PlatformConfig {
    name: "Email",
    icon: "Mail",
    formats: &["newsletter", "announcement", "follow-up"],
    character_limit: None,
    color: "#EA4335",
};

const BLOG: PlatformConfig = PlatformConfig {
    name: "Blog Post",
    icon: "FileText",
    formats: &["article", "listicle", "tutorial"],
    character_limit: None,
    color: "#6366F1",
};

const FACEBOOK: PlatformConfig = PlatformConfig {
    name: "Facebook",
    icon: "Facebook",
    formats: &["post", "story"],
    character_limit: Some(63206),
    color: "#1877F2",
};

pub fn config(platform: Platform) -> &'static PlatformConfig {
    match platform {
        Platform::Twitter => &TWITTER,
        Platform::Linkedin => &LINKEDIN,
        Platform::Instagram => &INSTAGRAM,
        Platform::Email => &EMAIL,
        Platform::Blog => &BLOG,
        Platform::Facebook => &FACEBOOK,
    }
}

/// The first catalog format is the platform's default.
pub fn default_format(platform: Platform) -> &'static str {
    config(platform).formats[0]
}

/// Returns true when `format` belongs to the platform's catalog entry.
pub fn format_is_valid(platform: Platform, format: &str) -> bool {
    config(platform).formats.contains(&format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_platform_has_formats() {
        for platform in Platform::ALL {
            assert!(
                !config(platform).formats.is_empty(),
                "{platform} must declare at least one format"
            );
        }
    }

    #[test]
    fn test_twitter_limit_is_280() {
        assert_eq!(config(Platform::Twitter).character_limit, Some(280));
    }

    #[test]
    fn test_email_and_blog_are_unlimited() {
        assert_eq!(config(Platform::Email).character_limit, None);
        assert_eq!(config(Platform::Blog).character_limit, None);
    }

    #[test]
    fn test_default_format_is_first_in_list() {
        assert_eq!(default_format(Platform::Twitter), "thread");
        assert_eq!(default_format(Platform::Linkedin), "post");
        assert_eq!(default_format(Platform::Instagram), "caption");
    }

    #[test]
    fn test_format_validation() {
        assert!(format_is_valid(Platform::Twitter, "thread"));
        assert!(format_is_valid(Platform::Blog, "tutorial"));
        assert!(!format_is_valid(Platform::Twitter, "caption"));
        assert!(!format_is_valid(Platform::Facebook, "reel"));
    }

    #[test]
    fn test_platform_round_trips_through_str() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.as_str()), Ok(platform));
        }
        assert!(Platform::from_str("myspace").is_err());
    }

    #[test]
    fn test_platform_serde_uses_lowercase() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
        let back: Platform = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(back, Platform::Facebook);
    }
}
