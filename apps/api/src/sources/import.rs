//! Server-side URL import.
//!
//! Fetches the page, reduces HTML to readable text, and labels the source
//! with the recognized publishing platform (YouTube, Substack, Medium,
//! Notion) or the bare hostname. Upstream transport and status failures
//! surface as fetch errors with the transport's own message.

use reqwest::Url;

use crate::errors::AppError;

/// A fetched page reduced to importable material.
#[derive(Debug, Clone)]
pub struct ImportedPage {
    pub title: Option<String>,
    pub text: String,
    pub platform: String,
}

pub async fn fetch_page(http: &reqwest::Client, raw_url: &str) -> Result<ImportedPage, AppError> {
    let url = Url::parse(raw_url)
        .map_err(|_| AppError::Validation("Please enter a valid URL".to_string()))?;
    let platform = platform_label(&url);

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch(format!("URL returned status {status}")));
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("text/html"))
        .unwrap_or(false);

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    let (title, text) = if is_html {
        (extract_title(&body), strip_html(&body))
    } else {
        (None, body)
    };

    Ok(ImportedPage {
        title,
        text,
        platform,
    })
}

/// Known publishing platforms by hostname, else the hostname itself.
pub fn platform_label(url: &Url) -> String {
    let hostname = url
        .host_str()
        .unwrap_or("Unknown")
        .trim_start_matches("www.");

    if hostname.contains("youtube.com") || hostname.contains("youtu.be") {
        "YouTube".to_string()
    } else if hostname.contains("substack.com") {
        "Substack".to_string()
    } else if hostname.contains("medium.com") {
        "Medium".to_string()
    } else if hostname.contains("notion.so") {
        "Notion".to_string()
    } else {
        hostname.to_string()
    }
}

/// ASCII case-insensitive prefix check, safe on multi-byte content.
fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// ASCII case-insensitive substring search.
fn find_ci(s: &str, needle: &str) -> Option<usize> {
    s.char_indices()
        .map(|(idx, _)| idx)
        .find(|&idx| starts_with_ci(&s[idx..], needle))
}

fn extract_title(html: &str) -> Option<String> {
    let open = find_ci(html, "<title")?;
    let start = html[open..].find('>').map(|i| open + i + 1)?;
    let end = find_ci(&html[start..], "</title>").map(|i| start + i)?;
    let title = html[start..end].trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Crude HTML-to-text: drops script/style blocks and all tags, then
/// collapses whitespace runs. Good enough for source material a user will
/// review before generating from it.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut skip_until: Option<usize> = None;
    let mut in_tag = false;

    for (idx, c) in html.char_indices() {
        if let Some(end) = skip_until {
            if idx < end {
                continue;
            }
            skip_until = None;
        }

        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }

        if c == '<' {
            let rest = &html[idx..];
            for (open, close) in [("<script", "</script>"), ("<style", "</style>")] {
                if starts_with_ci(rest, open) {
                    skip_until = find_ci(rest, close)
                        .map(|i| idx + i + close.len())
                        .or(Some(html.len()));
                    break;
                }
            }
            if skip_until.is_none() {
                in_tag = true;
            }
            continue;
        }

        text.push(c);
    }

    collapse_whitespace(&text)
}

/// Collapses space runs to one space and blank-line runs to one paragraph
/// break.
fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut pending_newlines = 0usize;
    let mut pending_space = false;

    for c in text.chars() {
        if c == '\n' {
            pending_newlines += 1;
            pending_space = false;
        } else if c.is_whitespace() {
            if pending_newlines == 0 {
                pending_space = true;
            }
        } else {
            if !collapsed.is_empty() {
                if pending_newlines > 1 {
                    collapsed.push_str("\n\n");
                } else if pending_newlines == 1 {
                    collapsed.push('\n');
                } else if pending_space {
                    collapsed.push(' ');
                }
            }
            pending_newlines = 0;
            pending_space = false;
            collapsed.push(c);
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_label_recognizes_known_hosts() {
        let cases = [
            ("https://www.youtube.com/watch?v=abc", "YouTube"),
            ("https://youtu.be/abc", "YouTube"),
            ("https://newsletter.substack.com/p/post", "Substack"),
            ("https://medium.com/@user/post", "Medium"),
            ("https://notion.so/page", "Notion"),
            ("https://www.example.com/blog", "example.com"),
        ];
        for (url, expected) in cases {
            assert_eq!(platform_label(&Url::parse(url).unwrap()), expected);
        }
    }

    #[test]
    fn test_strip_html_drops_tags_and_scripts() {
        let html = "<html><head><SCRIPT>var x = 1;</SCRIPT><style>p{}</style></head>\
                    <body><p>First paragraph.</p>\n\n<p>Second <b>bold</b> bit.</p></body></html>";
        let text = strip_html(html);
        assert!(text.contains("First paragraph."));
        assert!(text.contains("Second bold bit."));
        assert!(!text.contains("var x"));
        assert!(!text.contains("p{}"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_strip_html_collapses_whitespace() {
        assert_eq!(strip_html("a   b\n\n\n\nc"), "a b\n\nc");
    }

    #[test]
    fn test_strip_html_handles_multibyte_content() {
        let text = strip_html("<p>Émojis 🧵 survive — tags don't.</p>");
        assert_eq!(text, "Émojis 🧵 survive — tags don't.");
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("<html><head><TITLE>My Post</TITLE></head></html>"),
            Some("My Post".to_string())
        );
        assert_eq!(extract_title("<html><head></head></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_validation_error() {
        let http = reqwest::Client::new();
        let result = fetch_page(&http, "not a url").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
