// src/utils.rs
//! Text cleaning helpers for raw scraped page content.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag pattern"));
static URLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("invalid URL pattern"));
static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9 ]+").expect("invalid charset pattern"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Clean raw scraped text down to plain `[A-Za-z0-9 ]` suitable as model input.
///
/// Passes run in a fixed order: tags, then URLs, then the character filter,
/// then whitespace collapse and trim. Later passes assume earlier ones ran.
pub fn clean_text(text: &str) -> String {
    let text = HTML_TAGS.replace_all(text, "");
    let text = URLS.replace_all(&text, "");
    let text = NON_ALNUM.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Title-case a token: first letter of every alphabetic run uppercased,
/// the rest lowercased. "unknown-tool" becomes "Unknown-Tool".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_markup_and_urls() {
        let input = "<p>Senior Engineer</p> apply at https://jobs.example.com/123 now!";
        assert_eq!(clean_text(input), "Senior Engineer apply at now");
    }

    #[test]
    fn test_clean_text_output_alphabet() {
        let inputs = [
            "hello, world! (remote)",
            "C++ / C# & Go\n\ttabs",
            "  <div>nested <b>tags</b></div>  ",
            "émigré résumé",
        ];
        for input in inputs {
            let cleaned = clean_text(input);
            assert!(
                cleaned.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
                "unexpected char in {:?}",
                cleaned
            );
            assert!(!cleaned.contains("  "), "double space in {:?}", cleaned);
            assert_eq!(cleaned, cleaned.trim());
        }
    }

    #[test]
    fn test_clean_text_idempotent() {
        let input = "5+ years, <b>Python</b> https://x.io/a?b=c\n\nRemote";
        let once = clean_text(input);
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("unknown-tool"), "Unknown-Tool");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("PYTHON3X"), "Python3X");
        assert_eq!(title_case(""), "");
    }
}
