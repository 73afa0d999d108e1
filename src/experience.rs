// src/experience.rs
//! Regex cascade that infers a years-of-experience figure from posting text.
//! Used when the model does not supply one reliably.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s+of\s+[\w\s]*experience",
        r"(?i)minimum\s+of\s+(\d+)\+?\s*(?:years?|yrs?)",
        r"(?i)(?:typically|around|approximately)?\s*(\d+)\+?\s*(?:years?|yrs?)\b",
        r"(?i)experience\D{0,60}?(\d+)\+?\s*(?:years?|yrs?)",
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s+technical",
        r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s+in\s+\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid experience pattern"))
    .collect()
});

/// Infer the required years of experience mentioned in `text`.
///
/// Every numeric capture across all patterns is collected and the maximum
/// wins, formatted as `"<N> years"`. Returns `"Not specified"` when nothing
/// matches. Best run on a Qualifications/Responsibilities excerpt, falling
/// back to the full page text.
pub fn infer_experience(text: &str) -> String {
    let mut found: Vec<u32> = Vec::new();
    for pattern in YEAR_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                if let Ok(years) = m.as_str().parse::<u32>() {
                    found.push(years);
                }
            }
        }
    }
    match found.into_iter().max() {
        Some(years) => format!("{} years", years),
        None => "Not specified".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_match() {
        assert_eq!(infer_experience("5+ years of backend experience"), "5 years");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(infer_experience("no mention"), "Not specified");
        assert_eq!(infer_experience(""), "Not specified");
    }

    #[test]
    fn test_max_of_multiple_matches() {
        let text = "3 years of cloud experience required, minimum of 7 years overall";
        assert_eq!(infer_experience(text), "7 years");
    }

    #[test]
    fn test_phrasing_variants() {
        assert_eq!(infer_experience("Minimum of 4 yrs in the field"), "4 years");
        assert_eq!(infer_experience("10+ years technical leadership"), "10 years");
        assert_eq!(infer_experience("2 years in distributed systems"), "2 years");
        assert_eq!(infer_experience("experience of at least 6 years"), "6 years");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_experience("5 YEARS OF PYTHON EXPERIENCE"), "5 years");
    }
}
