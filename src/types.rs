// src/types.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One structured job posting as extracted from a page by the model.
///
/// Serde defaults keep partially filled model output usable: the robust
/// prompt instructs the model to emit every key, but the default prompt
/// makes no such promise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Source page, attached by the pipeline after extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn default_role() -> String {
    "Unknown Role".to_string()
}

fn default_experience() -> String {
    "Not specified".to_string()
}

/// One project in the portfolio: its tech stack tokens and a showcase link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub tech_stack: Vec<String>,
    pub link: String,
}

/// A portfolio link whose entry overlapped the queried skill set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedLink {
    pub link: String,
}

/// Requested register for the generated outreach email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Friendly,
    Concise,
    Technical,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Concise => "Concise",
            Tone::Technical => "Technical",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
