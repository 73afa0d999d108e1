// src/lib.rs
//! Cold-outreach email generator: scrape a job posting page, extract
//! structured job data through a completion model, match required skills
//! against a project portfolio, and compose a personalized email.

pub mod chain;
pub mod config;
pub mod email;
pub mod error;
pub mod experience;
pub mod model;
pub mod pipeline;
pub mod portfolio;
pub mod scrape;
pub mod skills;
pub mod types;
pub mod utils;

pub use chain::{Chain, PromptMode, SUMMARY_FALLBACK};
pub use config::AppConfig;
pub use email::EmailDraft;
pub use error::{ExtractionError, ModelError};
pub use experience::infer_experience;
pub use model::{CompletionModel, GroqClient};
pub use pipeline::{JobOutreach, OutreachPipeline};
pub use portfolio::Portfolio;
pub use scrape::PageFetcher;
pub use skills::normalize_skill;
pub use types::{JobPosting, MatchedLink, PortfolioEntry, Tone};
pub use utils::clean_text;
