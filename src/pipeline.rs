// src/pipeline.rs
//! End-to-end orchestration: page text in, per-job outreach bundles out.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::chain::Chain;
use crate::email::EmailDraft;
use crate::experience::infer_experience;
use crate::portfolio::Portfolio;
use crate::scrape::{page_text, relevant_sections, PageFetcher};
use crate::skills::normalize_skill;
use crate::types::{JobPosting, MatchedLink, Tone};
use crate::utils::clean_text;

const SUMMARY_MAX_WORDS: usize = 60;

/// Everything generated for one extracted job.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutreach {
    pub job: JobPosting,
    pub summary: String,
    pub links: Vec<MatchedLink>,
    pub email: EmailDraft,
}

/// One synchronous pipeline execution per submitted URL. Stateless apart
/// from the once-loaded portfolio.
pub struct OutreachPipeline {
    chain: Chain,
    portfolio: Portfolio,
    fetcher: PageFetcher,
}

impl OutreachPipeline {
    pub fn new(chain: Chain, portfolio: Portfolio, fetcher: PageFetcher) -> Self {
        Self {
            chain,
            portfolio,
            fetcher,
        }
    }

    /// Fetch a job posting page and run the full pipeline on it.
    pub async fn process_url(&self, url: &str, tone: Tone) -> Result<Vec<JobOutreach>> {
        let html = self.fetcher.fetch(url).await?;
        let full_text = page_text(&html);

        // The experience heuristic works best on Qualifications-style
        // sections; fall back to the whole page when none are found.
        let sections = relevant_sections(&html);
        let experience = if sections.trim().is_empty() {
            infer_experience(&full_text)
        } else {
            infer_experience(&sections)
        };

        self.run(&full_text, url, tone, experience).await
    }

    /// Run the pipeline on already-rendered page text (no fetch).
    pub async fn process_page_text(
        &self,
        raw_text: &str,
        url: &str,
        tone: Tone,
    ) -> Result<Vec<JobOutreach>> {
        let experience = infer_experience(raw_text);
        self.run(raw_text, url, tone, experience).await
    }

    async fn run(
        &self,
        raw_text: &str,
        url: &str,
        tone: Tone,
        experience: String,
    ) -> Result<Vec<JobOutreach>> {
        let cleaned = clean_text(raw_text);
        self.portfolio.load()?;

        let jobs = self.chain.try_extract_jobs(&cleaned).await;
        if jobs.is_empty() {
            warn!("Could not extract job info from {}", url);
            return Ok(Vec::new());
        }

        // The prompts ask for a single job, but the model is not always
        // obedient; process every job it returns.
        let mut results = Vec::with_capacity(jobs.len());
        for mut job in jobs {
            job.url = Some(url.to_string());
            job.experience = experience.clone();
            let normalized: Vec<String> = job.skills.iter().map(|s| normalize_skill(s)).collect();
            job.skills = normalized;

            info!("Extracted job: {} ({})", job.role, job.experience);

            let summary = self
                .chain
                .summarize_or_fallback(&cleaned, SUMMARY_MAX_WORDS)
                .await;

            if job.skills.is_empty() {
                warn!("No skills found for job: {}", job.role);
            }
            let links = self.portfolio.query_links(&job.skills)?;
            if links.is_empty() {
                info!("No portfolio match for job: {}", job.role);
            }

            let raw_email = self.chain.write_mail(&job, &links, Some(url), tone).await?;
            let email = EmailDraft::from_model_output(&raw_email, &job.role);

            results.push(JobOutreach {
                job,
                summary,
                links,
                email,
            });
        }

        Ok(results)
    }
}
