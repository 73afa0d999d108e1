// src/chain.rs
//! Prompted operations against the completion service: job extraction,
//! summarization, and email composition, each behind bounded retry.

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::error::{ExtractionError, ModelError};
use crate::model::CompletionModel;
use crate::types::{JobPosting, MatchedLink, Tone};

/// Fallback returned when summarization exhausts its retries.
pub const SUMMARY_FALLBACK: &str = "Summary not available due to an error.";

/// Which extraction prompt the chain sends. Selected once at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// Loose single-job extraction.
    Default,
    /// Stricter schema enforcement with explicit field presence rules.
    #[default]
    Robust,
}

pub struct Chain {
    model: Arc<dyn CompletionModel>,
    prompt_mode: PromptMode,
    max_retries: usize,
}

impl Chain {
    pub fn new(model: Arc<dyn CompletionModel>, prompt_mode: PromptMode, max_retries: usize) -> Self {
        Self {
            model,
            prompt_mode,
            // At least one attempt, or every operation would degrade unconditionally.
            max_retries: max_retries.max(1),
        }
    }

    /// Extract structured job postings from cleaned page text. One model
    /// call, no retry here; parse failures surface for the caller's loop.
    pub async fn extract_jobs(&self, cleaned_text: &str) -> Result<Vec<JobPosting>, ExtractionError> {
        let prompt = match self.prompt_mode {
            PromptMode::Robust => robust_extract_prompt(cleaned_text),
            PromptMode::Default => default_extract_prompt(cleaned_text),
        };

        let raw = self.model.complete(&prompt).await?;
        parse_jobs(&raw)
    }

    /// Retry wrapper around [`extract_jobs`]: up to `max_retries` attempts,
    /// each failure or empty result logged and forgiven. Exhaustion yields
    /// an empty vec, which downstream must treat as "no job found".
    pub async fn try_extract_jobs(&self, cleaned_text: &str) -> Vec<JobPosting> {
        for attempt in 1..=self.max_retries {
            match self.extract_jobs(cleaned_text).await {
                Ok(jobs) if !jobs.is_empty() => return jobs,
                Ok(_) => warn!("Job extraction returned no jobs on attempt {}", attempt),
                Err(e) => warn!("Job extraction failed on attempt {}: {}", attempt, e),
            }
        }
        Vec::new()
    }

    /// Summarize a job description in under `max_words` words.
    pub async fn summarize(&self, text: &str, max_words: usize) -> Result<String, ModelError> {
        let prompt = format!(
            r#"### CONTEXT:
{text}

### INSTRUCTION:
Summarize the job description above in under {max_words} words.
Focus on the core responsibilities and the overall goal of the role.
Output only the summary. Do not prefix it with 'Summary:' or any other label."#,
            text = text.trim(),
            max_words = max_words,
        );

        let summary = self.model.complete(&prompt).await?;
        Ok(summary.trim().to_string())
    }

    /// Best-effort summarization: bounded retry, then the fixed fallback
    /// string. Never blocks the pipeline.
    pub async fn summarize_or_fallback(&self, text: &str, max_words: usize) -> String {
        for attempt in 1..=self.max_retries {
            match self.summarize(text, max_words).await {
                Ok(summary) => return summary,
                Err(e) => warn!("Summarization failed on attempt {}: {}", attempt, e),
            }
        }
        SUMMARY_FALLBACK.to_string()
    }

    /// Compose the outreach email. Carries the same bounded retry as the
    /// sibling operations; after the last attempt the error propagates
    /// rather than degrading to a fabricated email.
    pub async fn write_mail(
        &self,
        job: &JobPosting,
        links: &[MatchedLink],
        job_url: Option<&str>,
        tone: Tone,
    ) -> Result<String, ModelError> {
        let link_list = links
            .iter()
            .map(|l| l.link.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = mail_prompt(
            &job.description,
            &link_list,
            job_url.unwrap_or("Not Provided"),
            tone,
        );

        for attempt in 1..self.max_retries {
            match self.model.complete(&prompt).await {
                Ok(text) => return Ok(text.trim().to_string()),
                Err(e) => warn!("Email composition failed on attempt {}: {}", attempt, e),
            }
        }
        let text = self.model.complete(&prompt).await?;
        Ok(text.trim().to_string())
    }
}

/// Parse the model's raw response as one job object or an array of them.
fn parse_jobs(raw: &str) -> Result<Vec<JobPosting>, ExtractionError> {
    let payload = isolate_json_payload(raw)
        .ok_or_else(|| ExtractionError::Parse("no JSON object or array in output".to_string()))?;

    let value: Value =
        serde_json::from_str(payload).map_err(|e| ExtractionError::Parse(e.to_string()))?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| ExtractionError::Parse(e.to_string()))
            })
            .collect(),
        object @ Value::Object(_) => {
            let job = serde_json::from_value(object)
                .map_err(|e| ExtractionError::Parse(e.to_string()))?;
            Ok(vec![job])
        }
        other => Err(ExtractionError::Parse(format!(
            "expected object or array, got {}",
            other
        ))),
    }
}

// Models wrap JSON in code fences or prose despite instructions; take the
// span from the first opening brace/bracket to the last closing one.
fn isolate_json_payload(raw: &str) -> Option<&str> {
    let start = raw.find(|c: char| c == '{' || c == '[')?;
    let end = raw.rfind(|c: char| c == '}' || c == ']')?;
    (end >= start).then(|| &raw[start..=end])
}

fn default_extract_prompt(cleaned_text: &str) -> String {
    format!(
        r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
The scraped text is from a job posting page. Extract only the job that is clearly described on this page.
Your job is to extract the job posting and return it in JSON format containing the following keys: `role`, `experience`, `skills`, and `description`.
Extract a JSON array of distinct skill names and tools mentioned in the job description.
Ignore full sentences or descriptions. Only output skill/tool names as strings.
Only return the valid JSON.
Do not assume multiple jobs exist.
### VALID JSON (NO PREAMBLE):"#,
        page_data = cleaned_text,
    )
}

fn robust_extract_prompt(cleaned_text: &str) -> String {
    format!(
        r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
The scraped text is from a job posting page. Extract only one job and return it in this exact JSON format:

{{
  "role": "...",
  "experience": "...",
  "skills": ["...", "..."],
  "description": "Summarize the job responsibilities in 4-6 sentences, covering the core responsibilities, the purpose of the role, and the team or product this role supports."
}}

- Always extract a `role`, even if it needs to be inferred.
- `skills` must include technical tools, languages, or platforms, especially those mentioned in Qualifications or Responsibilities.
- If a field is missing, leave it as an empty string or empty list, but DO NOT omit the key.
Output clean, **valid JSON** only."#,
        page_data = cleaned_text,
    )
}

fn mail_prompt(job_description: &str, link_list: &str, job_url: &str, tone: Tone) -> String {
    format!(
        r#"### JOB DESCRIPTION:
{job_description}

### JOB LINK:
{job_url}

### INSTRUCTION:
You are Karthik Mohan, a business development executive at Tata Consultancy Services. Tata Consultancy Services (TCS) is an AI & Software Consulting company that helps global enterprises build secure, scalable, and intelligent systems across domains.

Your job is to write a personalized cold email to the client regarding the job mentioned above. Highlight how TCS can support the technical goals of the position through our proven capabilities.

Focus on:
- How our engineering teams, domain experts, and cross-functional consultants align with the technical demands of the role.
- Specific types of projects we've delivered in areas like cloud platforms, scalable architectures, DevOps, cybersecurity, and AI.
- Relevant accomplishments that demonstrate the value we bring to similar roles/teams.

Reference **up to 4 most relevant portfolio links** from this list: {link_list}. Do not present them as a bullet list - weave them naturally into the explanation.

Include the job link explicitly in the email body.

Write the email in a {tone} tone.

End the email with this signature, each on a new line:
Karthik Mohan
Business Development Executive
Tata Consultancy Services

Avoid generic phrases or long intros. Do not include any job requirements or candidate qualifications.
Do not add any preamble before the email starts.

### EMAIL (NO PREAMBLE):"#,
        job_description = job_description,
        job_url = job_url,
        link_list = link_list,
        tone = tone,
    )
}
