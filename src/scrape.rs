// src/scrape.rs
//! Page-fetch collaborator and HTML text extraction helpers.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::info;

static SECTION_HINT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Qualifications|Requirements|Experience|Responsibilities)")
        .expect("invalid section pattern")
});

/// Blocking-style page fetcher. One fetch per request, no concurrency,
/// timeout configurable rather than hardcoded.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the raw HTML of a job posting page. Navigation failure or a
    /// non-success status is an error; the caller decides what aborts.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching job page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error fetching {}: {}", url, response.status());
        }

        response.text().await.context("Failed to read response body")
    }
}

/// Join the stripped text nodes of the page body, one per line.
pub fn page_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            collect_text(body.text(), &mut lines);
        }
    }

    // Fragments without an explicit body still carry text.
    if lines.is_empty() {
        collect_text(document.root_element().text(), &mut lines);
    }

    lines.join("\n")
}

fn collect_text<'a>(nodes: impl Iterator<Item = &'a str>, lines: &mut Vec<String>) {
    for node in nodes {
        let trimmed = node.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
}

/// Text of every `<section>`/`<div>` mentioning qualification-style
/// headings. The experience heuristic prefers this excerpt over the full
/// page; empty output means no such section was found.
pub fn relevant_sections(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut candidates: Vec<String> = Vec::new();

    if let Ok(selector) = Selector::parse("section, div") {
        for element in document.select(&selector) {
            let text = element.text().collect::<Vec<_>>().join("\n");
            if SECTION_HINT.is_match(&text) {
                candidates.push(text);
            }
        }
    }

    candidates.join("\n")
}
