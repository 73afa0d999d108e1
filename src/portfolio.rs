// src/portfolio.rs
//! CSV-backed portfolio of past projects, queried by skill overlap.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::types::{MatchedLink, PortfolioEntry};

// Row shape of the backing CSV, e.g. `"Python, AWS",https://example.com/ml`.
#[derive(Debug, Deserialize)]
struct PortfolioRow {
    #[serde(rename = "Techstack")]
    techstack: String,
    #[serde(rename = "Links")]
    links: String,
}

/// Read-only collection of portfolio entries, loaded from CSV at most once
/// per process. The `OnceCell` guard means concurrent first queries race to
/// load but only one result is kept.
pub struct Portfolio {
    path: PathBuf,
    entries: OnceCell<Vec<PortfolioEntry>>,
}

impl Portfolio {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    /// Populate the index from the backing CSV. Idempotent: a second call
    /// is a no-op. A missing source file is fatal and propagates.
    pub fn load(&self) -> Result<()> {
        self.entries()?;
        Ok(())
    }

    /// Return one link per entry whose tech stack overlaps `skills`.
    ///
    /// An empty skill list short-circuits to an empty result with a warning;
    /// no query is performed. Matching is lexical equality after trim and
    /// lowercase on both sides. The synonym table is deliberately not
    /// consulted here, so a canonicalized query skill ("Amazon Web Services")
    /// will not match a raw portfolio alias ("aws"). Known limitation.
    pub fn query_links(&self, skills: &[String]) -> Result<Vec<MatchedLink>> {
        if skills.is_empty() {
            warn!("No skills supplied, skipping portfolio query");
            return Ok(Vec::new());
        }

        let wanted: HashSet<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();

        let matched = self
            .entries()?
            .iter()
            .filter(|entry| {
                entry
                    .tech_stack
                    .iter()
                    .any(|token| wanted.contains(&token.trim().to_lowercase()))
            })
            .map(|entry| MatchedLink {
                link: entry.link.clone(),
            })
            .collect();

        Ok(matched)
    }

    /// Number of loaded entries, forcing a load if needed.
    pub fn len(&self) -> Result<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.entries()?.is_empty())
    }

    fn entries(&self) -> Result<&[PortfolioEntry]> {
        self.entries
            .get_or_try_init(|| self.read_entries())
            .map(Vec::as_slice)
    }

    fn read_entries(&self) -> Result<Vec<PortfolioEntry>> {
        let mut reader = csv::Reader::from_path(&self.path).with_context(|| {
            format!("Failed to open portfolio source: {}", self.path.display())
        })?;

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let row: PortfolioRow = row.with_context(|| {
                format!("Failed to parse portfolio row in {}", self.path.display())
            })?;
            entries.push(PortfolioEntry {
                tech_stack: row
                    .techstack
                    .split(',')
                    .map(|token| token.trim().to_string())
                    .filter(|token| !token.is_empty())
                    .collect(),
                link: row.links.trim().to_string(),
            });
        }

        info!(
            "Loaded {} portfolio entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}
