//! End-to-end pipeline tests with a stubbed completion model and a
//! temp-file portfolio CSV. No network is touched.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

use outreach_generator::{
    Chain, CompletionModel, ModelError, OutreachPipeline, PageFetcher, Portfolio, PromptMode,
    Tone, SUMMARY_FALLBACK,
};

const JOB_URL: &str = "https://jobs.example.com/senior-backend-engineer";

const JOB_JSON: &str = r#"{
    "role": "Senior Backend Engineer",
    "experience": "",
    "skills": ["python", "aws"],
    "description": "Design and operate backend services on cloud infrastructure."
}"#;

const PAGE_TEXT: &str = "Senior Backend Engineer \
    We are hiring a Senior Backend Engineer to design and operate our core services \
    Qualifications 5+ years of backend experience with Python and AWS required";

/// Routes stubbed responses by sniffing the prompt, mirroring the three
/// prompt templates the chain sends.
struct RoutingModel {
    fail_summaries: bool,
}

#[async_trait]
impl CompletionModel for RoutingModel {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        if prompt.contains("### EMAIL (NO PREAMBLE):") {
            return Ok(format!(
                "Subject: Supporting your backend team\n\n\
                 Hello,\n\
                 We have delivered similar platforms; see https://example.com/python-aws.\n\
                 The full posting is at {JOB_URL} for reference.\n\
                 Karthik Mohan\n\
                 Business Development Executive\n\
                 Tata Consultancy Services"
            ));
        }
        if prompt.contains("Summarize the job description above") {
            if self.fail_summaries {
                return Err(ModelError::Api {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    body: "stubbed summarize failure".to_string(),
                });
            }
            return Ok("Own and scale the core backend services.".to_string());
        }
        Ok(JOB_JSON.to_string())
    }
}

fn portfolio_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "Techstack,Links").unwrap();
    writeln!(file, "\"Python, AWS\",https://example.com/python-aws").unwrap();
    writeln!(file, "\"Java, SQL\",https://example.com/java-sql").unwrap();
    file
}

fn pipeline_with(model: RoutingModel, csv: &NamedTempFile) -> OutreachPipeline {
    let chain = Chain::new(Arc::new(model), PromptMode::Robust, 2);
    let portfolio = Portfolio::new(csv.path());
    let fetcher = PageFetcher::new(Duration::from_secs(5)).expect("fetcher");
    OutreachPipeline::new(chain, portfolio, fetcher)
}

#[tokio::test]
async fn test_single_job_end_to_end() {
    let csv = portfolio_csv();
    let pipeline = pipeline_with(
        RoutingModel {
            fail_summaries: false,
        },
        &csv,
    );

    let results = pipeline
        .process_page_text(PAGE_TEXT, JOB_URL, Tone::Formal)
        .await
        .expect("pipeline run");

    assert_eq!(results.len(), 1);
    let outreach = &results[0];

    assert_eq!(outreach.job.role, "Senior Backend Engineer");
    assert_eq!(outreach.job.url.as_deref(), Some(JOB_URL));
    // Heuristic result overrides whatever the model supplied.
    assert_eq!(outreach.job.experience, "5 years");
    // Skills come back canonicalized.
    assert_eq!(
        outreach.job.skills,
        vec!["Python".to_string(), "Amazon Web Services".to_string()]
    );

    // Exactly the matching entry's link, not the Java/SQL one.
    assert_eq!(outreach.links.len(), 1);
    assert_eq!(outreach.links[0].link, "https://example.com/python-aws");

    assert_eq!(outreach.summary, "Own and scale the core backend services.");
    assert_eq!(outreach.email.subject, "Supporting your backend team");
    assert!(outreach.email.body.contains(JOB_URL));
}

#[tokio::test]
async fn test_summarize_exhaustion_does_not_abort_pipeline() {
    let csv = portfolio_csv();
    let pipeline = pipeline_with(
        RoutingModel {
            fail_summaries: true,
        },
        &csv,
    );

    let results = pipeline
        .process_page_text(PAGE_TEXT, JOB_URL, Tone::Technical)
        .await
        .expect("pipeline run survives summarize failures");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].summary, SUMMARY_FALLBACK);
    // The rest of the bundle is intact.
    assert_eq!(results[0].job.role, "Senior Backend Engineer");
    assert!(results[0].email.body.contains(JOB_URL));
}

#[tokio::test]
async fn test_missing_portfolio_source_is_fatal() {
    let chain = Chain::new(
        Arc::new(RoutingModel {
            fail_summaries: false,
        }),
        PromptMode::Robust,
        2,
    );
    let portfolio = Portfolio::new("/nonexistent/company_portfolio.csv");
    let fetcher = PageFetcher::new(Duration::from_secs(5)).expect("fetcher");
    let pipeline = OutreachPipeline::new(chain, portfolio, fetcher);

    let result = pipeline
        .process_page_text(PAGE_TEXT, JOB_URL, Tone::Formal)
        .await;
    assert!(result.is_err());
}
