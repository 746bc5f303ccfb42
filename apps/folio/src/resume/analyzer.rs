//! Resume assessment. Wraps resume text in a fixed prompt and forwards it to the
//! completion service.
//!
//! The response is opaque text. Section structure is the service's responsibility;
//! nothing here parses or validates it.

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::resume::prompts::{ASSESSMENT_PROMPT_TEMPLATE, DEFAULT_ASSESSMENT_MODEL};

/// Builds the assessment prompt. `resume_text` is embedded verbatim.
pub fn build_assessment_prompt(resume_text: &str) -> String {
    ASSESSMENT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

/// Holds the completion client and model for resume assessments.
/// Construct once and pass it wherever an assessment is needed.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    llm: Arc<dyn CompletionClient>,
    model: String,
}

impl ResumeAnalyzer {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self {
            llm,
            model: DEFAULT_ASSESSMENT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one assessment request for any text, empty included, and returns
    /// the service's text unchanged. Service failures surface as `AppError::ExternalService`.
    pub async fn get_resume_assessment(&self, resume_text: &str) -> Result<String, AppError> {
        let prompt = build_assessment_prompt(resume_text);
        info!(
            "Requesting resume assessment (model: {}, resume_chars: {})",
            self.model,
            resume_text.chars().count()
        );

        let assessment = self.llm.complete(&self.model, &prompt).await?;
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    /// Records every call and answers with a fixed completion.
    struct RecordingClient {
        reply: String,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingClient {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), prompt.to_string()));
            Ok(self.reply.clone())
        }
    }

    struct RateLimitedClient;

    #[async_trait]
    impl CompletionClient for RateLimitedClient {
        async fn complete(&self, _model: &str, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::RateLimited("quota exceeded".to_string()))
        }
    }

    const RESUME: &str = "Jasaswi Das\nSoftware Engineer\n  - Built {weird} things in Rust & Python  \n";

    #[test]
    fn test_prompt_embeds_resume_verbatim() {
        let prompt = build_assessment_prompt(RESUME);
        assert!(prompt.contains(RESUME));
        assert!(prompt.ends_with(&format!("{RESUME}\n")));
    }

    #[test]
    fn test_prompt_requests_four_sections() {
        let prompt = build_assessment_prompt("x");
        assert!(prompt.contains("1. Skill Detection"));
        assert!(prompt.contains("2. ATS Score (0-100)"));
        assert!(prompt.contains("3. Job Suggestions (Top 3 roles)"));
        assert!(prompt.contains("4. Improvement Tips"));
    }

    #[test]
    fn test_placeholder_inside_resume_is_not_expanded() {
        let text = "literal {resume_text} marker";
        let prompt = build_assessment_prompt(text);
        assert_eq!(prompt.matches("{resume_text}").count(), 1);
        assert!(prompt.contains(text));
    }

    #[tokio::test]
    async fn test_assessment_forwards_prompt_and_returns_raw_text() {
        let client = Arc::new(RecordingClient::new("Skills: Rust\nATS Score: 82"));
        let analyzer = ResumeAnalyzer::new(client.clone());

        let assessment = analyzer.get_resume_assessment(RESUME).await.unwrap();
        assert_eq!(assessment, "Skills: Rust\nATS Score: 82");

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gpt-4o");
        assert_eq!(calls[0].1, build_assessment_prompt(RESUME));
    }

    #[tokio::test]
    async fn test_custom_model_is_forwarded() {
        let client = Arc::new(RecordingClient::new("ok"));
        let analyzer = ResumeAnalyzer::new(client.clone()).with_model("gpt-4o-mini");
        assert_eq!(analyzer.model(), "gpt-4o-mini");

        analyzer.get_resume_assessment("resume").await.unwrap();
        assert_eq!(client.calls.lock().unwrap()[0].0, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_empty_resume_still_forwarded() {
        let client = Arc::new(RecordingClient::new("service reply"));
        let analyzer = ResumeAnalyzer::new(client.clone());

        let assessment = analyzer.get_resume_assessment("").await.unwrap();
        assert_eq!(assessment, "service reply");

        let blank = analyzer.get_resume_assessment("   \n\t").await.unwrap();
        assert_eq!(blank, "service reply");

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, build_assessment_prompt(""));
        assert!(calls[1].1.ends_with("Resume Content:\n   \n\t\n"));
    }

    #[tokio::test]
    async fn test_service_failure_propagates_unchanged() {
        let analyzer = ResumeAnalyzer::new(Arc::new(RateLimitedClient));

        let err = analyzer.get_resume_assessment("resume").await.unwrap_err();
        match err {
            AppError::ExternalService(LlmError::RateLimited(msg)) => {
                assert_eq!(msg, "quota exceeded")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
