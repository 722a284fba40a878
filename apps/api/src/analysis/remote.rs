//! Remote analysis — the LLM-backed analyzer behind a pluggable trait.
//!
//! The engine holds an `Arc<dyn RemoteAnalyzer>` so the backend can be
//! swapped (or stubbed in tests) without touching the orchestration or
//! handler code. The remote response is never trusted as-is: it must
//! deserialize into the typed result shape and pass the range checks
//! below, otherwise the caller falls back to the local path.

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::content::MAX_STRENGTHS;
use crate::analysis::skills::MAX_SKILLS;
use crate::llm_client::prompts::{
    render_cv_prompt, render_profile_prompt, CV_ANALYSIS_SYSTEM, PROFILE_ANALYSIS_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::analysis::{AnalysisResult, CvAnalysis};
use crate::models::profile::Profile;

#[derive(Debug, Error)]
pub enum RemoteAnalysisError {
    /// Transport, API, or JSON-shape failure from the LLM boundary.
    /// Missing required fields and unknown sector names surface here as
    /// parse errors.
    #[error("LLM call failed: {0}")]
    Transport(#[from] LlmError),

    #[error("confidence {0} out of range (expected 0..=1)")]
    ConfidenceOutOfRange(f64),
}

/// The remote analyzer seam. Implementations must return an already
/// validated result or a `RemoteAnalysisError` — never a half-checked
/// payload.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    async fn analyze_profile(&self, profile: &Profile)
        -> Result<AnalysisResult, RemoteAnalysisError>;

    async fn analyze_cv(
        &self,
        cv_text: &str,
        profile: Option<&Profile>,
    ) -> Result<CvAnalysis, RemoteAnalysisError>;
}

/// OpenAI-backed analyzer. One call, bounded timeout, no retry — failure
/// handling is the engine's fallback policy.
pub struct OpenAiAnalyzer {
    llm: LlmClient,
}

impl OpenAiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RemoteAnalyzer for OpenAiAnalyzer {
    async fn analyze_profile(
        &self,
        profile: &Profile,
    ) -> Result<AnalysisResult, RemoteAnalysisError> {
        let prompt = render_profile_prompt(profile);
        let result: AnalysisResult =
            self.llm.call_json(&prompt, PROFILE_ANALYSIS_SYSTEM).await?;
        validate_analysis(result)
    }

    async fn analyze_cv(
        &self,
        cv_text: &str,
        profile: Option<&Profile>,
    ) -> Result<CvAnalysis, RemoteAnalysisError> {
        let prompt = render_cv_prompt(cv_text, profile);
        let cv: CvAnalysis = self.llm.call_json(&prompt, CV_ANALYSIS_SYSTEM).await?;
        validate_cv_analysis(cv)
    }
}

/// Range-checks and normalizes a remote analysis result. Deserialization
/// already guarantees the required fields and the closed sector set; this
/// enforces the numeric contract and the strengths cap.
pub fn validate_analysis(mut result: AnalysisResult) -> Result<AnalysisResult, RemoteAnalysisError> {
    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(RemoteAnalysisError::ConfidenceOutOfRange(result.confidence));
    }
    result.strengths.truncate(MAX_STRENGTHS);
    Ok(result)
}

pub fn validate_cv_analysis(mut cv: CvAnalysis) -> Result<CvAnalysis, RemoteAnalysisError> {
    cv.analysis = validate_analysis(cv.analysis)?;
    cv.skills.truncate(MAX_SKILLS);
    Ok(cv)
}
