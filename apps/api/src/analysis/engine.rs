//! Profile analysis engine — validation, remote-first policy, and the
//! local fallback composition.
//!
//! Policy: validate input first, then try the remote analyzer once (if
//! configured); on ANY remote failure — transport, malformed JSON, shape
//! or range violation — log the distinct reason and run the local path
//! instead. Remote errors never reach the caller. The local path touches
//! only in-memory constants and validated input, so it cannot fail.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::content;
use crate::analysis::remote::RemoteAnalyzer;
use crate::analysis::scorer::{score_profile, score_text};
use crate::analysis::skills::extract_skills;
use crate::models::analysis::{AnalysisResult, AnalysisSource, CvAnalysis};
use crate::models::profile::Profile;

/// Minimum biography length for a profile analysis.
pub const MIN_BIOGRAPHY_CHARS: usize = 50;
/// Minimum text length for a CV analysis.
pub const MIN_CV_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input too short or missing. Reported to the caller verbatim,
    /// never retried.
    #[error("{0}")]
    Validation(String),
}

/// Orchestrates the remote and local analysis paths. Cheap to clone and
/// shared across handlers via `AppState`.
#[derive(Clone)]
pub struct AnalysisEngine {
    remote: Option<Arc<dyn RemoteAnalyzer>>,
}

impl AnalysisEngine {
    pub fn new(remote: Option<Arc<dyn RemoteAnalyzer>>) -> Self {
        if remote.is_none() {
            info!("No remote analyzer configured — analysis runs local-only");
        }
        Self { remote }
    }

    /// Analyzes a full profile. Remote-first, local fallback.
    pub async fn analyze_profile(
        &self,
        profile: &Profile,
    ) -> Result<(AnalysisResult, AnalysisSource), AnalysisError> {
        if profile.biography.trim().chars().count() < MIN_BIOGRAPHY_CHARS {
            return Err(AnalysisError::Validation(
                "Biografia troppo breve per un'analisi accurata (minimo 50 caratteri)"
                    .to_string(),
            ));
        }

        if let Some(remote) = &self.remote {
            match remote.analyze_profile(profile).await {
                Ok(result) => return Ok((result, AnalysisSource::Remote)),
                Err(reason) => {
                    warn!("Remote profile analysis failed, using local fallback: {reason}");
                }
            }
        }

        Ok((local_profile_analysis(profile), AnalysisSource::Local))
    }

    /// Analyzes extracted CV text. Same policy as profile analysis; the
    /// profile, when present, only enriches the strengths section of the
    /// local result and the remote prompt context.
    pub async fn analyze_cv(
        &self,
        cv_text: &str,
        profile: Option<&Profile>,
    ) -> Result<(CvAnalysis, AnalysisSource), AnalysisError> {
        if cv_text.trim().chars().count() < MIN_CV_CHARS {
            return Err(AnalysisError::Validation(
                "Contenuto CV troppo breve per un'analisi accurata (minimo 100 caratteri)"
                    .to_string(),
            ));
        }

        if let Some(remote) = &self.remote {
            match remote.analyze_cv(cv_text, profile).await {
                Ok(cv) => return Ok((cv, AnalysisSource::Remote)),
                Err(reason) => {
                    warn!("Remote CV analysis failed, using local fallback: {reason}");
                }
            }
        }

        Ok((local_cv_analysis(cv_text, profile), AnalysisSource::Local))
    }
}

/// The deterministic local path: keyword scorer + content tables.
fn local_profile_analysis(profile: &Profile) -> AnalysisResult {
    let score = score_profile(profile);
    AnalysisResult {
        main_sector: score.sector,
        description: content::sector_description(score.sector),
        confidence: score.confidence,
        strengths: content::strengths_for(profile, score.sector),
        recommendations: content::recommendations_for(score.sector),
        skill_gaps: content::skill_gaps_for(score.sector),
        career_paths: content::career_paths_for(score.sector),
    }
}

fn local_cv_analysis(cv_text: &str, profile: Option<&Profile>) -> CvAnalysis {
    let score = score_text(cv_text);
    let empty = Profile::default();
    let profile = profile.unwrap_or(&empty);
    CvAnalysis {
        analysis: AnalysisResult {
            main_sector: score.sector,
            description: content::cv_summary(score.sector),
            confidence: score.confidence,
            strengths: content::strengths_for(profile, score.sector),
            recommendations: content::recommendations_for(score.sector),
            skill_gaps: content::skill_gaps_for(score.sector),
            career_paths: content::career_paths_for(score.sector),
        },
        skills: extract_skills(cv_text),
    }
}
