//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, AnalysisSource, CvAnalysis};
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub source: AnalysisSource,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysisRequest {
    pub cv_text: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct CvAnalysisResponse {
    pub source: AnalysisSource,
    pub analysis: CvAnalysis,
}

/// POST /api/v1/analysis/profile
///
/// Analyzes a profile: remote LLM when configured, local keyword scoring
/// otherwise or on any remote failure.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let (analysis, source) = state.engine.analyze_profile(&profile).await?;
    Ok(Json(AnalysisResponse { source, analysis }))
}

/// POST /api/v1/analysis/cv
///
/// Analyzes already-extracted CV text. The optional profile enriches the
/// result but is not required.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    Json(request): Json<CvAnalysisRequest>,
) -> Result<Json<CvAnalysisResponse>, AppError> {
    let (analysis, source) = state
        .engine
        .analyze_cv(&request.cv_text, request.profile.as_ref())
        .await?;
    Ok(Json(CvAnalysisResponse { source, analysis }))
}
