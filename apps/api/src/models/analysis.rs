use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::Sector;

/// A suggested career path within the recommended sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub timeframe: String,
    pub difficulty: String,
}

/// The structured result of a profile analysis. Constructed fresh per
/// request, never mutated, immediately serialized or discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub main_sector: Sector,
    pub description: String,
    /// Heuristic certainty in [0, 1]; the local path never reports
    /// below 0.6.
    pub confidence: f64,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub career_paths: Vec<CareerPath>,
}

/// CV analysis: same shape as a profile analysis, plus the flat list of
/// skills found in the CV text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub skills: Vec<String>,
}

/// Which path produced an analysis. Surfaced to the caller so the
/// front-end can label the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Remote,
    Local,
}
