use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contract type of an opportunity. The filter engine's "job" bucket
/// covers FullTime, PartTime, and Contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "full-time")]
    FullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "internship")]
    Internship,
    #[serde(rename = "training")]
    Training,
    /// Anything the datastore carries outside the fixed taxonomy.
    #[serde(rename = "other", other)]
    Other,
}

impl JobType {
    /// True for employment contracts (as opposed to internships/training).
    pub fn is_job(self) -> bool {
        matches!(self, JobType::FullTime | JobType::PartTime | JobType::Contract)
    }
}

/// A job opportunity as returned to the front-end (camelCase), with the
/// profile-dependent `match_score` attached. The score is derived at query
/// time and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    /// Free-form sector string from the datastore; resolved against the
    /// closed taxonomy only when scoring.
    pub sector: String,
    pub job_type: JobType,
    pub experience_level: String,
    pub location: String,
    pub is_remote: bool,
    pub description: String,
    pub requirements: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub match_score: u8,
}

/// Row form of the `job_opportunities` table (snake_case columns).
#[derive(Debug, Clone, Deserialize)]
pub struct OpportunityRow {
    pub id: Uuid,
    pub title: String,
    pub company_name: Option<String>,
    pub sector: String,
    pub job_type: JobType,
    pub experience_level: Option<String>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub preferred_skills: Option<Vec<String>>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<OpportunityRow> for Opportunity {
    fn from(row: OpportunityRow) -> Self {
        Opportunity {
            id: row.id,
            title: row.title,
            company_name: row
                .company_name
                .unwrap_or_else(|| "Azienda non specificata".to_string()),
            sector: row.sector,
            job_type: row.job_type,
            experience_level: row.experience_level.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            is_remote: row.is_remote.unwrap_or(false),
            description: row.description.unwrap_or_default(),
            requirements: row.requirements.unwrap_or_default(),
            required_skills: row.required_skills.unwrap_or_default(),
            preferred_skills: row.preferred_skills.unwrap_or_default(),
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            created_at: row.created_at,
            match_score: 0,
        }
    }
}
