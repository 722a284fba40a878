use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single work-experience entry. Stored as-is (camelCase JSON) in the
/// datastore's `experiences` column, so the wire and row forms coincide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub job_title: String,
    pub description: String,
    pub duration: String,
}

/// A user profile as exchanged with the front-end (camelCase).
///
/// Every field defaults to empty — the scorer and matcher treat missing
/// text as non-matching rather than erroring. `professional_references`
/// and `cv_file_path` round-trip through the datastore but play no part
/// in scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub biography: String,
    pub education: String,
    pub experiences: Vec<Experience>,
    pub soft_skills: String,
    pub certifications: String,
    pub hobbies: String,
    pub professional_references: String,
    pub cv_file_path: Option<String>,
}

/// Row form of a profile in the `user_profiles` table (snake_case columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub biography: Option<String>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<String>,
    pub certifications: Option<String>,
    pub professional_references: Option<String>,
    pub hobbies: Option<String>,
    pub soft_skills: Option<String>,
    pub cv_file_path: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            biography: row.biography.unwrap_or_default(),
            education: row.education.unwrap_or_default(),
            experiences: row.experiences.unwrap_or_default(),
            soft_skills: row.soft_skills.unwrap_or_default(),
            certifications: row.certifications.unwrap_or_default(),
            hobbies: row.hobbies.unwrap_or_default(),
            professional_references: row.professional_references.unwrap_or_default(),
            cv_file_path: row.cv_file_path,
        }
    }
}

impl Profile {
    /// Builds the row form for an upsert, stamping `updated_at` now.
    pub fn into_row(self, user_id: Uuid) -> ProfileRow {
        let now = Utc::now();
        ProfileRow {
            id: user_id,
            biography: Some(self.biography),
            experiences: Some(self.experiences),
            education: Some(self.education),
            certifications: Some(self.certifications),
            professional_references: Some(self.professional_references),
            hobbies: Some(self.hobbies),
            soft_skills: Some(self.soft_skills),
            cv_file_path: self.cv_file_path,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
