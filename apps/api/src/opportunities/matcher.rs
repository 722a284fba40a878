//! Opportunity matcher — heuristic fit score between a profile and a job
//! opportunity.
//!
//! Four independent components, each clamped to its own weight cap, summed
//! into a 0–100 score:
//! - sector affinity (cap 40): fraction of the opportunity sector's
//!   keyword set found in the biography × 40
//! - skills affinity (cap 30): fraction of required skills found in the
//!   profile's soft skills × 30
//! - experience affinity (cap 20): shared words (> 3 chars) between each
//!   experience description and the opportunity description, summed, × 2
//! - education affinity (cap 10): education words (> 3 chars) found in the
//!   opportunity requirements text, one point each
//!
//! Scoring a batch isolates failures per item: a failing opportunity
//! scores 0 and the rest of the batch proceeds.

use thiserror::Error;
use tracing::warn;

use crate::analysis::taxonomy::Sector;
use crate::models::opportunity::Opportunity;
use crate::models::profile::Profile;

const SECTOR_WEIGHT: f64 = 40.0;
const SKILLS_WEIGHT: f64 = 30.0;
const EXPERIENCE_CAP: f64 = 20.0;
const EXPERIENCE_POINTS_PER_WORD: f64 = 2.0;
const EDUCATION_CAP: f64 = 10.0;
/// Words this short carry no signal and are skipped everywhere.
const MIN_WORD_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The opportunity's sector string is outside the closed taxonomy.
    #[error("unknown sector '{0}'")]
    UnknownSector(String),
}

/// Computes the match score for one opportunity against a profile.
pub fn match_score(opportunity: &Opportunity, profile: &Profile) -> Result<u8, ScoringError> {
    let sector = Sector::parse(&opportunity.sector)
        .ok_or_else(|| ScoringError::UnknownSector(opportunity.sector.clone()))?;

    let score = sector_affinity(sector, profile)
        + skills_affinity(opportunity, profile)
        + experience_affinity(opportunity, profile)
        + education_affinity(opportunity, profile);

    Ok(score.round().clamp(0.0, 100.0) as u8)
}

/// Scores every opportunity in place. A `ScoringError` on one item leaves
/// its score at 0 and does not abort the batch.
pub fn score_batch(opportunities: &mut [Opportunity], profile: &Profile) {
    for opportunity in opportunities.iter_mut() {
        opportunity.match_score = match match_score(opportunity, profile) {
            Ok(score) => score,
            Err(reason) => {
                warn!(
                    "Skipping match score for opportunity {}: {reason}",
                    opportunity.id
                );
                0
            }
        };
    }
}

fn sector_affinity(sector: Sector, profile: &Profile) -> f64 {
    let biography = profile.biography.to_lowercase();
    let keywords = sector.keywords();
    let matches = keywords.iter().filter(|kw| biography.contains(*kw)).count();
    (matches as f64 / keywords.len() as f64) * SECTOR_WEIGHT
}

fn skills_affinity(opportunity: &Opportunity, profile: &Profile) -> f64 {
    if opportunity.required_skills.is_empty() {
        return 0.0;
    }
    let soft_skills = profile.soft_skills.to_lowercase();
    let matches = opportunity
        .required_skills
        .iter()
        .filter(|skill| soft_skills.contains(&skill.to_lowercase()))
        .count();
    (matches as f64 / opportunity.required_skills.len() as f64) * SKILLS_WEIGHT
}

fn experience_affinity(opportunity: &Opportunity, profile: &Profile) -> f64 {
    let opportunity_text = opportunity.description.to_lowercase();
    let shared: usize = profile
        .experiences
        .iter()
        .map(|exp| common_words(&exp.description.to_lowercase(), &opportunity_text))
        .sum();
    (shared as f64 * EXPERIENCE_POINTS_PER_WORD).min(EXPERIENCE_CAP)
}

fn education_affinity(opportunity: &Opportunity, profile: &Profile) -> f64 {
    let education = profile.education.to_lowercase();
    let requirements = opportunity.requirements.to_lowercase();
    if education.is_empty() || requirements.is_empty() {
        return 0.0;
    }
    let matches = education
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .filter(|word| requirements.contains(*word))
        .count();
    (matches as f64).min(EDUCATION_CAP)
}

/// Counts words (> 3 chars) of `text` that also occur as words of `other`.
fn common_words(text: &str, other: &str) -> usize {
    let other_words: Vec<&str> = other
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect();
    text.split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .filter(|word| other_words.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::opportunity::JobType;
    use crate::models::profile::Experience;
    use uuid::Uuid;

    fn opportunity(sector: &str) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            title: "Sviluppatore Web Junior".to_string(),
            company_name: "Tech Innovation SRL".to_string(),
            sector: sector.to_string(),
            job_type: JobType::FullTime,
            experience_level: "entry".to_string(),
            location: "Milano".to_string(),
            is_remote: false,
            description: String::new(),
            requirements: String::new(),
            required_skills: vec![],
            preferred_skills: vec![],
            salary_min: None,
            salary_max: None,
            created_at: None,
            match_score: 0,
        }
    }

    #[test]
    fn test_score_in_bounds_for_empty_inputs() {
        let score = match_score(&opportunity("Informatica"), &Profile::default()).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn test_full_skills_match_scores_thirty() {
        let mut opp = opportunity("Informatica");
        opp.required_skills = vec!["HTML".to_string(), "CSS".to_string()];
        let profile = Profile {
            soft_skills: "html css javascript".to_string(),
            ..Profile::default()
        };
        // Both skills found: 2/2 × 30 = 30, no other component matches.
        assert_eq!(match_score(&opp, &profile).unwrap(), 30);
    }

    #[test]
    fn test_partial_skills_match_is_fractional() {
        let mut opp = opportunity("Informatica");
        opp.required_skills = vec!["HTML".to_string(), "CSS".to_string(), "React".to_string()];
        let profile = Profile {
            soft_skills: "html".to_string(),
            ..Profile::default()
        };
        assert_eq!(match_score(&opp, &profile).unwrap(), 10); // 1/3 × 30
    }

    #[test]
    fn test_sector_affinity_uses_biography_fraction() {
        // 3 of the 12 Ristorazione keywords in the biography → 10 points.
        let profile = Profile {
            biography: "cuoco con esperienza di cucina in un ristorante".to_string(),
            ..Profile::default()
        };
        assert_eq!(match_score(&opportunity("Ristorazione"), &profile).unwrap(), 10);
    }

    #[test]
    fn test_experience_affinity_capped_at_twenty() {
        let mut opp = opportunity("Informatica");
        opp.description =
            "sviluppo applicazioni frontend backend database testing manutenzione deployment"
                .to_string();
        let profile = Profile {
            experiences: vec![Experience {
                job_title: "dev".to_string(),
                description: opp.description.clone(),
                duration: "3 anni".to_string(),
            }],
            ..Profile::default()
        };
        // 8 shared words × 2 = 16; duplicating the experience exceeds the cap.
        let score = match_score(&opp, &profile).unwrap();
        assert_eq!(score, 16);

        let profile_two = Profile {
            experiences: vec![
                profile.experiences[0].clone(),
                profile.experiences[0].clone(),
            ],
            ..Profile::default()
        };
        assert_eq!(match_score(&opp, &profile_two).unwrap(), 20);
    }

    #[test]
    fn test_education_affinity_capped_at_ten() {
        let mut opp = opportunity("Informatica");
        opp.requirements =
            "laurea informatica preferibile conoscenza database sistemi reti sicurezza \
             programmazione algoritmi strutture dati progettazione"
                .to_string();
        let profile = Profile {
            education: "laurea informatica database sistemi reti sicurezza programmazione \
                        algoritmi strutture dati progettazione"
                .to_string(),
            ..Profile::default()
        };
        let score = match_score(&opp, &profile).unwrap();
        assert_eq!(score, 10);
    }

    #[test]
    fn test_short_words_carry_no_signal() {
        let mut opp = opportunity("Informatica");
        opp.description = "il un con per di da su".to_string();
        let profile = Profile {
            experiences: vec![Experience {
                job_title: "t".to_string(),
                description: "il un con per di da su".to_string(),
                duration: String::new(),
            }],
            ..Profile::default()
        };
        assert_eq!(match_score(&opp, &profile).unwrap(), 0);
    }

    #[test]
    fn test_unknown_sector_is_a_scoring_error() {
        let err = match_score(&opportunity("Finanza"), &Profile::default()).unwrap_err();
        assert!(matches!(err, ScoringError::UnknownSector(s) if s == "Finanza"));
    }

    #[test]
    fn test_batch_isolates_unknown_sector() {
        let mut batch = vec![opportunity("Finanza"), opportunity("Informatica")];
        batch[1].required_skills = vec!["HTML".to_string()];
        let profile = Profile {
            soft_skills: "html".to_string(),
            ..Profile::default()
        };
        score_batch(&mut batch, &profile);
        assert_eq!(batch[0].match_score, 0);
        assert_eq!(batch[1].match_score, 30);
    }

    #[test]
    fn test_score_never_exceeds_one_hundred() {
        let education = "laurea magistrale informatica ingegneria sistemi database \
                         programmazione algoritmi progettazione sicurezza";
        let mut opp = opportunity("Informatica");
        opp.description = Sector::Informatica.keywords().join(" ");
        opp.requirements = education.to_string();
        opp.required_skills = vec!["html".to_string()];
        let profile = Profile {
            biography: Sector::Informatica.keywords().join(" "),
            soft_skills: "html".to_string(),
            education: education.to_string(),
            experiences: vec![
                Experience {
                    job_title: "dev".to_string(),
                    description: opp.description.clone(),
                    duration: String::new(),
                },
                Experience {
                    job_title: "dev".to_string(),
                    description: opp.description.clone(),
                    duration: String::new(),
                },
            ],
            ..Profile::default()
        };
        let score = match_score(&opp, &profile).unwrap();
        assert_eq!(score, 100);
    }
}
