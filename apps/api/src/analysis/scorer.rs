//! Local sector scorer — the deterministic, keyword-table-driven analysis
//! path that requires no network call.
//!
//! Algorithm:
//! 1. Concatenate biography, education, experience descriptions, soft
//!    skills, and hobbies into one lower-cased haystack.
//! 2. Per sector, per keyword: +1 if present in the haystack, +2 more if
//!    present in the biography, +1.5 per experience description containing
//!    it (additive across experiences, not capped per keyword).
//! 3. Winner = argmax; ties and the all-zero case resolve to the first
//!    sector in taxonomy order, so identical input always produces
//!    identical output.
//! 4. Confidence = min(max_score / 10, 1.0), floored at 0.6. The floor is
//!    a product decision: the scorer always answers, and never reports low
//!    confidence to the end user.

use crate::analysis::taxonomy::Sector;
use crate::models::profile::Profile;

const KEYWORD_POINTS: f64 = 1.0;
const BIOGRAPHY_BONUS: f64 = 2.0;
const EXPERIENCE_BONUS: f64 = 1.5;
const SCORE_NORMALIZER: f64 = 10.0;
const MIN_CONFIDENCE: f64 = 0.6;

/// Outcome of a local scoring pass: the winning sector, its floored
/// confidence, and the raw per-sector sums (taxonomy order).
#[derive(Debug, Clone, PartialEq)]
pub struct SectorScore {
    pub sector: Sector,
    pub confidence: f64,
    pub raw_scores: [(Sector, f64); 5],
}

/// Scores a full profile against the sector taxonomy.
pub fn score_profile(profile: &Profile) -> SectorScore {
    let biography = profile.biography.to_lowercase();
    let experience_texts: Vec<String> = profile
        .experiences
        .iter()
        .map(|e| e.description.to_lowercase())
        .collect();

    let haystack = format!(
        "{biography} {} {} {} {}",
        profile.education.to_lowercase(),
        experience_texts.join(" "),
        profile.soft_skills.to_lowercase(),
        profile.hobbies.to_lowercase(),
    );

    score_with(|keyword| {
        if !haystack.contains(keyword) {
            return 0.0;
        }
        let mut points = KEYWORD_POINTS;
        if biography.contains(keyword) {
            points += BIOGRAPHY_BONUS;
        }
        for text in &experience_texts {
            if text.contains(keyword) {
                points += EXPERIENCE_BONUS;
            }
        }
        points
    })
}

/// Scores a plain text block (one point per keyword present). Used by the
/// CV analysis path, where there is no field structure to weight.
pub fn score_text(text: &str) -> SectorScore {
    let haystack = text.to_lowercase();
    score_with(|keyword| {
        if haystack.contains(keyword) {
            KEYWORD_POINTS
        } else {
            0.0
        }
    })
}

fn score_with(points_for: impl Fn(&str) -> f64) -> SectorScore {
    let raw_scores = Sector::ALL.map(|sector| {
        let score: f64 = sector.keywords().iter().map(|kw| points_for(kw)).sum();
        (sector, score)
    });

    // Strictly-greater comparison: the first sector in taxonomy order wins
    // ties, and the all-zero case still answers with the first sector.
    let (mut winner, mut best) = raw_scores[0];
    for (sector, score) in raw_scores.iter().skip(1).copied() {
        if score > best {
            winner = sector;
            best = score;
        }
    }

    let confidence = (best / SCORE_NORMALIZER).min(1.0).max(MIN_CONFIDENCE);

    SectorScore {
        sector: winner,
        confidence,
        raw_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Experience;

    fn profile_with_biography(biography: &str) -> Profile {
        Profile {
            biography: biography.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_tech_biography_selects_informatica() {
        let score = score_profile(&profile_with_biography("sviluppo javascript react"));
        assert_eq!(score.sector, Sector::Informatica);
        assert!(score.confidence >= 0.6);
    }

    #[test]
    fn test_empty_profile_still_answers_first_sector() {
        let score = score_profile(&Profile::default());
        assert_eq!(score.sector, Sector::Informatica);
        assert_eq!(score.confidence, 0.6);
        assert!(score.raw_scores.iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn test_confidence_is_bounded() {
        // 15 Informatica keywords in the biography: 15 * (1 + 2) = 45 raw.
        let all_keywords = Sector::Informatica.keywords().join(" ");
        let score = score_profile(&profile_with_biography(&all_keywords));
        assert_eq!(score.confidence, 1.0);

        let score = score_profile(&profile_with_biography("cuoco"));
        assert_eq!(score.sector, Sector::Ristorazione);
        assert_eq!(score.confidence, 0.6); // raw 3.0 → 0.3 floored
    }

    #[test]
    fn test_biography_keywords_weigh_triple() {
        // Same keyword, in the biography vs in hobbies only.
        let in_bio = score_profile(&profile_with_biography("cucina"));
        let in_hobbies = score_profile(&Profile {
            hobbies: "cucina".to_string(),
            ..Profile::default()
        });
        let bio_raw = in_bio.raw_scores[1].1;
        let hobby_raw = in_hobbies.raw_scores[1].1;
        assert_eq!(bio_raw, 3.0);
        assert_eq!(hobby_raw, 1.0);
    }

    #[test]
    fn test_experience_bonus_is_additive_per_entry() {
        let experience = |description: &str| Experience {
            job_title: "t".to_string(),
            description: description.to_string(),
            duration: "1 anno".to_string(),
        };
        let profile = Profile {
            experiences: vec![experience("coltivazione biologica"), experience("coltivazione in serra")],
            ..Profile::default()
        };
        let score = score_profile(&profile);
        assert_eq!(score.sector, Sector::Agricoltura);
        // "coltivazione": 1 + 1.5 + 1.5; "biologico" does not match
        // "biologica" ("biologico" is not a substring of it).
        let agricoltura_raw = score.raw_scores[3].1;
        assert_eq!(agricoltura_raw, 4.0);
    }

    #[test]
    fn test_tie_breaks_to_first_sector_in_taxonomy_order() {
        // One keyword from each of two sectors in hobbies: both score 1.0.
        let profile = Profile {
            hobbies: "startup natura".to_string(),
            ..Profile::default()
        };
        let score = score_profile(&profile);
        assert_eq!(score.raw_scores[3].1, score.raw_scores[4].1);
        assert_eq!(score.sector, Sector::Agricoltura); // earlier in taxonomy
    }

    #[test]
    fn test_local_path_is_deterministic() {
        let profile = Profile {
            biography: "esperienza nella gestione di un ristorante e servizio clienti".to_string(),
            soft_skills: "leadership, cucina".to_string(),
            ..Profile::default()
        };
        let first = score_profile(&profile);
        let second = score_profile(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_text_counts_one_point_per_keyword() {
        let score = score_text("Esperienza con database e sviluppo web");
        assert_eq!(score.sector, Sector::Informatica);
        assert_eq!(score.raw_scores[0].1, 3.0);
    }
}
