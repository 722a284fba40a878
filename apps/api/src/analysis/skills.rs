//! CV skill extraction — scans extracted CV text for membership in a fixed
//! skill vocabulary. Case-insensitive substring matching, capped at
//! [`MAX_SKILLS`] hits, with a generic fallback when nothing matches.

/// Cap on the number of skills reported from a CV.
pub const MAX_SKILLS: usize = 5;

const SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "python",
    "react",
    "node.js",
    "html",
    "css",
    "sql",
    "communication",
    "leadership",
    "team work",
    "problem solving",
    "customer service",
    "sales",
    "marketing",
    "management",
    "microsoft office",
    "excel",
    "powerpoint",
    "photoshop",
];

const FALLBACK_SKILLS: &[&str] = &["Competenze base", "Comunicazione", "Problem solving"];

/// Extracts up to [`MAX_SKILLS`] vocabulary skills found in the CV text,
/// in vocabulary order. Returns the generic fallback list when none match.
pub fn extract_skills(cv_text: &str) -> Vec<String> {
    let haystack = cv_text.to_lowercase();
    let found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|s| s.to_string())
        .collect();

    if found.is_empty() {
        FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_skills_case_insensitively() {
        let skills = extract_skills("Esperienza con JavaScript, HTML e Excel.");
        assert_eq!(skills, vec!["javascript", "html", "excel"]);
    }

    #[test]
    fn test_caps_at_five_skills() {
        let skills =
            extract_skills("javascript python react node.js html css sql leadership");
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "javascript");
    }

    #[test]
    fn test_no_match_returns_generic_fallback() {
        let skills = extract_skills("Curriculum senza termini riconosciuti.");
        assert_eq!(
            skills,
            vec!["Competenze base", "Comunicazione", "Problem solving"]
        );
    }

    #[test]
    fn test_multiword_skills_match_as_substrings() {
        let skills = extract_skills("Ottimo problem solving e customer service quotidiano");
        assert_eq!(skills, vec!["problem solving", "customer service"]);
    }
}
