//! Prompt constants and renderers for the remote analysis calls.
//!
//! The system prompts pin the exact JSON schema of the expected response;
//! anything outside that shape is rejected by the validation layer and the
//! caller falls back to the local path.

use crate::models::profile::Profile;

/// System prompt for profile analysis — enforces the AnalysisResult JSON
/// shape and the closed sector set.
pub const PROFILE_ANALYSIS_SYSTEM: &str = r#"Sei un esperto career counselor con 20 anni di esperienza nell'orientamento professionale.
Analizza il profilo professionale fornito e restituisci SEMPRE una risposta in formato JSON valido seguendo ESATTAMENTE questa struttura:

{
  "mainSector": "uno tra: Informatica, Ristorazione, Accoglienza, Agricoltura, Imprenditoria",
  "description": "spiegazione dettagliata del perché questo settore è il più adatto",
  "confidence": 0.85,
  "strengths": ["punto di forza 1", "punto di forza 2", "punto di forza 3"],
  "recommendations": ["raccomandazione 1", "raccomandazione 2", "raccomandazione 3"],
  "skillGaps": ["skill mancante 1", "skill mancante 2"],
  "careerPaths": [
    {
      "title": "Percorso principale",
      "description": "descrizione del percorso",
      "timeframe": "6-12 mesi",
      "difficulty": "medio"
    },
    {
      "title": "Percorso alternativo",
      "description": "descrizione percorso alternativo",
      "timeframe": "12-18 mesi",
      "difficulty": "alto"
    }
  ]
}

IMPORTANTE: Rispondi SOLO con il JSON, nessun altro testo."#;

/// System prompt for CV analysis — same shape plus the flat skills list.
pub const CV_ANALYSIS_SYSTEM: &str = r#"Sei un esperto analista di CV con 20 anni di esperienza nell'orientamento professionale.
Analizza il CV fornito e restituisci SEMPRE una risposta in formato JSON valido seguendo ESATTAMENTE questa struttura:

{
  "mainSector": "uno tra: Informatica, Ristorazione, Accoglienza, Agricoltura, Imprenditoria",
  "description": "sintesi del CV e del perché questo settore è il più adatto",
  "confidence": 0.85,
  "strengths": ["punto di forza 1", "punto di forza 2", "punto di forza 3"],
  "recommendations": ["raccomandazione 1", "raccomandazione 2"],
  "skillGaps": ["skill mancante 1", "skill mancante 2"],
  "careerPaths": [
    {
      "title": "Percorso principale",
      "description": "descrizione del percorso",
      "timeframe": "6-12 mesi",
      "difficulty": "medio"
    }
  ],
  "skills": ["competenza 1", "competenza 2", "competenza 3"]
}

IMPORTANTE: Rispondi SOLO con il JSON, nessun altro testo."#;

/// Renders the profile fields as readable labelled text for the user
/// prompt. Empty fields get explicit placeholders so the model does not
/// invent content for them.
pub fn render_profile_prompt(profile: &Profile) -> String {
    let experiences = if profile.experiences.is_empty() {
        "Nessuna esperienza specificata".to_string()
    } else {
        profile
            .experiences
            .iter()
            .map(|exp| {
                format!(
                    "- {} ({})\n  {}",
                    exp.job_title, exp.duration, exp.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Analizza questo profilo professionale:\n\n\
         BIOGRAFIA E ASPIRAZIONI:\n{}\n\n\
         EDUCAZIONE:\n{}\n\n\
         ESPERIENZE LAVORATIVE:\n{}\n\n\
         COMPETENZE TRASVERSALI:\n{}\n\n\
         CERTIFICAZIONI:\n{}\n\n\
         HOBBY E INTERESSI:\n{}\n\n\
         Fornisci un'analisi completa in formato JSON seguendo la struttura richiesta.",
        profile.biography,
        or_placeholder(&profile.education, "Non specificata"),
        experiences,
        or_placeholder(&profile.soft_skills, "Non specificate"),
        or_placeholder(&profile.certifications, "Nessuna certificazione"),
        or_placeholder(&profile.hobbies, "Non specificati"),
    )
}

/// Renders the CV analysis user prompt; the profile is attached as extra
/// context when available.
pub fn render_cv_prompt(cv_text: &str, profile: Option<&Profile>) -> String {
    let mut prompt = format!(
        "Analizza questo CV e fornisci una risposta in formato JSON seguendo la struttura richiesta.\n\n\
         CV da analizzare:\n{cv_text}"
    );
    if let Some(profile) = profile {
        if let Ok(json) = serde_json::to_string(profile) {
            prompt.push_str("\n\nProfilo utente: ");
            prompt.push_str(&json);
        }
    }
    prompt
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Experience;

    #[test]
    fn test_profile_prompt_includes_all_sections() {
        let profile = Profile {
            biography: "La mia biografia".to_string(),
            education: "Diploma alberghiero".to_string(),
            experiences: vec![Experience {
                job_title: "Cuoco".to_string(),
                description: "Linea calda".to_string(),
                duration: "2 anni".to_string(),
            }],
            ..Profile::default()
        };
        let prompt = render_profile_prompt(&profile);
        assert!(prompt.contains("La mia biografia"));
        assert!(prompt.contains("Diploma alberghiero"));
        assert!(prompt.contains("- Cuoco (2 anni)"));
        assert!(prompt.contains("Nessuna certificazione"));
        assert!(prompt.contains("Non specificati"));
    }

    #[test]
    fn test_empty_experiences_get_placeholder() {
        let prompt = render_profile_prompt(&Profile::default());
        assert!(prompt.contains("Nessuna esperienza specificata"));
    }

    #[test]
    fn test_cv_prompt_attaches_profile_when_present() {
        let profile = Profile {
            biography: "bio".to_string(),
            ..Profile::default()
        };
        let prompt = render_cv_prompt("testo cv", Some(&profile));
        assert!(prompt.contains("testo cv"));
        assert!(prompt.contains("Profilo utente:"));

        let without = render_cv_prompt("testo cv", None);
        assert!(!without.contains("Profilo utente:"));
    }
}
