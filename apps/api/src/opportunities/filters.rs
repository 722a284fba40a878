//! Opportunity filters — pure application of user-selected filters over an
//! in-memory opportunity collection. Relative order is preserved; the
//! underlying records are never mutated.

use serde::{Deserialize, Serialize};

use crate::models::opportunity::{JobType, Opportunity};

/// Contract-type filter buckets. "job" covers all employment contract
/// types; internships and training are their own buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Job,
    Training,
    Internship,
}

impl TypeFilter {
    fn matches(self, job_type: JobType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Job => job_type.is_job(),
            TypeFilter::Training => job_type == JobType::Training,
            TypeFilter::Internship => job_type == JobType::Internship,
        }
    }
}

/// The active filter set, owned by the caller's session. Absent values and
/// the literal "all" (the front-end's reset value) mean no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterState {
    pub search: Option<String>,
    #[serde(rename = "type", default)]
    pub type_filter: TypeFilter,
    pub sector: Option<String>,
    pub location: Option<String>,
}

/// Applies the filter set, preserving input order.
pub fn apply(opportunities: Vec<Opportunity>, filters: &FilterState) -> Vec<Opportunity> {
    let mut filtered = opportunities;

    if let Some(term) = active_value(&filters.search) {
        let term = term.to_lowercase();
        filtered.retain(|opp| {
            opp.title.to_lowercase().contains(&term)
                || opp.company_name.to_lowercase().contains(&term)
                || opp.description.to_lowercase().contains(&term)
                || opp.sector.to_lowercase().contains(&term)
        });
    }

    filtered.retain(|opp| filters.type_filter.matches(opp.job_type));

    if let Some(sector) = active_value(&filters.sector) {
        filtered.retain(|opp| opp.sector == sector);
    }

    if let Some(location) = active_value(&filters.location) {
        let location_lower = location.to_lowercase();
        filtered.retain(|opp| {
            opp.location.to_lowercase().contains(&location_lower)
                || (location_lower == "remote" && opp.is_remote)
        });
    }

    filtered
}

/// Treats `None`, empty strings, and the literal "all" as no filter.
fn active_value(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn opportunity(title: &str, sector: &str, location: &str, is_remote: bool) -> Opportunity {
        Opportunity {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company_name: "Azienda".to_string(),
            sector: sector.to_string(),
            job_type: JobType::FullTime,
            experience_level: "entry".to_string(),
            location: location.to_string(),
            is_remote,
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

    fn sample() -> Vec<Opportunity> {
        vec![
            opportunity("Sviluppatore Web", "Informatica", "Milano", true),
            opportunity("Cuoco di Linea", "Ristorazione", "Roma", false),
            opportunity("Receptionist", "Accoglienza", "Milano", false),
        ]
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let result = apply(sample(), &FilterState::default());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].title, "Sviluppatore Web");
        assert_eq!(result[2].title, "Receptionist");
    }

    #[test]
    fn test_all_literal_is_not_a_constraint() {
        let filters = FilterState {
            sector: Some("all".to_string()),
            location: Some("all".to_string()),
            ..FilterState::default()
        };
        assert_eq!(apply(sample(), &filters).len(), 3);
    }

    #[test]
    fn test_search_matches_across_fields() {
        let filters = FilterState {
            search: Some("ristorazione".to_string()),
            ..FilterState::default()
        };
        let result = apply(sample(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Cuoco di Linea");
    }

    #[test]
    fn test_sector_filter_is_exact() {
        let filters = FilterState {
            sector: Some("Informatica".to_string()),
            ..FilterState::default()
        };
        let result = apply(sample(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sector, "Informatica");
    }

    #[test]
    fn test_location_filter_is_substring() {
        let filters = FilterState {
            location: Some("mila".to_string()),
            ..FilterState::default()
        };
        assert_eq!(apply(sample(), &filters).len(), 2);
    }

    #[test]
    fn test_remote_location_includes_remote_opportunities() {
        // The Milano opportunity is remote: it matches the "remote" filter
        // even though its location string does not.
        let filters = FilterState {
            location: Some("remote".to_string()),
            ..FilterState::default()
        };
        let result = apply(sample(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Sviluppatore Web");
        assert_eq!(result[0].location, "Milano");
    }

    #[test]
    fn test_type_filter_buckets() {
        let mut opportunities = sample();
        opportunities[1].job_type = JobType::Internship;
        opportunities[2].job_type = JobType::Training;

        let jobs = apply(
            opportunities.clone(),
            &FilterState {
                type_filter: TypeFilter::Job,
                ..FilterState::default()
            },
        );
        assert_eq!(jobs.len(), 1);

        let internships = apply(
            opportunities.clone(),
            &FilterState {
                type_filter: TypeFilter::Internship,
                ..FilterState::default()
            },
        );
        assert_eq!(internships.len(), 1);
        assert_eq!(internships[0].title, "Cuoco di Linea");

        let training = apply(
            opportunities,
            &FilterState {
                type_filter: TypeFilter::Training,
                ..FilterState::default()
            },
        );
        assert_eq!(training.len(), 1);
        assert_eq!(training[0].title, "Receptionist");
    }

    #[test]
    fn test_filters_compose() {
        let filters = FilterState {
            search: Some("web".to_string()),
            sector: Some("Informatica".to_string()),
            location: Some("remote".to_string()),
            ..FilterState::default()
        };
        let result = apply(sample(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Sviluppatore Web");
    }
}
