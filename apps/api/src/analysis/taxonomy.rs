//! Sector taxonomy — the closed set of professional sectors and their
//! keyword inventories.
//!
//! The keyword tables are process-wide constants. Declaration order is the
//! tie-break order for the local scorer, so `Sector::ALL` must not be
//! reordered without revisiting the scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five professional sectors used throughout analysis and
/// matching. Serialized by its Italian display name, matching the
/// front-end and datastore contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Informatica,
    Ristorazione,
    Accoglienza,
    Agricoltura,
    Imprenditoria,
}

impl Sector {
    /// All sectors, in taxonomy iteration order.
    pub const ALL: [Sector; 5] = [
        Sector::Informatica,
        Sector::Ristorazione,
        Sector::Accoglienza,
        Sector::Agricoltura,
        Sector::Imprenditoria,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sector::Informatica => "Informatica",
            Sector::Ristorazione => "Ristorazione",
            Sector::Accoglienza => "Accoglienza",
            Sector::Agricoltura => "Agricoltura",
            Sector::Imprenditoria => "Imprenditoria",
        }
    }

    /// Case-insensitive parse from a free-form string (opportunity rows
    /// carry the sector as text).
    pub fn parse(s: &str) -> Option<Sector> {
        let s = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| sector.name().eq_ignore_ascii_case(s))
    }

    /// The weighted keyword inventory for this sector. Matching is
    /// case-insensitive substring containment against lower-cased text,
    /// so every keyword here is lower-case.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Sector::Informatica => &[
                "programma",
                "sviluppo",
                "web",
                "computer",
                "software",
                "app",
                "javascript",
                "python",
                "java",
                "react",
                "flutter",
                "tecnologia",
                "digitale",
                "coding",
                "database",
            ],
            Sector::Ristorazione => &[
                "cuoco",
                "ristorazione",
                "chef",
                "cucina",
                "ristorante",
                "food",
                "beverage",
                "servizio",
                "menu",
                "piatti",
                "gastronomia",
                "alimentare",
            ],
            Sector::Accoglienza => &[
                "hotel",
                "turismo",
                "accoglienza",
                "reception",
                "ospitalità",
                "travel",
                "eventi",
                "clienti",
                "customer",
                "service",
                "guest",
            ],
            Sector::Agricoltura => &[
                "agricoltura",
                "agricolo",
                "campagna",
                "coltivazione",
                "terra",
                "biologico",
                "sostenibile",
                "ambiente",
                "natura",
                "piante",
                "animali",
            ],
            Sector::Imprenditoria => &[
                "impresa",
                "business",
                "startup",
                "manager",
                "azienda",
                "leadership",
                "vendite",
                "marketing",
                "gestione",
                "amministrazione",
                "finance",
            ],
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
