//! Content generator — fixed per-sector text blocks for the local analysis
//! path: strengths, recommendations, skill gaps, career paths, and the
//! sector description. All lookups are total over the closed sector enum.

use crate::analysis::taxonomy::Sector;
use crate::models::analysis::CareerPath;
use crate::models::profile::Profile;

/// Maximum number of strengths returned per analysis.
pub const MAX_STRENGTHS: usize = 4;

fn base_strengths(sector: Sector) -> [&'static str; 3] {
    match sector {
        Sector::Informatica => [
            "Orientamento alla risoluzione di problemi",
            "Capacità di apprendimento continuo",
            "Pensiero logico e analitico",
        ],
        Sector::Ristorazione => [
            "Attenzione ai dettagli",
            "Capacità di lavorare sotto pressione",
            "Orientamento al servizio clienti",
        ],
        Sector::Accoglienza => [
            "Eccellenti capacità comunicative",
            "Orientamento al cliente",
            "Flessibilità e adattabilità",
        ],
        Sector::Agricoltura => [
            "Connessione con la natura",
            "Pazienza e perseveranza",
            "Attenzione alla sostenibilità",
        ],
        Sector::Imprenditoria => [
            "Leadership naturale",
            "Visione strategica",
            "Capacità di prendere decisioni",
        ],
    }
}

/// Builds the strengths list: the sector's three base strengths plus up to
/// three generic ones keyed on profile completeness, truncated to
/// [`MAX_STRENGTHS`].
pub fn strengths_for(profile: &Profile, sector: Sector) -> Vec<String> {
    let mut strengths: Vec<String> = base_strengths(sector)
        .into_iter()
        .map(String::from)
        .collect();

    if !profile.experiences.is_empty() {
        strengths.push("Esperienza pratica nel settore".to_string());
    }
    if !profile.education.trim().is_empty() {
        strengths.push("Solida base educativa".to_string());
    }
    if !profile.soft_skills.trim().is_empty() {
        strengths.push("Competenze trasversali sviluppate".to_string());
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

pub fn recommendations_for(sector: Sector) -> Vec<String> {
    let items: [&str; 3] = match sector {
        Sector::Informatica => [
            "Approfondisci le tecnologie più richieste nel mercato",
            "Crea un portfolio online con i tuoi progetti",
            "Partecipa a community tech e eventi di networking",
        ],
        Sector::Ristorazione => [
            "Considera corsi di specializzazione culinaria",
            "Sviluppa competenze in gestione del food cost",
            "Acquisisci esperienza in diversi tipi di cucina",
        ],
        Sector::Accoglienza => [
            "Migliora le competenze linguistiche",
            "Studia tecniche di customer service avanzate",
            "Specializzati in revenue management",
        ],
        Sector::Agricoltura => [
            "Esplora tecniche di agricoltura sostenibile",
            "Studia le nuove tecnologie AgriTech",
            "Considera la specializzazione in agricoltura biologica",
        ],
        Sector::Imprenditoria => [
            "Sviluppa un business plan dettagliato",
            "Studia tecniche di marketing digitale",
            "Crea una rete di contatti professionali",
        ],
    };
    items.into_iter().map(String::from).collect()
}

pub fn skill_gaps_for(sector: Sector) -> Vec<String> {
    let items: [&str; 2] = match sector {
        Sector::Informatica => ["Conoscenza cloud computing", "Competenze in AI/ML"],
        Sector::Ristorazione => [
            "Gestione inventario digitale",
            "Marketing per ristoranti",
        ],
        Sector::Accoglienza => ["Revenue management", "Competenze digitali"],
        Sector::Agricoltura => ["Tecnologie precision farming", "Marketing diretto"],
        Sector::Imprenditoria => ["Digital marketing", "Gestione finanziaria"],
    };
    items.into_iter().map(String::from).collect()
}

pub fn career_paths_for(sector: Sector) -> Vec<CareerPath> {
    let paths: [(&str, &str, &str, &str); 2] = match sector {
        Sector::Informatica => [
            (
                "Sviluppatore Full-Stack",
                "Specializzazione nello sviluppo web completo con focus su tecnologie moderne",
                "6-12 mesi",
                "medio",
            ),
            (
                "Data Scientist",
                "Analisi dati e machine learning per business intelligence",
                "12-18 mesi",
                "alto",
            ),
        ],
        Sector::Ristorazione => [
            (
                "Chef de Partie",
                "Specializzazione in una stazione specifica della brigata di cucina",
                "6-12 mesi",
                "medio",
            ),
            (
                "Restaurant Manager",
                "Gestione completa di un ristorante con responsabilità operative",
                "18-24 mesi",
                "alto",
            ),
        ],
        Sector::Accoglienza => [
            (
                "Guest Relations Manager",
                "Gestione dell'esperienza cliente in strutture alberghiere",
                "6-12 mesi",
                "medio",
            ),
            (
                "Hotel General Manager",
                "Direzione operativa completa di strutture ricettive",
                "24-36 mesi",
                "alto",
            ),
        ],
        Sector::Agricoltura => [
            (
                "Agricoltore Specializzato",
                "Specializzazione in colture biologiche o tecniche innovative",
                "12-18 mesi",
                "medio",
            ),
            (
                "Agribusiness Manager",
                "Gestione aziendale agricola con focus commerciale",
                "18-24 mesi",
                "alto",
            ),
        ],
        Sector::Imprenditoria => [
            (
                "Startup Founder",
                "Creazione e lancio di una startup innovativa",
                "12-18 mesi",
                "alto",
            ),
            (
                "Business Consultant",
                "Consulenza strategica per PMI e grandi aziende",
                "18-24 mesi",
                "alto",
            ),
        ],
    };
    paths
        .into_iter()
        .map(|(title, description, timeframe, difficulty)| CareerPath {
            title: title.to_string(),
            description: description.to_string(),
            timeframe: timeframe.to_string(),
            difficulty: difficulty.to_string(),
        })
        .collect()
}

/// The descriptive paragraph shown with a profile analysis.
pub fn sector_description(sector: Sector) -> String {
    let text = match sector {
        Sector::Informatica => {
            "Basandoci sulla tua biografia e sulle competenze indicate, il settore informatico \
             sembra allinearsi perfettamente con il tuo profilo. Le tue capacità analitiche e \
             l'interesse per la tecnologia sono punti di forza chiave per questo campo in rapida \
             crescita."
        }
        Sector::Ristorazione => {
            "Il tuo profilo mostra una forte inclinazione verso il settore della ristorazione. La \
             tua attenzione ai dettagli e la passione per il servizio clienti sono elementi \
             fondamentali per eccellere in questo ambito dinamico."
        }
        Sector::Accoglienza => {
            "Le tue competenze comunicative e l'orientamento al servizio indicano una naturale \
             predisposizione per il settore dell'accoglienza. La tua capacità di relazionarti con \
             le persone è un asset prezioso in questo campo."
        }
        Sector::Agricoltura => {
            "Il tuo interesse per la sostenibilità e il contatto con la natura suggerisce una \
             forte compatibilità con il settore agricolo. Le tue competenze possono contribuire \
             all'innovazione in questo settore tradizionale ma in evoluzione."
        }
        Sector::Imprenditoria => {
            "La tua visione strategica e le capacità di leadership emerse dal profilo indicano un \
             forte potenziale imprenditoriale. Le tue competenze sono ideali per avviare e gestire \
             attività commerciali innovative."
        }
    };
    text.to_string()
}

/// One-line summary used as the description of a CV analysis.
pub fn cv_summary(sector: Sector) -> String {
    let text = match sector {
        Sector::Informatica => {
            "CV con focus tecnologico e competenze di programmazione. Mostra esperienza nello \
             sviluppo software."
        }
        Sector::Ristorazione => {
            "Profilo orientato al settore food & beverage con esperienza nel servizio clienti."
        }
        Sector::Accoglienza => {
            "CV che evidenzia competenze relazionali e orientamento al customer service."
        }
        Sector::Agricoltura => "Profilo con interesse per sostenibilità e settore primario.",
        Sector::Imprenditoria => {
            "CV che mostra capacità imprenditoriali e di gestione business."
        }
    };
    text.to_string()
}
