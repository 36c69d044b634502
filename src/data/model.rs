use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Period – end of a work experience
// ---------------------------------------------------------------------------

/// Wire sentinel marking an experience that is still ongoing.
pub const CURRENT_PERIOD: &str = "Atual";

/// End of an experience: either still ongoing or a `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    Current,
    Until(String),
}

impl From<String> for Period {
    fn from(s: String) -> Self {
        if s == CURRENT_PERIOD {
            Period::Current
        } else {
            Period::Until(s)
        }
    }
}

impl From<Period> for String {
    fn from(p: Period) -> Self {
        match p {
            Period::Current => CURRENT_PERIOD.to_string(),
            Period::Until(s) => s,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Current => write!(f, "{CURRENT_PERIOD}"),
            Period::Until(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub title: String,
    #[serde(rename = "inicio")]
    pub start: String,
    #[serde(rename = "fim")]
    pub end: Period,
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "instituicao")]
    pub institution: String,
    #[serde(rename = "ano")]
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "titulo")]
    pub title: String,
    pub link: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// A spoken language and the proficiency level in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(rename = "idioma")]
    pub language: String,
    #[serde(rename = "nivel")]
    pub level: String,
}

// ---------------------------------------------------------------------------
// Facet – a filterable dimension discovered from the data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Area,
    Location,
    Technology,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Area, Facet::Location, Facet::Technology];

    /// Human label used in filter widgets and active-filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Area => "Area",
            Facet::Location => "City",
            Facet::Technology => "Technology",
        }
    }
}

// ---------------------------------------------------------------------------
// Profile – one record of the dataset
// ---------------------------------------------------------------------------

/// A single professional profile. Field names follow the JSON asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "foto")]
    pub photo: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "resumo")]
    pub summary: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    pub area: String,
    #[serde(rename = "habilidadesTecnicas")]
    pub technical_skills: Vec<String>,
    #[serde(rename = "softSkills")]
    pub soft_skills: Vec<String>,
    #[serde(rename = "experiencias")]
    pub experiences: Vec<Experience>,
    #[serde(rename = "formacao")]
    pub education: Vec<Education>,
    #[serde(rename = "projetos")]
    pub projects: Vec<Project>,
    #[serde(rename = "certificacoes")]
    pub certifications: Vec<String>,
    #[serde(rename = "idiomas")]
    pub languages: Vec<LanguageSkill>,
    #[serde(rename = "areaInteresses")]
    pub interests: Vec<String>,
    pub hobbies: Vec<String>,
}

impl Profile {
    /// Values this profile carries for a facet. Area and location are
    /// single-valued, technology is the technical-skill list.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Area => std::slice::from_ref(&self.area),
            Facet::Location => std::slice::from_ref(&self.location),
            Facet::Technology => &self.technical_skills,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Bare profile with only the filterable fields filled in.
    pub fn profile(id: u32, area: &str, location: &str, tech: &[&str]) -> Profile {
        Profile {
            id,
            name: format!("Person {id}"),
            photo: String::new(),
            role: "Engineer".to_string(),
            summary: String::new(),
            location: location.to_string(),
            area: area.to_string(),
            technical_skills: tech.iter().map(|t| t.to_string()).collect(),
            soft_skills: Vec::new(),
            experiences: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            languages: Vec::new(),
            interests: Vec::new(),
            hobbies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 7,
        "nome": "Helena Lima",
        "foto": "https://api.dicebear.com/9.x/avataaars/svg?seed=Helena%20Lima",
        "cargo": "Cientista de Dados",
        "resumo": "Cientista de Dados com foco em impacto social.",
        "localizacao": "Curitiba/PR",
        "area": "Dados",
        "habilidadesTecnicas": ["Python", "Pandas"],
        "softSkills": ["Resiliência"],
        "experiencias": [
            {"empresa": "Stone", "cargo": "Cientista de Dados", "inicio": "2022-01", "fim": "Atual", "descricao": "x"},
            {"empresa": "Loft", "cargo": "Consultor(a)", "inicio": "2019-03", "fim": "2021-12", "descricao": "y"}
        ],
        "formacao": [{"curso": "Ciência da Computação", "instituicao": "USP", "ano": 2019}],
        "projetos": [{"titulo": "Mentoria", "link": "https://example.com", "descricao": "z"}],
        "certificacoes": ["Scrum Master"],
        "idiomas": [{"idioma": "Inglês", "nivel": "Avançado"}],
        "areaInteresses": ["Educação"],
        "hobbies": ["Xadrez"]
    }"#;

    #[test]
    fn parses_wire_record() {
        let p: Profile = serde_json::from_str(RECORD).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.name, "Helena Lima");
        assert_eq!(p.location, "Curitiba/PR");
        assert_eq!(p.experiences[0].end, Period::Current);
        assert_eq!(p.experiences[1].end, Period::Until("2021-12".into()));
        assert_eq!(p.education[0].year, 2019);
        assert_eq!(p.languages[0].level, "Avançado");
    }

    #[test]
    fn current_period_keeps_wire_sentinel() {
        let json = serde_json::to_string(&Period::Current).unwrap();
        assert_eq!(json, "\"Atual\"");
        assert_eq!(Period::Until("2021-12".into()).to_string(), "2021-12");
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(RECORD).unwrap();
        value.as_object_mut().unwrap().remove("habilidadesTecnicas");
        assert!(serde_json::from_value::<Profile>(value).is_err());
    }

    #[test]
    fn facet_values_per_dimension() {
        let p = fixtures::profile(1, "Dados", "SP", &["Python", "SQL"]);
        assert_eq!(p.facet_values(Facet::Area), ["Dados"]);
        assert_eq!(p.facet_values(Facet::Location), ["SP"]);
        assert_eq!(p.facet_values(Facet::Technology), ["Python", "SQL"]);
    }
}
