use std::path::PathBuf;

use anyhow::{Context, Result};
use rusty_talent::config::DEFAULT_DATA_PATH;
use rusty_talent::data::model::{Education, Experience, LanguageSkill, Period, Profile, Project};

const PROFILE_COUNT: usize = 60;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carlos", "Daniela", "Eduardo", "Fernanda", "Guilherme", "Helena", "Igor",
    "Juliana", "Karina", "Luiz", "Marina", "Nicolas", "Olivia", "Paulo", "Queila", "Rafael",
    "Sofia", "Tiago", "Ursula", "Vitor", "Willian", "Ximena", "Yago", "Zuleica",
];

const LAST_NAMES: &[&str] = &[
    "Silva", "Souza", "Almeida", "Oliveira", "Costa", "Rocha", "Fernandes", "Moraes", "Barbosa",
    "Carvalho", "Dias", "Esteves", "Farias", "Gomes", "Henrique", "Ibiapina", "Jesus", "Lima",
    "Macedo", "Novaes",
];

const ROLES: &[&str] = &[
    "Engenheiro(a) de Software",
    "UX/UI Designer",
    "Product Manager",
    "Cientista de Dados",
    "Desenvolvedor(a) Front-end",
    "Desenvolvedor(a) Back-end",
    "Analista de Segurança",
    "Especialista em IA",
    "Arquiteto(a) Cloud",
    "Tech Lead",
];

const AREAS: &[&str] = &["Tecnologia", "Design", "Dados", "Produto", "Inovação"];

const LOCATIONS: &[&str] = &[
    "São Paulo/SP",
    "Rio de Janeiro/RJ",
    "Belo Horizonte/MG",
    "Curitiba/PR",
    "Porto Alegre/RS",
    "Brasília/DF",
    "Recife/PE",
    "Salvador/BA",
    "Florianópolis/SC",
    "Fortaleza/CE",
];

const TECH_STACKS: &[&[&str]] = &[
    &["React", "TypeScript", "Tailwind", "Node.js", "GraphQL"],
    &["Vue.js", "JavaScript", "Sass", "Firebase", "Figma"],
    &["Python", "TensorFlow", "Pandas", "SQL", "Docker"],
    &["Java", "Spring Boot", "Kubernetes", "Azure", "Microservices"],
    &["Go", "PostgreSQL", "gRPC", "AWS Lambda", "Terraform"],
    &["Flutter", "Dart", "Supabase", "CI/CD", "Jest"],
];

const SOFT_SKILLS: &[&str] = &[
    "Comunicação",
    "Colaboração",
    "Adaptabilidade",
    "Pensamento crítico",
    "Resiliência",
    "Criatividade",
    "Liderança",
    "Gestão do tempo",
];

const HOBBIES: &[&str] = &[
    "Fotografia", "Ciclismo", "Culinária", "Corrida", "Yoga", "Xadrez", "Música", "Voluntariado",
];

const INTERESTS: &[&str] = &[
    "IA ética",
    "Educação",
    "Saúde digital",
    "Cidades inteligentes",
    "Sustentabilidade",
    "Futuro do trabalho",
];

const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Solutions Architect",
    "Scrum Master",
    "Design Thinking Expert",
    "Google Data Engineer",
    "Azure AI Fundamentals",
];

const DEGREES: &[(&str, &str, u16)] = &[
    ("Engenharia de Computação", "FIAP", 2020),
    ("Design Digital", "PUC-SP", 2021),
    ("Ciência da Computação", "USP", 2019),
    ("Análise e Desenvolvimento de Sistemas", "SENAI", 2018),
    ("Sistemas de Informação", "Mackenzie", 2022),
];

const COMPANIES: &[&str] = &[
    "Nubank", "Itaú", "Magazine Luiza", "Loft", "Stone", "Wildlife", "Sebrae", "XP Inc.",
];

const LANGUAGES: &[(&str, &str)] = &[
    ("Inglês", "Avançado"),
    ("Espanhol", "Intermediário"),
    ("Francês", "Básico"),
];

fn pick<'a>(values: &[&'a str], idx: usize) -> &'a str {
    values[idx % values.len()]
}

/// Up to `size` entries drawn from `values`, keeping first-seen order.
fn random_subset(rng: &mut fastrand::Rng, values: &[&str], size: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(size);
    for i in 0..size {
        let v = values[(i + rng.usize(..values.len())) % values.len()];
        if !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn generate_profile(rng: &mut fastrand::Rng, index: usize) -> Profile {
    let name = format!("{} {}", pick(FIRST_NAMES, index), pick(LAST_NAMES, index + 3));
    let role = pick(ROLES, index + 5);
    let (course, institution, year) = DEGREES[index % DEGREES.len()];

    Profile {
        id: index as u32 + 1,
        photo: format!(
            "https://api.dicebear.com/9.x/avataaars/svg?seed={}",
            urlencoding::encode(&name)
        ),
        role: role.to_string(),
        summary: format!(
            "{role} com foco em soluções que unam impacto social e inovação para o futuro do trabalho."
        ),
        location: pick(LOCATIONS, index + 11).to_string(),
        area: pick(AREAS, index + 7).to_string(),
        technical_skills: strings(TECH_STACKS[index % TECH_STACKS.len()]),
        soft_skills: random_subset(rng, SOFT_SKILLS, 4),
        experiences: vec![
            Experience {
                company: pick(COMPANIES, index + 2).to_string(),
                title: role.to_string(),
                start: "2022-01".to_string(),
                end: Period::Current,
                description: "Liderança de squads multidisciplinares e construção de produtos centrados em pessoas.".to_string(),
            },
            Experience {
                company: pick(COMPANIES, index + 4).to_string(),
                title: "Consultor(a) Especialista".to_string(),
                start: "2019-03".to_string(),
                end: Period::Until("2021-12".to_string()),
                description: "Implementação de boas práticas de colaboração remota e automação de fluxos.".to_string(),
            },
        ],
        education: vec![Education {
            course: course.to_string(),
            institution: institution.to_string(),
            year,
        }],
        projects: vec![
            Project {
                title: "Plataforma Colab Futuro".to_string(),
                link: "https://example.com/projeto-colab".to_string(),
                description: "Marketplace de competências para projetos de impacto socioambiental.".to_string(),
            },
            Project {
                title: "Mentoria Talentos 4.0".to_string(),
                link: "https://example.com/mentoria40".to_string(),
                description: "Programa de apoio à recolocação com foco em soft skills.".to_string(),
            },
        ],
        certifications: vec![
            pick(CERTIFICATIONS, index).to_string(),
            pick(CERTIFICATIONS, index + 2).to_string(),
        ],
        languages: [index, index + 1]
            .iter()
            .map(|i| {
                let (language, level) = LANGUAGES[i % LANGUAGES.len()];
                LanguageSkill {
                    language: language.to_string(),
                    level: level.to_string(),
                }
            })
            .collect(),
        interests: random_subset(rng, INTERESTS, 3),
        hobbies: random_subset(rng, HOBBIES, 2),
        name,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let mut rng = fastrand::Rng::new();
    let profiles: Vec<Profile> = (0..PROFILE_COUNT)
        .map(|i| generate_profile(&mut rng, i))
        .collect();

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(&profiles).context("serialising profiles")?;
    std::fs::write(&output, json).with_context(|| format!("writing {}", output.display()))?;

    println!("Wrote {} profiles to {}", profiles.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_has_no_duplicates() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let subset = random_subset(&mut rng, SOFT_SKILLS, 4);
            assert!(!subset.is_empty() && subset.len() <= 4);
            let mut sorted = subset.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), subset.len());
        }
    }

    #[test]
    fn profiles_cycle_through_vocabularies() {
        let mut rng = fastrand::Rng::with_seed(1);
        let first = generate_profile(&mut rng, 0);
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Ana Oliveira");
        assert_eq!(first.area, "Dados");
        assert_eq!(first.location, "Rio de Janeiro/RJ");
        assert_eq!(first.technical_skills[0], "React");
        assert_eq!(first.experiences[0].end, Period::Current);
        assert!(first.photo.ends_with("seed=Ana%20Oliveira"));
    }

    #[test]
    fn avatar_seed_is_percent_encoded() {
        let mut rng = fastrand::Rng::with_seed(3);
        let p = generate_profile(&mut rng, 3);
        assert_eq!(p.name, "Daniela Fernandes");
        let seed = p.photo.rsplit("seed=").next().unwrap_or_default();
        assert_eq!(seed, "Daniela%20Fernandes");
    }
}
