//! Static page copy, embedded at compile time from `assets/content.json`.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::motion::tracker::Section;

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content is inconsistent: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "tone-primary",
            Tone::Secondary => "tone-secondary",
            Tone::Accent => "tone-accent",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub loading_caption: String,
    pub sections: Vec<SectionEntry>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub projects: ProjectsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroContent {
    pub greeting: String,
    pub role: String,
    pub tagline: String,
    pub cta: String,
    pub showcase_title: String,
    pub showcase_note: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AboutContent {
    pub title: String,
    pub monogram: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub skills_title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectsContent {
    pub title: String,
    pub intro: String,
    pub items: Vec<Project>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactContent {
    pub title: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterContent {
    pub tagline: String,
    pub copyright: String,
    pub credit: String,
}

pub fn load() -> Result<SiteContent, ContentError> {
    parse(EMBEDDED)
}

pub fn parse(raw: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(raw)?;
    validate(&content)?;
    Ok(content)
}

pub fn validate(content: &SiteContent) -> Result<(), ContentError> {
    if content.sections.is_empty() {
        return Err(ContentError::Invalid("no navigation sections".into()));
    }
    let mut ids = HashSet::new();
    for entry in &content.sections {
        if entry.id.trim().is_empty() {
            return Err(ContentError::Invalid("section with an empty id".into()));
        }
        if entry.label.trim().is_empty() {
            return Err(ContentError::Invalid(format!("section `{}` has no label", entry.id)));
        }
        if !ids.insert(entry.id.as_str()) {
            return Err(ContentError::Invalid(format!("section `{}` is listed twice", entry.id)));
        }
    }
    let mut projects = HashSet::new();
    if let Some(dup) = content.projects.items.iter().find(|p| !projects.insert(p.id)) {
        return Err(ContentError::Invalid(format!("project id {} is used twice", dup.id)));
    }
    Ok(())
}

impl SiteContent {
    /// Navigation sections in page order. Each section's anchor is its id.
    pub fn sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|entry| Section::new(entry.id.clone(), entry.label.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = load().unwrap();
        let ids: Vec<_> = content.sections().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["home", "about", "projects", "contact"]);
        assert_eq!(content.about.skills.len(), 8);
        assert_eq!(content.projects.items.iter().filter(|p| p.featured).count(), 2);
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let mut content = load().unwrap();
        content.sections.push(SectionEntry {
            id: "about".into(),
            label: "Again".into(),
        });
        assert!(matches!(validate(&content), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn empty_section_list_is_rejected() {
        let mut content = load().unwrap();
        content.sections.clear();
        assert!(validate(&content).is_err());
    }

    #[test]
    fn blank_label_is_rejected() {
        let mut content = load().unwrap();
        content.sections[1].label = "  ".into();
        let err = validate(&content).unwrap_err();
        assert!(err.to_string().contains("about"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse("{ \"brand\": "), Err(ContentError::Parse(_))));
    }
}
