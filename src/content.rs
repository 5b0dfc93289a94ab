use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("embedded portfolio content should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Linkedin,
    Github,
    Twitter,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub portrait: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume: String,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// Initials used as the logo.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn social(&self, kind: SocialKind) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(raw: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(raw).map_err(|e| ContentError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::load().expect("portfolio should parse");
        assert!(!portfolio.profile.name.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.testimonials.len(), 3);
        assert!(portfolio.profile.resume.starts_with('/'));
        assert!(portfolio.profile.social(SocialKind::Github).is_some());
    }

    #[test]
    fn test_parse_error() {
        let err = Portfolio::parse(b"{\"profile\": 1}").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_monogram() {
        assert_eq!(PORTFOLIO.profile.monogram(), "BN");
    }

    #[test]
    fn test_testimonial_initial() {
        let t = Testimonial {
            name: "Laura Mercier".to_string(),
            role: String::new(),
            content: String::new(),
        };
        assert_eq!(t.initial(), 'L');
    }
}
