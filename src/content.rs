use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| parse_portfolio(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub initials: String,
    pub handle: String,
    pub email: String,
}

impl Owner {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: Vec<String>,
    pub tagline_lead: String,
    pub tagline_accent: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub tags: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
    /// CSS background for the preview panel.
    pub gradient: String,
    pub logo: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub icon: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// devicon class name
    pub icon: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Embedded content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
}

fn parse_portfolio(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::ParseError(e.to_string()))
}

/// The site's portfolio content, parsed once from the embedded JSON document.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

/// Year stamped by the build script, used for the footer copyright.
pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}
