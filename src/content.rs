//! Everything the portfolio displays.
//!
//! A built-in document ships with the binary; a user `content.toml` replaces
//! it entirely.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{config, error::ContentError, media::MediaDescriptor};

const BUILTIN: &str = include_str!("../assets/content.toml");
const CONTENT_FILE: &str = "content.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub featured: Vec<FeaturedProject>,
    #[serde(default)]
    pub experience: Vec<Role>,
    pub education: Education,
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub showcase: Showcase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub still_preview: String,
    pub animated_preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub coursework: Vec<String>,
    #[serde(default)]
    pub schools: Vec<School>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub status: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub learning: Vec<String>,
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub username: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    pub title: String,
    pub category: String,
    pub overview: String,
    #[serde(default)]
    pub facts: Vec<Fact>,
    #[serde(default)]
    pub media: Vec<MediaDescriptor>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub body: String,
}

impl Content {
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN).context("built-in content is invalid")
    }

    pub fn parse(text: &str) -> Result<Self> {
        let content: Content = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.showcase.media.is_empty() {
            return Err(ContentError::EmptyShowcase);
        }
        let mut skills = self.skills.groups.iter().flat_map(|group| &group.skills);
        if let Some(skill) = skills.find(|skill| skill.level > 100) {
            return Err(ContentError::InvalidSkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }
}

/// Loads `path` if given, else the user content file if present, else the
/// built-in content.
pub fn load(path: Option<&Path>) -> Result<Content> {
    let user_file = config::config_dir()
        .map(|dir| dir.join(CONTENT_FILE))
        .filter(|path| path.exists());
    match path.map(Path::to_path_buf).or(user_file) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read content file {}", path.display()))?;
            let content = Content::parse(&text)
                .with_context(|| format!("invalid content file {}", path.display()))?;
            info!("event=content_load source={}", path.display());
            Ok(content)
        }
        None => Content::builtin(),
    }
}
