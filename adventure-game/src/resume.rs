//! Resume content and the plain-text download.
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::DataError;
use crate::level::LevelId;
use crate::skills::Skill;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub years: String,
    pub degree: String,
    pub cgpa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Heading copy shown on a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCopy {
    pub level: LevelId,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub contact: ContactCard,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub extra_curricular: Vec<String>,
    #[serde(default)]
    pub levels: Vec<LevelCopy>,
    #[serde(default)]
    pub closing: String,
}

impl ResumeProfile {
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a profile.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            what: "resume profile",
            source,
        })
    }

    /// Load the embedded profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed.
    pub fn load_from_static() -> Result<Self, DataError> {
        Self::from_json(include_str!("../data/resume.json"))
    }

    /// Heading copy for `level`, falling back to the level key.
    #[must_use]
    pub fn level_copy(&self, level: LevelId) -> LevelCopy {
        self.levels
            .iter()
            .find(|copy| copy.level == level)
            .cloned()
            .unwrap_or_else(|| LevelCopy {
                level,
                title: level.key().to_uppercase(),
                tagline: String::new(),
            })
    }

    /// File name offered for the download, e.g. `Jane_Doe_Resume.txt`.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        let stem: Vec<&str> = self.name.split_whitespace().collect();
        if stem.is_empty() {
            return String::from("Resume.txt");
        }
        format!("{}_Resume.txt", stem.join("_"))
    }

    /// Plain-text rendition of the whole resume.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.name.to_uppercase());
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "================");

        let _ = writeln!(out, "\nCONTACT:");
        let _ = writeln!(out, "Phone: {}", self.contact.phone);
        let _ = writeln!(out, "Email: {}", self.contact.email);
        let _ = writeln!(out, "Location: {}", self.contact.location);
        let _ = writeln!(out, "LinkedIn: {}", self.contact.linkedin);

        if !self.education.is_empty() {
            let _ = writeln!(out, "\nEDUCATION:");
            for edu in &self.education {
                let _ = writeln!(out, "{} ({})", edu.institution, edu.years);
                let _ = writeln!(out, "{}", edu.degree);
                let _ = writeln!(out, "CGPA: {}", edu.cgpa);
            }
        }

        if !self.experience.is_empty() {
            let _ = writeln!(out, "\nEXPERIENCE:");
            for role in &self.experience {
                let _ = writeln!(out, "{}", role.role);
                write_bullets(&mut out, &role.highlights);
            }
        }

        if !self.projects.is_empty() {
            let _ = writeln!(out, "\nPROJECTS:");
            for project in &self.projects {
                let _ = writeln!(out, "{}", project.name);
                write_bullets(&mut out, &project.highlights);
                if !project.tech_stack.is_empty() {
                    let _ = writeln!(out, "- Tech Stack: {}", project.tech_stack.join(", "));
                }
            }
        }

        if !self.skills.is_empty() {
            let skills: Vec<String> = self
                .skills
                .iter()
                .map(|skill| format!("{} ({}%)", skill.name, skill.level))
                .collect();
            let _ = writeln!(out, "\nSKILLS:");
            let _ = writeln!(out, "{}", skills.join(", "));
        }

        if !self.extra_curricular.is_empty() {
            let _ = writeln!(out, "\nEXTRA CURRICULAR:");
            write_bullets(&mut out, &self.extra_curricular);
        }

        if !self.closing.is_empty() {
            let _ = writeln!(out, "\n{}", self.closing);
        }
        out
    }
}

fn write_bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
