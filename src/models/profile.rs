//! Student profile input for suggestion generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A student profile as provided by the caller.
///
/// Every field is optional in the source JSON; missing sections
/// simply contribute nothing to the suggestion text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub education: Education,

    #[serde(default)]
    pub skills: Skills,

    #[serde(default)]
    pub interests: Vec<String>,
}

/// Education section of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub major: String,

    #[serde(default)]
    pub degree: String,
}

/// Skills section of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
}

impl StudentProfile {
    /// Load a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Lowercased blob of major, degree, skills, and interests,
    /// used for keyword matching.
    pub fn combined_text(&self) -> String {
        let major = self.education.major.to_lowercase();
        let degree = self.education.degree.to_lowercase();
        let skills = self.skills.technical.join(" ").to_lowercase();
        let interests = self.interests.join(" ").to_lowercase();
        format!("{major} {degree} {skills} {interests}")
    }
}
