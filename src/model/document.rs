//! Document-level types.

use serde::{Deserialize, Serialize};

/// Structured resume inferred from one page of positioned words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Candidate name from the page header
    pub name: String,

    /// Contact details
    pub contact: ContactInfo,

    /// Detected sections in top-to-bottom order
    pub sections: Vec<DetectedSection>,

    /// Column arrangement of the page
    pub layout: Layout,
}

impl ResumeDocument {
    /// Create an empty single-column document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of detected sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// First section whose title contains `needle`, case-insensitively.
    pub fn find_section(&self, needle: &str) -> Option<&DetectedSection> {
        let needle = needle.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.title.to_lowercase().contains(&needle))
    }

    /// Check whether nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contact.is_empty() && self.sections.is_empty()
    }
}

/// Contact fields; an empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Free-form location guess
    pub location: String,
    /// LinkedIn profile URL
    pub linkedin: String,
    /// GitHub profile URL
    pub github: String,
}

impl ContactInfo {
    /// Check if no contact field was found.
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.linkedin.is_empty()
            && self.github.is_empty()
    }
}

/// A titled section and the text attributed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedSection {
    /// Raw header text as recognized (not normalized)
    pub title: String,

    /// Space-joined text of the section body
    pub content: String,

    /// Vertical position of the header
    pub y: f32,
}

impl DetectedSection {
    /// Create a new section.
    pub fn new(title: impl Into<String>, content: impl Into<String>, y: f32) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            y,
        }
    }

    /// Check if no text fell into the section body.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Page column arrangement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One text column
    #[default]
    Single,
    /// Two text columns
    Double,
}

impl Layout {
    /// Lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Single => "single",
            Layout::Double => "double",
        }
    }

    /// Check if the page has two columns.
    pub fn is_double(&self) -> bool {
        matches!(self, Layout::Double)
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
