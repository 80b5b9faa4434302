//! Editable form view of an analyzed resume.
//!
//! The form is a copy: edits never flow back into the analyzed document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Layout, ResumeDocument};

/// Fixed form field names, in display order.
pub const FIXED_FIELDS: [&str; 10] = [
    "name",
    "email",
    "phone",
    "location",
    "linkedin",
    "github",
    "summary",
    "experience",
    "education",
    "skills",
];

/// Flat, editable field set built from a [`ResumeDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,

    /// Sections without a fixed field, keyed by their raw title
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,

    /// Column arrangement of the source page
    #[serde(default)]
    pub layout: Layout,
}

impl ResumeForm {
    /// Map an analyzed document onto form fields.
    ///
    /// Section titles are matched by lowercase substring; later sections
    /// overwrite earlier ones that map to the same field.
    pub fn from_document(doc: &ResumeDocument) -> Self {
        let mut form = Self {
            name: doc.name.clone(),
            email: doc.contact.email.clone(),
            phone: doc.contact.phone.clone(),
            location: doc.contact.location.clone(),
            linkedin: doc.contact.linkedin.clone(),
            github: doc.contact.github.clone(),
            layout: doc.layout,
            ..Default::default()
        };

        for section in &doc.sections {
            let key = section.title.to_lowercase();
            let key = key.trim();
            let content = section.content.clone();

            if key.contains("summary") || key.contains("profile") {
                form.summary = content;
            } else if key.contains("experience") || key.contains("work") {
                form.experience = content;
            } else if key.contains("education") {
                form.education = content;
            } else if key.contains("skill") {
                form.skills = content;
            } else {
                form.extra.insert(section.title.clone(), content);
            }
        }

        form
    }

    /// Look up a field by name; unknown names are searched in `extra`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "location" => &self.location,
            "linkedin" => &self.linkedin,
            "github" => &self.github,
            "summary" => &self.summary,
            "experience" => &self.experience,
            "education" => &self.education,
            "skills" => &self.skills,
            _ => return self.extra.get(key).map(String::as_str),
        };
        Some(value.as_str())
    }

    /// Set a field by name; unknown names become (or replace) extra fields.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match key {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "location" => self.location = value,
            "linkedin" => self.linkedin = value,
            "github" => self.github = value,
            "summary" => self.summary = value,
            "experience" => self.experience = value,
            "education" => self.education = value,
            "skills" => self.skills = value,
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// All fields in display order: fixed fields first, then extras.
    pub fn fields(&self) -> Vec<(&str, &str)> {
        let mut fields: Vec<(&str, &str)> = FIXED_FIELDS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect();
        fields.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        fields
    }
}

impl From<&ResumeDocument> for ResumeForm {
    fn from(doc: &ResumeDocument) -> Self {
        Self::from_document(doc)
    }
}
