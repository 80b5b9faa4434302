//! Contact detail extraction.

use regex::Regex;

use crate::model::{ContactInfo, Token};

/// Words that mark a token as part of a postal address.
pub const LOCATION_KEYWORDS: [&str; 6] = ["city", "state", "country", "avenue", "street", "road"];

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
// ASCII digits only; `\d` would also accept other scripts' digits
const PHONE_PATTERN: &str = r"(\+?[0-9]{1,3}[-.]?)?\(?[0-9]{3}\)?[-.]?[0-9]{3}[-.]?[0-9]{4}";
const LINKEDIN_PATTERN: &str = r"linkedin\.com/in/[a-zA-Z0-9-]+";
const GITHUB_PATTERN: &str = r"github\.com/[a-zA-Z0-9-]+";

/// Which contact field a token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

/// Pattern-based contact extractor.
///
/// Each token fills at most one field, checked in the order email, phone,
/// LinkedIn, GitHub. A later match overwrites an earlier one.
pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    github: Regex,
    location_band_height: f32,
    location_window: usize,
}

impl ContactExtractor {
    /// Create an extractor with the given location band and window.
    pub fn new(location_band_height: f32, location_window: usize) -> Self {
        Self {
            email: Regex::new(EMAIL_PATTERN).unwrap(),
            phone: Regex::new(PHONE_PATTERN).unwrap(),
            linkedin: Regex::new(LINKEDIN_PATTERN).unwrap(),
            github: Regex::new(GITHUB_PATTERN).unwrap(),
            location_band_height,
            location_window,
        }
    }

    /// Classify already lower-cased text.
    pub fn classify(&self, text: &str) -> Option<ContactKind> {
        if self.email.is_match(text) {
            Some(ContactKind::Email)
        } else if self.phone.is_match(text) {
            Some(ContactKind::Phone)
        } else if self.linkedin.is_match(text) {
            Some(ContactKind::LinkedIn)
        } else if self.github.is_match(text) {
            Some(ContactKind::GitHub)
        } else {
            None
        }
    }

    /// Scan tokens in received order and collect contact fields.
    pub fn extract(&self, tokens: &[Token]) -> ContactInfo {
        let mut contact = ContactInfo::default();

        for token in tokens {
            let text = token.text.to_lowercase();
            let field = match self.classify(&text) {
                Some(ContactKind::Email) => &mut contact.email,
                Some(ContactKind::Phone) => &mut contact.phone,
                Some(ContactKind::LinkedIn) => &mut contact.linkedin,
                Some(ContactKind::GitHub) => &mut contact.github,
                None => continue,
            };
            *field = text;
        }

        if let Some(location) = self.find_location(tokens) {
            contact.location = location;
        }

        contact
    }

    /// Last keyword hit in the top band, widened to its neighbours.
    fn find_location(&self, tokens: &[Token]) -> Option<String> {
        let (index, _) = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.y < self.location_band_height)
            .filter(|(_, t)| {
                let text = t.text.to_lowercase();
                LOCATION_KEYWORDS.iter().any(|kw| text.contains(kw))
            })
            .last()?;

        let start = index.saturating_sub(self.location_window);
        let end = (index + self.location_window + 1).min(tokens.len());

        Some(
            tokens[start..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new(300.0, 2)
    }
}
