//! Section header detection and content segmentation.

use crate::model::{DetectedSection, Token};

/// Known resume section headings.
pub const SECTION_KEYWORDS: [&str; 18] = [
    "experience",
    "work experience",
    "employment",
    "professional experience",
    "education",
    "academic background",
    "skills",
    "technical skills",
    "core competencies",
    "summary",
    "profile",
    "objective",
    "projects",
    "certifications",
    "achievements",
    "awards",
    "publications",
    "languages",
];

/// A header found during the top-to-bottom scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    /// Joined text of the header token and the tokens after it
    pub title: String,
    /// Vertical position of the header token
    pub y: f32,
    /// Index of the header token in the sorted token list
    pub index: usize,
}

/// Lowercase, trim, and keep only ASCII letters and whitespace.
pub fn normalize_heading(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

/// Check whether a normalized text matches a section keyword in either direction.
///
/// Text that normalizes to nothing (bullets, years, separators) is contained in
/// every keyword, so it matches too.
pub fn is_section_heading(normalized: &str) -> bool {
    SECTION_KEYWORDS
        .iter()
        .any(|kw| normalized.contains(kw) || kw.contains(normalized))
}

/// Sort a copy of the tokens top to bottom; equal `y` keeps received order.
pub fn sort_reading_order(tokens: &[Token]) -> Vec<&Token> {
    let mut sorted: Vec<&Token> = tokens.iter().collect();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
    sorted
}

/// Find section headers in sorted tokens.
pub fn find_headers(sorted: &[&Token], title_words: usize) -> Vec<SectionHeader> {
    sorted
        .iter()
        .enumerate()
        .filter(|(_, token)| is_section_heading(&normalize_heading(&token.text)))
        .map(|(index, token)| {
            let end = (index + title_words).min(sorted.len());
            let title = sorted[index..end]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            SectionHeader {
                title,
                y: token.y,
                index,
            }
        })
        .collect()
}

/// Split the page into sections bounded by consecutive headers.
///
/// A section owns the tokens strictly below `header.y + buffer` and strictly
/// above the next header; the last section is unbounded below.
pub fn detect_sections(tokens: &[Token], buffer: f32, title_words: usize) -> Vec<DetectedSection> {
    let sorted = sort_reading_order(tokens);
    let headers = find_headers(&sorted, title_words);

    log::debug!("found {} section headers", headers.len());

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let start = header.y + buffer;
            let end = headers.get(i + 1).map_or(f32::INFINITY, |next| next.y);

            let content = sorted
                .iter()
                .filter(|t| t.y > start && t.y < end)
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            DetectedSection::new(header.title.clone(), content, header.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, y: f32) -> Token {
        Token::new(text, 0.0, y, 10.0, 10.0)
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading("  EXPERIENCE: "), "experience");
        assert_eq!(normalize_heading("Skills&Tools"), "skillstools");
        assert_eq!(normalize_heading("2019-2021"), "");
    }

    #[test]
    fn test_keyword_match_both_directions() {
        assert!(is_section_heading("experience"));
        // keyword contains the text
        assert!(is_section_heading("work"));
        // text contains the keyword
        assert!(is_section_heading("my projects"));
        assert!(!is_section_heading("rust"));
        // empty text is contained in every keyword
        assert!(is_section_heading(""));
        assert!(is_section_heading(&normalize_heading("2019")));
    }

    #[test]
    fn test_experience_then_education() {
        let tokens = vec![
            at("Experience", 100.0),
            at("Acme", 130.0),
            at("Engineer", 150.0),
            at("Education", 300.0),
            at("MIT", 330.0),
        ];
        let sections = detect_sections(&tokens, 20.0, 3);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Experience Acme Engineer");
        assert_eq!(sections[0].content, "Acme Engineer");
        assert_eq!(sections[0].y, 100.0);
        assert_eq!(sections[1].title, "Education MIT");
        assert_eq!(sections[1].content, "MIT");
    }

    #[test]
    fn test_unsorted_input() {
        let tokens = vec![
            at("MIT", 330.0),
            at("Engineer", 150.0),
            at("Education", 300.0),
            at("Experience", 100.0),
        ];
        let sections = detect_sections(&tokens, 20.0, 3);
        assert_eq!(sections[0].content, "Engineer");
        assert_eq!(sections[1].content, "MIT");
    }

    #[test]
    fn test_buffer_excludes_header_line() {
        let tokens = vec![at("Skills", 100.0), at("Rust", 115.0), at("Go", 121.0)];
        let sections = detect_sections(&tokens, 20.0, 3);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "Go");
    }

    #[test]
    fn test_close_headers_yield_empty_content() {
        let tokens = vec![at("Work", 100.0), at("Experience", 100.0), at("Acme", 140.0)];
        let sections = detect_sections(&tokens, 20.0, 3);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Work Experience Acme");
        assert!(sections[0].content.is_empty());
        assert_eq!(sections[1].content, "Acme");
    }

    #[test]
    fn test_repeated_heading_is_kept() {
        let tokens = vec![
            at("Projects", 100.0),
            at("alpha", 150.0),
            at("Projects", 300.0),
            at("beta", 350.0),
        ];
        let sections = detect_sections(&tokens, 20.0, 3);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].content, "alpha");
        assert_eq!(sections[1].content, "beta");
    }

    #[test]
    fn test_numbers_open_sections() {
        let tokens = vec![at("Experience", 100.0), at("2019", 130.0), at("2021", 150.0)];
        let sections = detect_sections(&tokens, 20.0, 3);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Experience 2019 2021");
        assert!(sections[0].content.is_empty());
        assert_eq!(sections[1].title, "2019 2021");
        assert!(sections[1].content.is_empty());
        assert_eq!(sections[2].title, "2021");
    }

    #[test]
    fn test_bullets_and_years_split_sections() {
        let tokens = vec![
            at("Experience", 100.0),
            at("•", 130.0),
            at("Acme", 130.0),
            at("2019", 200.0),
            at("Engineer", 250.0),
        ];
        let sections: Vec<(String, String)> = detect_sections(&tokens, 20.0, 3)
            .into_iter()
            .map(|s| (s.title, s.content))
            .collect();

        assert_eq!(
            sections,
            vec![
                ("Experience • Acme".to_string(), String::new()),
                ("• Acme 2019".to_string(), String::new()),
                ("2019 Engineer".to_string(), "Engineer".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_headers() {
        assert!(detect_sections(&[at("hello", 10.0)], 20.0, 3).is_empty());
        assert!(detect_sections(&[], 20.0, 3).is_empty());
    }
}
