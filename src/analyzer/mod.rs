//! Layout inference from positioned words.
//!
//! The pipeline is purely geometric and lexical: column balance, a
//! largest-font name band, contact patterns, and keyword section headers.

mod columns;
mod contact;
mod layout;
mod name;
mod options;
mod sections;

pub use columns::{classify_layout, ColumnBalance};
pub use contact::{ContactExtractor, ContactKind, LOCATION_KEYWORDS};
pub use layout::LayoutAnalyzer;
pub use name::extract_name;
pub use options::AnalyzeOptions;
pub use sections::{
    detect_sections, find_headers, is_section_heading, normalize_heading, sort_reading_order,
    SectionHeader, SECTION_KEYWORDS,
};
