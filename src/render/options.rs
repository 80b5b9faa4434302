//! Rendering options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for rendering analyzed resumes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Include YAML frontmatter with name and layout
    pub include_frontmatter: bool,

    /// Render sections that have no fixed form field
    pub include_extra_sections: bool,

    /// Render fields whose value is empty
    pub include_empty_fields: bool,

    /// Separator between contact items on one line
    pub contact_separator: String,

    /// Heading for the summary field
    pub summary_heading: String,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable extra sections.
    pub fn with_extra_sections(mut self, include: bool) -> Self {
        self.include_extra_sections = include;
        self
    }

    /// Enable or disable empty fields.
    pub fn with_empty_fields(mut self, include: bool) -> Self {
        self.include_empty_fields = include;
        self
    }

    /// Set the contact separator.
    pub fn with_contact_separator(mut self, separator: impl Into<String>) -> Self {
        self.contact_separator = separator.into();
        self
    }

    /// Set the summary heading.
    pub fn with_summary_heading(mut self, heading: impl Into<String>) -> Self {
        self.summary_heading = heading.into();
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            include_extra_sections: true,
            include_empty_fields: false,
            contact_separator: " • ".to_string(),
            summary_heading: "Professional Summary".to_string(),
            cleanup: None,
        }
    }
}
