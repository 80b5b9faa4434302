//! Layout analyzer composing the inference stages.

use crate::model::{finite_or_zero, ResumeDocument, Token};

use super::columns::classify_layout;
use super::contact::ContactExtractor;
use super::name::extract_name;
use super::sections::detect_sections;
use super::AnalyzeOptions;

/// Infers a [`ResumeDocument`] from positioned word tokens.
///
/// The analyzer holds only configuration and compiled patterns, so one
/// instance can be reused (and shared across threads) for any number of pages.
pub struct LayoutAnalyzer {
    options: AnalyzeOptions,
    contact: ContactExtractor,
}

impl LayoutAnalyzer {
    /// Create an analyzer with default thresholds.
    pub fn new() -> Self {
        Self::with_options(AnalyzeOptions::default())
    }

    /// Create an analyzer with custom thresholds.
    pub fn with_options(options: AnalyzeOptions) -> Self {
        let contact = ContactExtractor::new(options.location_band_height, options.location_window);
        Self { options, contact }
    }

    /// Get the analysis options.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Run the full pipeline on one page.
    ///
    /// Never fails: empty input yields an empty single-column document and
    /// non-finite coordinates are read as zero.
    pub fn analyze(&self, tokens: &[Token], image_width: f32) -> ResumeDocument {
        let tokens: Vec<Token> = tokens.iter().map(Token::sanitized).collect();
        let image_width = finite_or_zero(image_width);

        log::debug!(
            "analyzing {} tokens on a {:.0}px wide page",
            tokens.len(),
            image_width
        );

        let layout = classify_layout(&tokens, image_width, self.options.column_balance_threshold);
        let name = extract_name(
            &tokens,
            self.options.name_band_height,
            self.options.name_word_count,
        );
        let contact = self.contact.extract(&tokens);
        let sections = detect_sections(
            &tokens,
            self.options.section_buffer,
            self.options.title_word_count,
        );

        log::debug!(
            "layout={} name={:?} sections={}",
            layout,
            name,
            sections.len()
        );

        ResumeDocument {
            name,
            contact,
            sections,
            layout,
        }
    }
}

impl Default for LayoutAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
