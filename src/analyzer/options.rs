//! Analysis options and configuration.

/// Thresholds used by the layout inference pipeline.
///
/// The defaults are tuned for a single page rendered at roughly 150-200 DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOptions {
    /// Minimum left/right token balance for a two-column page
    pub column_balance_threshold: f32,

    /// Height of the band below the first token searched for the name
    pub name_band_height: f32,

    /// Maximum number of words in the name
    pub name_word_count: usize,

    /// Only tokens above this line are considered for the location
    pub location_band_height: f32,

    /// Tokens taken on each side of a location keyword
    pub location_window: usize,

    /// Vertical gap between a header and the first line of its content
    pub section_buffer: f32,

    /// Number of tokens joined into a section title
    pub title_word_count: usize,

    /// Whether batch analysis runs files in parallel
    pub parallel: bool,
}

impl AnalyzeOptions {
    /// Create new analysis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column balance threshold.
    pub fn with_column_balance(mut self, threshold: f32) -> Self {
        self.column_balance_threshold = threshold;
        self
    }

    /// Set the name band height.
    pub fn with_name_band(mut self, height: f32) -> Self {
        self.name_band_height = height;
        self
    }

    /// Set the maximum number of name words.
    pub fn with_name_words(mut self, count: usize) -> Self {
        self.name_word_count = count;
        self
    }

    /// Set the location band height.
    pub fn with_location_band(mut self, height: f32) -> Self {
        self.location_band_height = height;
        self
    }

    /// Set the section content buffer.
    pub fn with_section_buffer(mut self, buffer: f32) -> Self {
        self.section_buffer = buffer;
        self
    }

    /// Enable or disable parallel batch analysis.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch analysis.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            column_balance_threshold: 0.3,
            name_band_height: 100.0,
            name_word_count: 3,
            location_band_height: 300.0,
            location_window: 2,
            section_buffer: 20.0,
            title_word_count: 3,
            parallel: true,
        }
    }
}
