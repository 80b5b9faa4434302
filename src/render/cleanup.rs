//! Text cleanup for rendered field values.
//!
//! Runs only on output; analyzed documents keep recognized text verbatim.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization and whitespace only
    Minimal,
    /// Standard cleanup: NFC + ligatures + bullets + whitespace
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Standardize bullet characters (●, ○, ■ → •)
    pub standardize_bullets: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Collapse runs of whitespace into one space
    pub collapse_whitespace: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: false,
            standardize_bullets: false,
            remove_replacement_char: false,
            collapse_whitespace: true,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            standardize_bullets: true,
            remove_replacement_char: true,
            collapse_whitespace: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    whitespace_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            whitespace_regex: Regex::new(r"\s+").unwrap(),
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Clean one field value.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.standardize_bullets {
            result = standardize_bullets(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.collapse_whitespace {
            result = self.whitespace_regex.replace_all(&result, " ").into_owned();
        }

        result.trim().to_string()
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn standardize_bullets(text: &str) -> String {
    let bullets = ['●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻'];
    text.chars()
        .map(|c| if bullets.contains(&c) { '•' } else { c })
        .collect()
}
