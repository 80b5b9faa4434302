//! Text recognition boundary.
//!
//! Recognition engines are external collaborators. This module defines the
//! shape of their output, a [`TextRecognizer`] trait for engines that can be
//! invoked directly, and loaders for saved engine output.

mod json;
mod progress;
mod tesseract;
mod tsv;

pub use json::parse_words_json;
pub use progress::ProgressReporter;
pub use tesseract::TesseractRecognizer;
pub use tsv::parse_tsv;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Token};

/// A word as reported by a recognition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedWord {
    /// Recognized text (may be blank)
    #[serde(default)]
    pub text: String,

    /// Corner coordinates in image pixels
    pub bbox: BoundingBox,

    /// Engine confidence, 0-100, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RecognizedWord {
    /// Create a word without confidence.
    pub fn new(text: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence: None,
        }
    }

    /// Convert to an analysis token.
    pub fn to_token(&self) -> Token {
        Token::new(
            self.text.clone(),
            self.bbox.x0,
            self.bbox.y0,
            self.bbox.width(),
            self.bbox.height(),
        )
    }
}

/// Output of recognizing one page image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Image width in pixels, when the engine reports it
    #[serde(default)]
    pub width: Option<f32>,

    /// Image height in pixels, when the engine reports it
    #[serde(default)]
    pub height: Option<f32>,

    /// Words in engine order
    pub words: Vec<RecognizedWord>,
}

impl Recognition {
    /// Create a recognition result from words alone.
    pub fn from_words(words: Vec<RecognizedWord>) -> Self {
        Self {
            width: None,
            height: None,
            words,
        }
    }

    /// Set the page size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Derive analysis tokens, dropping words whose trimmed text is empty.
    pub fn tokens(&self) -> Vec<Token> {
        words_to_tokens(&self.words)
    }
}

/// Derive analysis tokens from engine words, dropping blank words.
pub fn words_to_tokens(words: &[RecognizedWord]) -> Vec<Token> {
    words
        .iter()
        .filter(|w| !w.text.trim().is_empty())
        .map(RecognizedWord::to_token)
        .collect()
}

/// A text recognition engine.
pub trait TextRecognizer: Send + Sync {
    /// Engine name for logging.
    fn name(&self) -> &str;

    /// Recognize the words of one page image.
    ///
    /// `progress` receives integer percentages in non-decreasing order; it
    /// need not reach 100 before the call returns.
    fn recognize(&self, image: &Path, progress: &mut dyn FnMut(u8)) -> Result<Recognition>;
}

/// Saved recognition output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionFormat {
    /// Tesseract TSV (`tesseract image out tsv`)
    Tsv,
    /// Word list JSON
    Json,
}

impl RecognitionFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "tsv" => Ok(RecognitionFormat::Tsv),
            "json" => Ok(RecognitionFormat::Json),
            _ => Err(Error::UnsupportedFileType(format!(
                "{} (expected .tsv or .json recognition output)",
                path.display()
            ))),
        }
    }

    /// Parse recognition output in this format.
    pub fn parse(&self, content: &str) -> Result<Recognition> {
        match self {
            RecognitionFormat::Tsv => parse_tsv(content),
            RecognitionFormat::Json => parse_words_json(content),
        }
    }
}

/// Load saved recognition output, choosing the parser by extension.
pub fn load_recognition<P: AsRef<Path>>(path: P) -> Result<Recognition> {
    let path = path.as_ref();
    let format = RecognitionFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let recognition = format.parse(&content)?;

    log::debug!(
        "loaded {} words from {}",
        recognition.words.len(),
        path.display()
    );

    Ok(recognition)
}
