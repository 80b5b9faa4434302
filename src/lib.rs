//! # unresume
//!
//! Layout analysis for recognized resume pages.
//!
//! Given the words a text-recognition engine found on a resume image, this
//! library infers the candidate's name, contact details, titled sections and
//! whether the page is laid out in one column or two. Results can be edited
//! as a flat form and rendered to JSON, Markdown or plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{analyze_file, render};
//!
//! fn main() -> unresume::Result<()> {
//!     // Analyze saved Tesseract TSV output
//!     let doc = analyze_file("resume.tsv")?;
//!
//!     let form = unresume::ResumeForm::from_document(&doc);
//!     let markdown = render::to_markdown(&form, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Column detection**: single or two-column layout from word positions
//! - **Contact extraction**: email, phone, LinkedIn, GitHub and location
//! - **Section segmentation**: keyword headings with vertical content bands
//! - **Recognition adapters**: Tesseract TSV, word-list JSON, Tesseract CLI
//! - **Parallel batches**: uses Rayon across files

pub mod analyzer;
pub mod detect;
pub mod error;
pub mod model;
pub mod recognition;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use analyzer::{AnalyzeOptions, ContactExtractor, LayoutAnalyzer};
pub use detect::{detect_upload_from_bytes, detect_upload_from_path, UploadFormat};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, ContactInfo, DetectedSection, Layout, ResumeDocument, ResumeForm, Token,
};
pub use recognition::{
    load_recognition, Recognition, RecognizedWord, TesseractRecognizer, TextRecognizer,
};
pub use render::{CleanupOptions, CleanupPreset, JsonFormat, RenderOptions};

use std::path::Path;

use rayon::prelude::*;

/// Analyze recognized tokens with default thresholds.
///
/// Never fails: empty input yields an empty single-column document.
///
/// # Example
///
/// ```
/// use unresume::{analyze_layout, Layout, Token};
///
/// let tokens = vec![
///     Token::new("Jane", 50.0, 20.0, 80.0, 30.0),
///     Token::new("jane@example.com", 50.0, 60.0, 200.0, 12.0),
/// ];
/// let doc = analyze_layout(&tokens, 800.0);
/// assert_eq!(doc.contact.email, "jane@example.com");
/// assert_eq!(doc.layout, Layout::Single);
/// ```
pub fn analyze_layout(tokens: &[Token], image_width: f32) -> ResumeDocument {
    LayoutAnalyzer::new().analyze(tokens, image_width)
}

/// Analyze recognized tokens with custom thresholds.
pub fn analyze_layout_with_options(
    tokens: &[Token],
    image_width: f32,
    options: &AnalyzeOptions,
) -> ResumeDocument {
    LayoutAnalyzer::with_options(options.clone()).analyze(tokens, image_width)
}

/// Analyze a recognition result.
///
/// `width` overrides the width reported by the engine. Fails with
/// [`Error::MissingImageWidth`] when neither is available.
pub fn analyze_recognition(recognition: &Recognition, width: Option<f32>) -> Result<ResumeDocument> {
    analyze_recognition_with_options(recognition, width, &AnalyzeOptions::default())
}

/// Analyze a recognition result with custom thresholds.
pub fn analyze_recognition_with_options(
    recognition: &Recognition,
    width: Option<f32>,
    options: &AnalyzeOptions,
) -> Result<ResumeDocument> {
    let width = resolve_width(recognition, width)?;
    let tokens = recognition.tokens();
    Ok(analyze_layout_with_options(&tokens, width, options))
}

/// Analyze saved recognition output (`.tsv` or `.json`).
///
/// # Example
///
/// ```no_run
/// use unresume::analyze_file;
///
/// let doc = analyze_file("resume.tsv").unwrap();
/// println!("{} ({} sections)", doc.name, doc.section_count());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    analyze_file_with_options(path, None, &AnalyzeOptions::default())
}

/// Analyze saved recognition output with a width override and options.
pub fn analyze_file_with_options<P: AsRef<Path>>(
    path: P,
    width: Option<f32>,
    options: &AnalyzeOptions,
) -> Result<ResumeDocument> {
    let recognition = load_recognition(path)?;
    analyze_recognition_with_options(&recognition, width, options)
}

/// Analyze many recognition files.
///
/// Results are returned in input order. Files are processed on the Rayon
/// pool unless `options.parallel` is false; one failing file does not
/// affect the others.
pub fn analyze_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &AnalyzeOptions,
) -> Vec<Result<ResumeDocument>> {
    analyze_files_with_progress(paths, options, |_| {})
}

/// Analyze many recognition files, calling `on_file` as each one finishes.
///
/// The callback runs once per path on whichever thread analyzed it, so
/// completion order may differ from input order. The returned results are
/// still in input order.
pub fn analyze_files_with_progress<P, F>(
    paths: &[P],
    options: &AnalyzeOptions,
    on_file: F,
) -> Vec<Result<ResumeDocument>>
where
    P: AsRef<Path> + Sync,
    F: Fn(&Path) + Sync,
{
    log::debug!(
        "analyzing {} files ({})",
        paths.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    let analyze = |p: &P| {
        let result = analyze_file_with_options(p, None, options);
        on_file(p.as_ref());
        result
    };

    if options.parallel {
        paths.par_iter().map(analyze).collect()
    } else {
        paths.iter().map(analyze).collect()
    }
}

/// Analyze a recognition file and render the form as Markdown.
///
/// # Example
///
/// ```no_run
/// use unresume::to_markdown;
///
/// let markdown = to_markdown("resume.json").unwrap();
/// std::fs::write("resume.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    Unresume::new().parse_file(path)?.to_markdown()
}

/// Analyze a recognition file and serialize the document as JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    Unresume::new().parse_file(path)?.to_json(format)
}

fn resolve_width(recognition: &Recognition, width: Option<f32>) -> Result<f32> {
    width
        .or(recognition.width)
        .filter(|w| w.is_finite())
        .ok_or(Error::MissingImageWidth)
}

/// Builder for analyzing and rendering resumes.
///
/// # Example
///
/// ```no_run
/// use unresume::{CleanupPreset, Unresume};
///
/// let markdown = Unresume::new()
///     .with_width(1240.0)
///     .with_frontmatter()
///     .with_cleanup(CleanupPreset::Standard)
///     .parse_file("resume.tsv")?
///     .to_markdown()?;
/// # Ok::<(), unresume::Error>(())
/// ```
pub struct Unresume {
    analyze_options: AnalyzeOptions,
    render_options: RenderOptions,
    width: Option<f32>,
}

impl Unresume {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            analyze_options: AnalyzeOptions::default(),
            render_options: RenderOptions::default(),
            width: None,
        }
    }

    /// Set analysis thresholds.
    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.analyze_options = options;
        self
    }

    /// Override the image width reported by the recognizer.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Analyze saved recognition output.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<UnresumeResult> {
        let recognition = load_recognition(path)?;
        self.analyze_recognition(&recognition)
    }

    /// Analyze a recognition result.
    pub fn analyze_recognition(self, recognition: &Recognition) -> Result<UnresumeResult> {
        let document =
            analyze_recognition_with_options(recognition, self.width, &self.analyze_options)?;
        Ok(self.finish(document))
    }

    /// Analyze tokens directly; the width must have been set.
    pub fn analyze_tokens(self, tokens: &[Token]) -> Result<UnresumeResult> {
        let width = self.width.ok_or(Error::MissingImageWidth)?;
        let document = analyze_layout_with_options(tokens, width, &self.analyze_options);
        Ok(self.finish(document))
    }

    fn finish(self, document: ResumeDocument) -> UnresumeResult {
        let form = ResumeForm::from_document(&document);
        UnresumeResult {
            document,
            form,
            render_options: self.render_options,
        }
    }
}

impl Default for Unresume {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing one resume page.
pub struct UnresumeResult {
    /// The analyzed document
    pub document: ResumeDocument,
    /// Editable form built from the document
    pub form: ResumeForm,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnresumeResult {
    /// Render the form as Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.form, &self.render_options)
    }

    /// Render the document as plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Serialize the document as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Serialize the form as JSON.
    pub fn form_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.form, format)
    }

    /// Get the document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }
}
