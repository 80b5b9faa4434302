//! Tesseract command-line recognizer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

use super::{parse_tsv, ProgressReporter, Recognition, TextRecognizer};

/// Runs the `tesseract` binary and parses its TSV output.
///
/// The binary reports no incremental progress on stdout, so only the start
/// (0) and the end of parsing (100) are reported.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
    language: String,
}

impl TesseractRecognizer {
    /// Use `tesseract` from `PATH` with English data.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }

    /// Set the binary location.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the language data (e.g. `eng`, `eng+deu`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Get the binary location.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Get the language data.
    pub fn language(&self) -> &str {
        &self.language
    }

    fn command(&self, image: &Path) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("tsv");
        command
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &Path, progress: &mut dyn FnMut(u8)) -> Result<Recognition> {
        let mut reporter = ProgressReporter::new(progress);
        reporter.report(0);

        log::info!(
            "running {} on {} ({})",
            self.binary.display(),
            image.display(),
            self.language
        );

        let output = self.command(image).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::RecognizerUnavailable(format!("{} not found", self.binary.display()))
            } else {
                Error::Recognition(e.to_string())
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Recognition(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let recognition = parse_tsv(&stdout)?;
        reporter.report(100);

        Ok(recognition)
    }
}
