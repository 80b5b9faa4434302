//! Upload format detection and validation.
//!
//! Resumes arrive either as a raster image or as a PDF. Only those kinds are
//! accepted; PDFs must be rasterized before recognition.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of uploaded resume file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    /// PDF document
    Pdf,
    /// PNG image
    Png,
    /// JPEG image
    Jpeg,
    /// GIF image
    Gif,
    /// Windows bitmap
    Bmp,
    /// WebP image
    Webp,
    /// TIFF image (either byte order)
    Tiff,
}

impl UploadFormat {
    /// Whether the upload can be fed to a recognizer directly.
    pub fn is_image(&self) -> bool {
        !matches!(self, UploadFormat::Pdf)
    }

    /// MIME type for the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            UploadFormat::Pdf => "application/pdf",
            UploadFormat::Png => "image/png",
            UploadFormat::Jpeg => "image/jpeg",
            UploadFormat::Gif => "image/gif",
            UploadFormat::Bmp => "image/bmp",
            UploadFormat::Webp => "image/webp",
            UploadFormat::Tiff => "image/tiff",
        }
    }
}

impl std::fmt::Display for UploadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

const HEADER_LEN: usize = 16;

const PDF_MAGIC: &[u8] = b"%PDF-";
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_MAGIC: &[u8] = b"\xff\xd8\xff";
const GIF87_MAGIC: &[u8] = b"GIF87a";
const GIF89_MAGIC: &[u8] = b"GIF89a";
const BMP_MAGIC: &[u8] = b"BM";
const TIFF_LE_MAGIC: &[u8] = b"II*\x00";
const TIFF_BE_MAGIC: &[u8] = b"MM\x00*";

/// Detect the upload format from a file path.
///
/// # Example
/// ```no_run
/// use unresume::detect::detect_upload_from_path;
///
/// let format = detect_upload_from_path("resume.png").unwrap();
/// println!("{}", format.mime_type());
/// ```
pub fn detect_upload_from_path<P: AsRef<Path>>(path: P) -> Result<UploadFormat> {
    let mut file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_upload_from_bytes(&header)
}

/// Detect the upload format from the leading bytes of a file.
pub fn detect_upload_from_bytes(data: &[u8]) -> Result<UploadFormat> {
    let format = if data.starts_with(PDF_MAGIC) {
        UploadFormat::Pdf
    } else if data.starts_with(PNG_MAGIC) {
        UploadFormat::Png
    } else if data.starts_with(JPEG_MAGIC) {
        UploadFormat::Jpeg
    } else if data.starts_with(GIF87_MAGIC) || data.starts_with(GIF89_MAGIC) {
        UploadFormat::Gif
    } else if is_webp(data) {
        UploadFormat::Webp
    } else if data.starts_with(TIFF_LE_MAGIC) || data.starts_with(TIFF_BE_MAGIC) {
        UploadFormat::Tiff
    } else if data.len() >= 14 && data.starts_with(BMP_MAGIC) {
        UploadFormat::Bmp
    } else {
        return Err(Error::UnsupportedFileType(
            "please upload an image or PDF".to_string(),
        ));
    };

    Ok(format)
}

/// RIFF container with a WEBP form type.
fn is_webp(data: &[u8]) -> bool {
    data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP"
}

/// Check if a file is an accepted resume upload.
pub fn is_supported_upload<P: AsRef<Path>>(path: P) -> bool {
    detect_upload_from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf() {
        let format = detect_upload_from_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(format, UploadFormat::Pdf);
        assert!(!format.is_image());
    }

    #[test]
    fn test_detect_png() {
        let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
        let format = detect_upload_from_bytes(data).unwrap();
        assert_eq!(format, UploadFormat::Png);
        assert!(format.is_image());
        assert_eq!(format.mime_type(), "image/png");
    }

    #[test]
    fn test_detect_jpeg() {
        let data = b"\xff\xd8\xff\xe0\x00\x10JFIF\x00";
        assert_eq!(detect_upload_from_bytes(data).unwrap(), UploadFormat::Jpeg);
    }

    #[test]
    fn test_detect_webp() {
        let data = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_upload_from_bytes(data).unwrap(), UploadFormat::Webp);
    }

    #[test]
    fn test_detect_tiff_both_orders() {
        assert_eq!(
            detect_upload_from_bytes(b"II*\x00\x08\x00\x00\x00").unwrap(),
            UploadFormat::Tiff
        );
        assert_eq!(
            detect_upload_from_bytes(b"MM\x00*\x00\x00\x00\x08").unwrap(),
            UploadFormat::Tiff
        );
    }

    #[test]
    fn test_detect_rejects_html() {
        let result = detect_upload_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
    }

    #[test]
    fn test_detect_rejects_empty_and_short_bmp() {
        assert!(detect_upload_from_bytes(b"").is_err());
        // "BM" alone is too short to be a bitmap header
        assert!(detect_upload_from_bytes(b"BM").is_err());
    }
}
