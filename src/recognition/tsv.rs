//! Tesseract TSV output parsing.
//!
//! Columns: `level page_num block_num par_num line_num word_num left top
//! width height conf text`. Level 1 rows describe the page, level 5 rows
//! are words; the levels in between are layout groupings and are skipped.

use crate::error::{Error, Result};
use crate::model::BoundingBox;

use super::{Recognition, RecognizedWord};

const COLUMN_COUNT: usize = 12;
const LEVEL_PAGE: u32 = 1;
const LEVEL_WORD: u32 = 5;

/// Parse Tesseract TSV output into a recognition result.
pub fn parse_tsv(content: &str) -> Result<Recognition> {
    let mut recognition = Recognition::default();

    for (line_no, line) in content.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with("level") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        // The text column is dropped entirely by some writers when empty
        if fields.len() < COLUMN_COUNT - 1 || fields.len() > COLUMN_COUNT {
            return Err(Error::MalformedInput(format!(
                "line {}: expected {} columns, found {}",
                line_no,
                COLUMN_COUNT,
                fields.len()
            )));
        }

        let level: u32 = parse_field(fields[0], "level", line_no)?;
        match level {
            LEVEL_PAGE => {
                recognition.width = Some(parse_field(fields[8], "width", line_no)?);
                recognition.height = Some(parse_field(fields[9], "height", line_no)?);
            }
            LEVEL_WORD => {
                let left: f32 = parse_field(fields[6], "left", line_no)?;
                let top: f32 = parse_field(fields[7], "top", line_no)?;
                let width: f32 = parse_field(fields[8], "width", line_no)?;
                let height: f32 = parse_field(fields[9], "height", line_no)?;
                let confidence = match fields[10].trim().parse::<f32>() {
                    Ok(c) => Some(c).filter(|c| *c >= 0.0),
                    Err(_) => {
                        log::warn!("line {}: ignoring confidence {:?}", line_no, fields[10]);
                        None
                    }
                };
                let text = fields.get(11).copied().unwrap_or_default();

                recognition.words.push(RecognizedWord {
                    text: text.to_string(),
                    bbox: BoundingBox::from_origin_size(left, top, width, height),
                    confidence,
                });
            }
            _ => {}
        }
    }

    Ok(recognition)
}

fn parse_field<T: std::str::FromStr>(value: &str, name: &str, line_no: usize) -> Result<T> {
    value.trim().parse().map_err(|_| {
        Error::MalformedInput(format!(
            "line {}: invalid {} value {:?}",
            line_no, name, value
        ))
    })
}
