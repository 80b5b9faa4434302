//! Word list JSON parsing.
//!
//! Accepts either a bare array of words or an object carrying the page size:
//!
//! ```json
//! { "width": 1240, "height": 1754,
//!   "words": [ { "text": "Jane", "bbox": { "x0": 96, "y0": 80, "x1": 276, "y1": 140 } } ] }
//! ```

use serde::Deserialize;

use crate::error::Result;

use super::{Recognition, RecognizedWord};

#[derive(Deserialize)]
#[serde(untagged)]
enum WordsDocument {
    Page(Recognition),
    Words(Vec<RecognizedWord>),
}

/// Parse a word list JSON document.
pub fn parse_words_json(content: &str) -> Result<Recognition> {
    let document: WordsDocument = serde_json::from_str(content)?;

    Ok(match document {
        WordsDocument::Page(recognition) => recognition,
        WordsDocument::Words(words) => Recognition::from_words(words),
    })
}
