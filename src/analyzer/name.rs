//! Candidate name extraction.

use std::cmp::Ordering;

use crate::model::Token;

/// Pick the candidate's name from the largest words near the top of the page.
///
/// The band starts at the *first received* token's `y`, not the topmost one;
/// recognizers emit words in reading order, so the first word sits on the
/// first line. Within the band the tallest `max_words` tokens are kept and
/// re-ordered left to right.
pub fn extract_name(tokens: &[Token], band_height: f32, max_words: usize) -> String {
    let Some(first) = tokens.first() else {
        return String::new();
    };
    let cutoff = first.y + band_height;

    let mut band: Vec<&Token> = tokens.iter().filter(|t| t.y < cutoff).collect();

    // Stable sorts: ties keep received order
    band.sort_by(|a, b| b.height.partial_cmp(&a.height).unwrap_or(Ordering::Equal));
    band.truncate(max_words);
    band.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    band.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
