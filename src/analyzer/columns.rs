//! Single vs double column classification.

use crate::model::{Layout, Token};

/// Token counts on each side of the page midline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnBalance {
    /// Tokens centered left of the midline
    pub left: usize,
    /// Tokens centered on or right of the midline
    pub right: usize,
}

impl ColumnBalance {
    /// Count tokens by the side of `image_width / 2` their center falls on.
    pub fn measure(tokens: &[Token], image_width: f32) -> Self {
        let midpoint = image_width / 2.0;
        let left = tokens.iter().filter(|t| t.center_x() < midpoint).count();

        Self {
            left,
            right: tokens.len() - left,
        }
    }

    /// `min / max` of the two counts, 0 when either side is empty.
    pub fn ratio(&self) -> f32 {
        let min = self.left.min(self.right);
        let max = self.left.max(self.right);
        if min == 0 {
            return 0.0;
        }
        min as f32 / max as f32
    }
}

/// Classify the page layout from the horizontal token distribution.
///
/// A two-column page has tokens roughly balanced across the midline. This is
/// a coarse heuristic; no tokens at all gives [`Layout::Single`].
pub fn classify_layout(tokens: &[Token], image_width: f32, threshold: f32) -> Layout {
    let balance = ColumnBalance::measure(tokens, image_width);
    let ratio = balance.ratio();

    log::debug!(
        "column balance left={} right={} ratio={:.2}",
        balance.left,
        balance.right,
        ratio
    );

    if ratio > threshold {
        Layout::Double
    } else {
        Layout::Single
    }
}
