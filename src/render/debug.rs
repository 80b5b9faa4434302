//! SVG overlay of token boxes for inspecting layout decisions.

use crate::model::Token;

/// Draw every token box and the column midline as an SVG document.
///
/// `height` defaults to the lowest token bottom when unknown.
pub fn to_debug_svg(tokens: &[Token], width: f32, height: Option<f32>) -> String {
    let tokens: Vec<Token> = tokens.iter().map(Token::sanitized).collect();
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let height = height
        .filter(|h| h.is_finite())
        .unwrap_or_else(|| tokens.iter().map(Token::bottom).fold(0.0, f32::max))
        .max(0.0);

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    );

    for token in &tokens {
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"red\" stroke-width=\"1\"><title>{}</title></rect>\n",
            token.x,
            token.y,
            token.width,
            token.height,
            escape_xml(&token.text)
        ));
    }

    let mid = width / 2.0;
    svg.push_str(&format!(
        "  <line x1=\"{m}\" y1=\"0\" x2=\"{m}\" y2=\"{h}\" stroke=\"blue\" stroke-dasharray=\"4 4\"/>\n",
        m = mid,
        h = height
    ));
    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_contains_boxes_and_midline() {
        let tokens = vec![
            Token::new("Jane", 10.0, 10.0, 40.0, 20.0),
            Token::new("R&D", 500.0, 300.0, 30.0, 12.0),
        ];
        let svg = to_debug_svg(&tokens, 800.0, None);

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("<title>R&amp;D</title>"));
        assert!(svg.contains("x1=\"400\""));
        assert!(svg.contains("height=\"312\""));
    }

    #[test]
    fn test_explicit_height() {
        let svg = to_debug_svg(&[], 600.0, Some(900.0));
        assert!(svg.contains("viewBox=\"0 0 600 900\""));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<a href=\"x\">'"), "&lt;a href=&quot;x&quot;&gt;&apos;");
    }
}
