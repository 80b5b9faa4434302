//! Integration tests for rendering analyzed resumes.

use unresume::render::{to_debug_svg, to_json, to_markdown, to_text, CleanupPreset};
use unresume::{
    analyze_layout, JsonFormat, Layout, RenderOptions, ResumeDocument, ResumeForm, Token,
};

fn two_column_resume() -> Vec<Token> {
    vec![
        Token::new("Jane", 40.0, 20.0, 100.0, 40.0),
        Token::new("Doe", 150.0, 20.0, 90.0, 40.0),
        Token::new("jane@example.com", 40.0, 140.0, 200.0, 14.0),
        Token::new("github.com/jdoe", 500.0, 140.0, 180.0, 14.0),
        Token::new("Summary", 40.0, 200.0, 120.0, 18.0),
        Token::new("Builds", 40.0, 240.0, 70.0, 14.0),
        Token::new("compilers", 120.0, 240.0, 100.0, 14.0),
        Token::new("Awards", 500.0, 400.0, 100.0, 18.0),
        Token::new("Hackathon", 500.0, 440.0, 120.0, 14.0),
        Token::new("Winner", 630.0, 440.0, 80.0, 14.0),
    ]
}

fn analyzed() -> ResumeDocument {
    analyze_layout(&two_column_resume(), 800.0)
}

#[test]
fn test_document_layout() {
    let doc = analyzed();
    assert_eq!(doc.name, "Jane Doe");
    assert_eq!(doc.layout, Layout::Double);
    assert_eq!(doc.section_count(), 2);
}

#[test]
fn test_form_mapping() {
    let form = ResumeForm::from_document(&analyzed());
    assert_eq!(form.summary, "Builds compilers");
    assert_eq!(form.github, "github.com/jdoe");
    assert_eq!(form.extra.len(), 1);
    assert_eq!(form.get("Awards Hackathon Winner"), Some("Hackathon Winner"));
}

#[test]
fn test_markdown_output() {
    let form = ResumeForm::from_document(&analyzed());
    let markdown = to_markdown(&form, &RenderOptions::default()).unwrap();

    assert!(markdown.starts_with("# Jane Doe\n\njane@example.com\n\ngithub.com/jdoe\n\n"));
    assert!(markdown.contains("## Professional Summary\n\nBuilds compilers\n"));
    assert!(markdown.contains("## Awards Hackathon Winner\n\nHackathon Winner\n"));
}

#[test]
fn test_markdown_reflects_edits() {
    let mut form = ResumeForm::from_document(&analyzed());
    form.set("skills", "Rust, C++");
    form.set("name", "Jane Q. Doe");

    let options = RenderOptions::new()
        .with_summary_heading("Profile")
        .with_cleanup_preset(CleanupPreset::Standard);
    let markdown = to_markdown(&form, &options).unwrap();

    assert!(markdown.starts_with("# Jane Q. Doe\n"));
    assert!(markdown.contains("## Profile\n"));
    assert!(markdown.contains("## Skills\n\nRust, C++\n"));
}

#[test]
fn test_text_output() {
    let text = to_text(&analyzed(), &RenderOptions::default()).unwrap();
    let blocks: Vec<&str> = text.split("\n\n").collect();

    assert_eq!(blocks[0], "Jane Doe");
    assert_eq!(blocks[1], "jane@example.com\ngithub.com/jdoe");
    assert!(blocks[2].starts_with("Summary"));
}

#[test]
fn test_json_round_trip() {
    let doc = analyzed();
    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    let back: ResumeDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);

    let form_json = to_json(&ResumeForm::from_document(&doc), JsonFormat::Compact).unwrap();
    assert!(form_json.contains("\"layout\":\"double\""));
    assert!(form_json.contains("\"extra\":{\"Awards Hackathon Winner\":\"Hackathon Winner\"}"));
}

#[test]
fn test_debug_overlay() {
    let svg = to_debug_svg(&two_column_resume(), 800.0, Some(1000.0));
    assert_eq!(svg.matches("<rect").count(), 10);
    assert!(svg.contains("x1=\"400\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}
