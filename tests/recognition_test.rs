//! Integration tests for loading recognition output from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unresume::recognition::{words_to_tokens, RecognitionFormat};
use unresume::{
    analyze_file, analyze_file_with_options, analyze_files, load_recognition, AnalyzeOptions,
    Error, Layout, Unresume,
};

const HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

fn tsv(rows: &[(f32, f32, f32, f32, &str)]) -> String {
    let mut out = format!("{}\n1\t1\t0\t0\t0\t0\t0\t0\t1000\t1400\t-1\t\n", HEADER);
    for (i, (left, top, width, height, text)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "5\t1\t1\t1\t1\t{}\t{}\t{}\t{}\t{}\t91.5\t{}\n",
            i + 1,
            left,
            top,
            width,
            height,
            text
        ));
    }
    out
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn resume_tsv() -> String {
    tsv(&[
        (60.0, 40.0, 120.0, 40.0, "Jane"),
        (200.0, 40.0, 110.0, 40.0, "Doe"),
        (60.0, 150.0, 220.0, 14.0, "jane@example.com"),
        (300.0, 150.0, 130.0, 14.0, "555-123-4567"),
        (60.0, 260.0, 100.0, 18.0, "Skills"),
        (60.0, 300.0, 60.0, 14.0, "Rust"),
        (130.0, 300.0, 40.0, 14.0, "SQL"),
        (60.0, 400.0, 140.0, 18.0, "Education"),
        (60.0, 440.0, 200.0, 14.0, "Springfield"),
    ])
}

#[test]
fn test_analyze_tsv_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "jane.tsv", &resume_tsv());

    let doc = analyze_file(&path).unwrap();
    assert_eq!(doc.name, "Jane Doe");
    assert_eq!(doc.contact.email, "jane@example.com");
    assert_eq!(doc.contact.phone, "555-123-4567");
    assert_eq!(doc.layout, Layout::Single);
    // The phone number has no letters, so it also opens a (blank) section
    assert_eq!(doc.section_count(), 3);
    assert_eq!(doc.sections[0].title, "555-123-4567 Skills Rust");
    assert!(doc.sections[0].content.is_empty());
    assert_eq!(doc.sections[1].title, "Skills Rust SQL");
    assert_eq!(doc.sections[1].content, "Rust SQL");
}

#[test]
fn test_analyze_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "jane.json",
        r#"{
            "width": 1000,
            "height": 1400,
            "words": [
                {"text": "Jane", "bbox": {"x0": 60, "y0": 40, "x1": 180, "y1": 80}, "confidence": 96.0},
                {"text": " ", "bbox": {"x0": 190, "y0": 40, "x1": 195, "y1": 80}},
                {"text": "linkedin.com/in/jane", "bbox": {"x0": 60, "y0": 150, "x1": 300, "y1": 164}}
            ]
        }"#,
    );

    let recognition = load_recognition(&path).unwrap();
    assert_eq!(recognition.words.len(), 3);
    assert_eq!(recognition.tokens().len(), 2);

    let doc = analyze_file(&path).unwrap();
    assert_eq!(doc.name, "Jane");
    assert_eq!(doc.contact.linkedin, "linkedin.com/in/jane");
}

#[test]
fn test_json_word_list_needs_width() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "words.json",
        r#"[{"text": "Jane", "bbox": {"x0": 60, "y0": 40, "x1": 180, "y1": 80}}]"#,
    );

    assert!(matches!(analyze_file(&path), Err(Error::MissingImageWidth)));

    let doc = analyze_file_with_options(&path, Some(1000.0), &AnalyzeOptions::default()).unwrap();
    assert_eq!(doc.name, "Jane");
}

#[test]
fn test_malformed_tsv() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.tsv", &format!("{}\n5\t1\t1\n", HEADER));

    let result = analyze_file(&path);
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", "{ not json");

    let result = analyze_file(&path);
    assert!(matches!(result, Err(Error::MalformedInput(_))));
}

#[test]
fn test_missing_file() {
    let result = analyze_file(Path::new("/nonexistent/page.tsv"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        RecognitionFormat::from_path(Path::new("PAGE.TSV")).unwrap(),
        RecognitionFormat::Tsv
    );
    assert!(RecognitionFormat::from_path(Path::new("page.png")).is_err());
}

#[test]
fn test_analyze_files_order_and_isolation() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.tsv", &resume_tsv());
    let bad = write(&dir, "bad.json", "[");
    let other = write(
        &dir,
        "other.tsv",
        &tsv(&[(600.0, 40.0, 100.0, 40.0, "Sam"), (60.0, 40.0, 100.0, 40.0, "Lee")]),
    );

    for options in [AnalyzeOptions::default(), AnalyzeOptions::new().sequential()] {
        let results = analyze_files(&[&good, &bad, &other], &options);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().name, "Jane Doe");
        assert!(results[1].is_err());

        let other = results[2].as_ref().unwrap();
        assert_eq!(other.name, "Lee Sam");
        assert_eq!(other.layout, Layout::Double);
    }
}

#[test]
fn test_builder_outputs_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "jane.tsv", &resume_tsv());

    let result = Unresume::new().with_frontmatter().parse_file(&path).unwrap();
    assert_eq!(result.form.skills, "Rust SQL");
    assert_eq!(result.form.education, "Springfield");

    let markdown = result.to_markdown().unwrap();
    assert!(markdown.starts_with("---\nname: \"Jane Doe\"\nlayout: single\n---\n"));
    assert!(markdown.contains("## Skills\n\nRust SQL\n"));
}

#[test]
fn test_blank_words_dropped_before_analysis() {
    let recognition = unresume::recognition::parse_tsv(&tsv(&[
        (60.0, 40.0, 120.0, 40.0, "Jane"),
        (200.0, 40.0, 5.0, 40.0, ""),
    ]))
    .unwrap();

    assert_eq!(recognition.words.len(), 2);
    assert_eq!(words_to_tokens(&recognition.words).len(), 1);
}
