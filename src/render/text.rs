//! Plain text rendering for analyzed resumes.

use crate::error::Result;
use crate::model::ResumeDocument;

use super::{CleanupPipeline, RenderOptions};

/// Convert a document to plain text.
///
/// Cleanup, when configured, runs per value so that line breaks between
/// the name, contact lines and sections survive whitespace collapsing.
pub fn to_text(doc: &ResumeDocument, options: &RenderOptions) -> Result<String> {
    let pipeline = options.cleanup.clone().map(CleanupPipeline::new);
    let clean = |text: &str| match &pipeline {
        Some(p) => p.process(text),
        None => text.trim().to_string(),
    };

    let mut blocks: Vec<String> = Vec::new();

    let name = clean(&doc.name);
    if !name.is_empty() {
        blocks.push(name);
    }

    let contact = &doc.contact;
    let lines: Vec<String> = [
        [&contact.email, &contact.phone, &contact.location].as_slice(),
        [&contact.linkedin, &contact.github].as_slice(),
    ]
    .iter()
    .map(|line| {
        line.iter()
            .map(|v| clean(v))
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(&options.contact_separator)
    })
    .filter(|line| !line.is_empty())
    .collect();
    if !lines.is_empty() {
        blocks.push(lines.join("\n"));
    }

    for section in &doc.sections {
        let title = clean(&section.title);
        let content = clean(&section.content);
        if content.is_empty() && !options.include_empty_fields {
            continue;
        }
        if content.is_empty() {
            blocks.push(title);
        } else {
            blocks.push(format!("{}\n{}", title, content));
        }
    }

    Ok(blocks.join("\n\n"))
}
