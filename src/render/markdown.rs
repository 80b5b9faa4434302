//! Markdown preview of an edited resume form.

use crate::error::Result;
use crate::model::ResumeForm;

use super::{CleanupPipeline, RenderOptions};

/// Render a form as a Markdown resume.
pub fn to_markdown(form: &ResumeForm, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(form)
}

/// Markdown renderer.
///
/// Order follows the printed preview: name, contact lines, summary,
/// experience, education, skills, then any extra sections.
pub struct MarkdownRenderer {
    options: RenderOptions,
    cleanup: Option<CleanupPipeline>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        let cleanup = options.cleanup.clone().map(CleanupPipeline::new);
        Self { options, cleanup }
    }

    /// Render a form to Markdown.
    pub fn render(&self, form: &ResumeForm) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&self.frontmatter(form)?);
        }

        let name = self.clean(&form.name);
        if !name.is_empty() || self.options.include_empty_fields {
            output.push_str(&format!("# {}\n\n", name));
        }

        for line in [
            [&form.email, &form.phone, &form.location].as_slice(),
            [&form.linkedin, &form.github].as_slice(),
        ] {
            let items: Vec<String> = line
                .iter()
                .map(|v| self.clean(v))
                .filter(|v| !v.is_empty())
                .collect();
            if !items.is_empty() {
                output.push_str(&items.join(&self.options.contact_separator));
                output.push_str("\n\n");
            }
        }

        self.push_section(&mut output, &self.options.summary_heading, &form.summary);
        self.push_section(&mut output, "Experience", &form.experience);
        self.push_section(&mut output, "Education", &form.education);
        self.push_section(&mut output, "Skills", &form.skills);

        if self.options.include_extra_sections {
            for (title, content) in &form.extra {
                self.push_section(&mut output, title, content);
            }
        }

        Ok(output.trim_end().to_string() + "\n")
    }

    fn push_section(&self, output: &mut String, heading: &str, content: &str) {
        let content = self.clean(content);
        if content.is_empty() && !self.options.include_empty_fields {
            return;
        }
        output.push_str(&format!("## {}\n\n", heading.trim()));
        if !content.is_empty() {
            output.push_str(&content);
            output.push_str("\n\n");
        }
    }

    fn frontmatter(&self, form: &ResumeForm) -> Result<String> {
        // JSON strings are valid YAML double-quoted scalars
        let name = serde_json::to_string(&form.name)
            .map_err(|e| crate::error::Error::Render(e.to_string()))?;
        Ok(format!("---\nname: {}\nlayout: {}\n---\n\n", name, form.layout))
    }

    fn clean(&self, text: &str) -> String {
        match &self.cleanup {
            Some(pipeline) => pipeline.process(text),
            None => text.trim().to_string(),
        }
    }
}
