//! Rendering module for converting analyzed resumes to output formats.

mod cleanup;
mod debug;
mod json;
mod markdown;
mod options;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use debug::to_debug_svg;
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use text::to_text;
