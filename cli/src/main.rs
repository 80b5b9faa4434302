//! unresume CLI - resume layout analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::analyzer::{find_headers, sort_reading_order, ColumnBalance};
use unresume::render::{self, to_debug_svg};
use unresume::{
    analyze_files_with_progress, analyze_recognition_with_options, detect_upload_from_path,
    load_recognition, AnalyzeOptions, CleanupPreset, JsonFormat, Recognition, RenderOptions,
    ResumeDocument, ResumeForm, TesseractRecognizer, TextRecognizer,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn recognized resume pages into JSON, Markdown, and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze saved recognition output (.tsv or .json)
    Analyze {
        /// Recognition output file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,

        #[command(flatten)]
        render: RenderArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run Tesseract on a resume image and analyze the result
    Ocr {
        /// Resume image
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// Tesseract language data
        #[arg(short, long, default_value = "eng")]
        language: String,

        /// Tesseract binary
        #[arg(long, env = "TESSERACT_BIN", default_value = "tesseract")]
        tesseract: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,

        #[command(flatten)]
        render: RenderArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Draw token boxes and the column midline as SVG
    Debug {
        /// Recognition output file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Image width in pixels (overrides the recognized width)
        #[arg(long)]
        width: Option<f32>,

        /// Output SVG file
        #[arg(short, long, value_name = "FILE", default_value = "overlay.svg")]
        output: PathBuf,
    },

    /// Show layout statistics for recognition output
    Info {
        /// Recognition output file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Image width in pixels (overrides the recognized width)
        #[arg(long)]
        width: Option<f32>,
    },

    /// Detect whether an upload is a supported image or PDF
    Detect {
        /// Uploaded file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Analyze many recognition files into a directory
    Batch {
        /// Recognition output files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "unresume_output")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct AnalysisArgs {
    /// Image width in pixels (overrides the recognized width)
    #[arg(long)]
    width: Option<f32>,

    /// Minimum left/right balance for a two-column layout
    #[arg(long, default_value = "0.3")]
    column_threshold: f32,

    /// Gap between a section header and its content
    #[arg(long, default_value = "20")]
    section_buffer: f32,
}

impl AnalysisArgs {
    fn options(&self) -> AnalyzeOptions {
        AnalyzeOptions::new()
            .with_column_balance(self.column_threshold)
            .with_section_buffer(self.section_buffer)
    }
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Include YAML frontmatter in Markdown
    #[arg(long)]
    frontmatter: bool,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        let mut options = RenderOptions::new().with_frontmatter(self.frontmatter);
        if let Some(level) = self.cleanup {
            options = options.with_cleanup_preset(level.into());
        }
        options
    }

    fn json_format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum OutputFormat {
    /// Analyzed document as JSON
    Json,
    /// Editable form as Markdown
    Markdown,
    /// Plain text
    Text,
    /// Editable form as JSON
    Form,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Form => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization and whitespace)
    Minimal,
    /// Standard cleanup (default)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            analysis,
            render,
            output,
        }) => cmd_analyze(&input, &analysis, &render, output.as_deref()),
        Some(Commands::Ocr {
            input,
            language,
            tesseract,
            analysis,
            render,
            output,
        }) => cmd_ocr(
            &input,
            &language,
            &tesseract,
            &analysis,
            &render,
            output.as_deref(),
        ),
        Some(Commands::Debug {
            input,
            width,
            output,
        }) => cmd_debug(&input, width, &output),
        Some(Commands::Info { input, width }) => cmd_info(&input, width),
        Some(Commands::Detect { input }) => cmd_detect(&input),
        Some(Commands::Batch {
            inputs,
            output,
            format,
            sequential,
        }) => cmd_batch(&inputs, &output, format, sequential),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unresume <COMMAND> <FILE>".yellow());
            println!("       unresume --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_analyze(
    input: &Path,
    analysis: &AnalysisArgs,
    render: &RenderArgs,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let recognition = load_recognition(input)?;
    let doc = analyze_recognition_with_options(&recognition, analysis.width, &analysis.options())?;
    let rendered = render_document(&doc, render.format, &render.options(), render.json_format())?;
    write_or_print(output, &rendered)
}

fn cmd_ocr(
    input: &Path,
    language: &str,
    tesseract: &Path,
    analysis: &AnalysisArgs,
    render: &RenderArgs,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_upload_from_path(input)?;
    if !format.is_image() {
        return Err("PDF uploads must be rasterized to an image before recognition".into());
    }

    let recognizer = TesseractRecognizer::new()
        .with_binary(tesseract)
        .with_language(language);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}% {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Recognizing with {}...", recognizer.name()));

    let recognition = recognizer.recognize(input, &mut |percent: u8| {
        pb.set_position(u64::from(percent));
    });
    let recognition = match recognition {
        Ok(r) => {
            pb.finish_with_message("Done!");
            r
        }
        Err(e) => {
            pb.abandon_with_message("Failed");
            return Err(e.into());
        }
    };

    let doc = analyze_recognition_with_options(&recognition, analysis.width, &analysis.options())?;
    let rendered = render_document(&doc, render.format, &render.options(), render.json_format())?;
    write_or_print(output, &rendered)
}

fn cmd_debug(
    input: &Path,
    width: Option<f32>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let recognition = load_recognition(input)?;
    let width = page_width(&recognition, width)?;

    let svg = to_debug_svg(&recognition.tokens(), width, recognition.height);
    fs::write(output, svg)?;
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_info(input: &Path, width: Option<f32>) -> Result<(), Box<dyn std::error::Error>> {
    let recognition = load_recognition(input)?;
    let width = page_width(&recognition, width)?;
    let options = AnalyzeOptions::default();
    let tokens = recognition.tokens();

    let doc = analyze_recognition_with_options(&recognition, Some(width), &options)?;
    let balance = ColumnBalance::measure(&tokens, width);

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Width".bold(), width);
    if let Some(height) = recognition.height {
        println!("{}: {}", "Height".bold(), height);
    }
    println!(
        "{}: {} ({} blank dropped)",
        "Tokens".bold(),
        tokens.len(),
        recognition.words.len() - tokens.len()
    );

    println!();
    println!("{}", "Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Left of midline".bold(), balance.left);
    println!("{}: {}", "Right of midline".bold(), balance.right);
    println!("{}: {:.2}", "Balance".bold(), balance.ratio());
    println!("{}: {}", "Layout".bold(), doc.layout);

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let sorted = sort_reading_order(&tokens);
    let headers = find_headers(&sorted, options.title_word_count);
    if headers.is_empty() {
        println!("{}", "No section headers found".yellow());
    }
    for header in &headers {
        println!("  {} {} {}", "├─".dimmed(), header.title, format!("(y={})", header.y).dimmed());
    }

    Ok(())
}

fn cmd_detect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_upload_from_path(input)?;

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Type".bold(), format.mime_type());
    if format.is_image() {
        println!("{}", "Ready for recognition".green());
    } else {
        println!("{}", "Rasterize pages to images before recognition".yellow());
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    format: OutputFormat,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let options = AnalyzeOptions::new().with_parallel(!sequential);
    let render_options = RenderOptions::default();

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Analyzing...");

    let results = analyze_with_progress(inputs, &options, &pb);
    pb.set_message("Writing...");

    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        let written = result
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|doc| {
                let rendered =
                    render_document(&doc, format, &render_options, JsonFormat::Pretty)?;
                let path = output_dir.join(output_name(input, format));
                fs::write(&path, rendered)?;
                Ok(path)
            });

        match written {
            Ok(path) => pb.println(format!("{} {}", "Wrote".green(), path.display())),
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
            }
        }
    }

    pb.finish_with_message("Done!");
    println!(
        "\n{} {} analyzed, {} failed",
        "Done!".green().bold(),
        inputs.len() - failed,
        failed
    );

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unresume".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume layout analysis tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unresume".dimmed());
    println!("License: MIT");
}

fn render_document(
    doc: &ResumeDocument,
    format: OutputFormat,
    options: &RenderOptions,
    json: JsonFormat,
) -> unresume::Result<String> {
    match format {
        OutputFormat::Json => render::to_json(doc, json),
        OutputFormat::Form => render::to_json(&ResumeForm::from_document(doc), json),
        OutputFormat::Markdown => render::to_markdown(&ResumeForm::from_document(doc), options),
        OutputFormat::Text => render::to_text(doc, options),
    }
}

/// Analyze the batch, advancing the bar as each file finishes.
fn analyze_with_progress(
    inputs: &[PathBuf],
    options: &AnalyzeOptions,
    pb: &ProgressBar,
) -> Vec<unresume::Result<ResumeDocument>> {
    analyze_files_with_progress(inputs, options, |path| {
        log::debug!("analyzed {}", path.display());
        pb.inc(1);
    })
}

fn page_width(recognition: &Recognition, width: Option<f32>) -> unresume::Result<f32> {
    width
        .or(recognition.width)
        .filter(|w| w.is_finite())
        .ok_or(unresume::Error::MissingImageWidth)
}

fn output_name(input: &Path, format: OutputFormat) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}.{}", stem, format.extension())
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}
