//! lsb command-line front end.
//!
//! Loads a document, lays it out for a viewport and prints the result:
//! tokens, positioned boxes, title and content extents, or all of it as
//! JSON. Warnings go to stderr in yellow as they are raised; a fatal error
//! is printed in red and the process exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lsb_browser::{
    DEFAULT_MAX_DOCUMENT_BYTES, Document, LoadOptions, Page, load_document, load_metrics,
    parse_html_string,
};
use lsb_common::{Diagnostics, Warning};
use lsb_html::TokenList;
use lsb_layout::{
    ApproximateFontMetrics, BoxKind, FontMetrics, LayoutConfig, LayoutResult, Viewport,
};
use owo_colors::OwoColorize;
use serde::Serialize;

/// lsb - tokenize and lay out a tiny HTML subset
#[derive(Parser, Debug)]
#[command(name = "lsb")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lay out a file and print the boxes
    lsb page.html

    # Print the token stream too
    lsb --tokens page.html

    # Parse inline HTML with deterministic metrics, as JSON
    lsb --approximate-metrics --json --html '<h1>Test</h1>'

    # Scrolled, in a smaller window
    lsb --width 400 --height 300 --scroll-y 120 page.html
"#)]
struct Cli {
    /// Path to the HTML file
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print everything as JSON
    #[arg(long)]
    json: bool,

    /// Viewport width
    #[arg(long, default_value = "720")]
    width: f32,

    /// Viewport height
    #[arg(long, default_value = "480")]
    height: f32,

    /// Horizontal scroll offset, clamped to the content
    #[arg(long, default_value = "0")]
    scroll_x: f32,

    /// Vertical scroll offset, clamped to the content
    #[arg(long, default_value = "0")]
    scroll_y: f32,

    /// Font file used for measuring text (default: a system font)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Measure text with fixed ratios instead of a font
    #[arg(long, conflicts_with = "font")]
    approximate_metrics: bool,

    /// Largest accepted document in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_DOCUMENT_BYTES)]
    max_bytes: usize,

    /// Do not print warnings as they are raised
    #[arg(short, long)]
    quiet: bool,
}

/// Everything `--json` prints.
#[derive(Serialize)]
struct Report<'a> {
    title: Option<&'a str>,
    content_width: f32,
    content_height: f32,
    scroll_x: f32,
    scroll_y: f32,
    boxes: &'a [lsb_layout::LayoutBox],
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a TokenList>,
    warnings: &'a [Warning],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut diagnostics = if cli.quiet {
        Diagnostics::quiet()
    } else {
        Diagnostics::echoing()
    };

    let document = load_doc(cli, &mut diagnostics)?;
    let metrics: Box<dyn FontMetrics> = if cli.approximate_metrics {
        Box::new(ApproximateFontMetrics)
    } else {
        load_metrics(cli.font.as_deref(), &mut diagnostics)
    };

    let mut page = Page::new(
        document,
        LayoutConfig::default(),
        Viewport::new(cli.width, cli.height),
        metrics,
    );
    page.scroll_by(cli.scroll_x, cli.scroll_y);
    let result = page.render().clone();

    if cli.json {
        let report = Report {
            title: result.title.as_deref(),
            content_width: result.content_width,
            content_height: result.content_height,
            scroll_x: page.viewport().scroll.x,
            scroll_y: page.viewport().scroll.y,
            boxes: &result.boxes,
            tokens: cli.tokens.then_some(&page.document().tokens),
            warnings: diagnostics.warnings(),
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode JSON")?;
        println!("{json}");
        return Ok(());
    }

    if cli.tokens {
        print_tokens(&page.document().tokens);
        println!();
    }
    print_layout(&result, page.viewport());
    if !diagnostics.is_empty() {
        println!("\n{} warning(s)", diagnostics.len().to_string().yellow());
    }
    Ok(())
}

/// Load the document named on the command line.
fn load_doc(cli: &Cli, diagnostics: &mut Diagnostics) -> anyhow::Result<Document> {
    let options = LoadOptions {
        max_document_bytes: cli.max_bytes,
        ..LoadOptions::default()
    };
    if let Some(html) = &cli.html {
        parse_html_string(html.clone(), &options, diagnostics)
            .context("failed to parse --html input")
    } else if let Some(path) = &cli.path {
        load_document(path, &options, diagnostics)
            .with_context(|| format!("failed to load {}", path.display()))
    } else {
        anyhow::bail!("a file path or --html is required")
    }
}

fn print_tokens(tokens: &TokenList) {
    println!("=== Tokens ===");
    for (id, token) in tokens.iter() {
        let depth = tokens.ancestors(id).count();
        println!(
            "{:>4}  {}{}  {} {}",
            id.0,
            "  ".repeat(depth),
            token.kind,
            token.style.color,
            token.style.display
        );
    }
}

fn print_layout(result: &LayoutResult, viewport: &Viewport) {
    println!(
        "=== Layout (viewport: {}x{}, scroll: {},{}) ===",
        viewport.width, viewport.height, viewport.scroll.x, viewport.scroll.y
    );
    for layout_box in &result.boxes {
        let rect = layout_box.rect;
        let marker = match layout_box.kind {
            BoxKind::Text => "",
            BoxKind::Marker => " (marker)",
        };
        println!(
            "[{:>7.1}, {:>7.1}] {:>6.1}x{:<5.1} {:<8} {} {} {} {} {}  {:?}{marker}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            layout_box.face,
            layout_box.color,
            layout_box.weight,
            layout_box.style,
            layout_box.decoration,
            layout_box.font_size,
            layout_box.text
        );
    }
    println!();
    if let Some(title) = &result.title {
        println!("title: {}", title.bold());
    }
    println!(
        "content: {:.1}x{:.1} ({} measured, {} cached)",
        result.content_width, result.content_height, result.measured, result.reused
    );
}
