use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use composite_bounds::{LayerDocument, Rect};

#[derive(Parser, Debug)]
#[command(name = "bounds", version)]
struct Cli {
    /// Log layer and timeline activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every child of a layer document and print the rectangles as JSON.
    Resolve(ResolveArgs),
    /// Validate a layer document.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input layer document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Parent rectangle as `left,top,right,bottom` (defaults to the document bounds).
    #[arg(long, allow_hyphen_values = true)]
    parent: Option<Rect>,

    /// Apply the document timeline at this time before resolving.
    #[arg(long)]
    at_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input layer document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct ResolvedChild<'a> {
    name: &'a str,
    bounds: Rect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn load(path: &Path) -> anyhow::Result<LayerDocument> {
    let doc = LayerDocument::from_path(path)?;
    doc.validate()
        .with_context(|| format!("validate '{}'", path.display()))?;
    Ok(doc)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let mut layer = doc.build_layer(args.parent.unwrap_or(doc.bounds));
    if let Some(at_ms) = args.at_ms {
        doc.timeline
            .apply(&mut layer, at_ms)
            .with_context(|| format!("apply timeline at {at_ms}ms"))?;
    }

    let out = layer
        .iter()
        .map(|c| ResolvedChild {
            name: c.content(),
            bounds: c.bounds(),
        })
        .collect::<Vec<_>>();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    println!(
        "ok: {} children, {} tracks, {}ms",
        doc.children.len(),
        doc.timeline.tracks.len(),
        doc.timeline.duration_ms()
    );
    Ok(())
}
