//! smart-heading: render generic heading markers at the level their position implies.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use smart_heading::render::{self, Output};
use smart_heading::{config, input, LogSink, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart-heading")]
#[command(about = "Heading levels inferred from document structure", long_about = None)]
struct Args {
    /// Files or directories to render
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Default lowest degree for markers without `min`
    #[arg(long)]
    min: Option<u8>,

    /// Default highest degree for markers without `max`
    #[arg(long)]
    max: Option<u8>,

    /// Tag name of the generic heading marker
    #[arg(long, value_name = "TAG")]
    marker: Option<String>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Output serialisation
    #[arg(long, short = 'o', value_enum, default_value_t = Output::Html)]
    output: Output,

    /// Log resolution details
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(min) = args.min {
        cfg.min = min;
    }
    if let Some(max) = args.max {
        cfg.max = max;
    }
    if let Some(marker) = args.marker {
        cfg.marker_tag = marker;
    }
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let format = cfg.json_format()?;
    let paths = input::find_documents(args.paths, &cfg.file_extensions)?;

    if paths.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut sink = LogSink;
    let mut rendered = Vec::with_capacity(paths.len());

    for path in paths {
        let mut document = input::load_document(&path, &format)?;
        let changed = document.mount_headings(&mut sink);
        log::info!(
            "{}: {} headings, {changed} re-rendered",
            path.display(),
            document.headings().len()
        );
        rendered.push((path, document));
    }

    println!("{}", render::render_documents(&rendered, args.output)?);

    Ok(())
}
