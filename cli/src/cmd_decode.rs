//! `recordcodec decode` — decode a binary dump and render it.
//!
//! Reads the layout and the input file, runs the batch engine, then writes
//! the rendered records to the output file or stdout.

use anyhow::{anyhow, bail, Context, Result};
use recordcodec_batch::BatchEngine;
use recordcodec_core::LineSpec;
use recordcodec_layout::LayoutParser;
use recordcodec_observability::RecordCodecMetrics;
use recordcodec_render::{render, RenderFormat, RenderOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

pub struct DecodeArgs {
    pub layout: PathBuf,
    pub name: Option<String>,
    pub input: PathBuf,
    pub format: String,
    pub header: bool,
    pub quote: bool,
    pub src_hex: bool,
    pub parallel: bool,
    pub chunk_size: usize,
    pub output: Option<PathBuf>,
}

pub fn run(args: &DecodeArgs) -> Result<()> {
    let format: RenderFormat = args.format.parse()?;
    let line = load_layout(&args.layout, args.name.as_deref())?;

    let data = std::fs::read(&args.input)
        .with_context(|| format!("reading input '{}'", args.input.display()))?;

    let engine = BatchEngine::default()
        .parallel(args.parallel)
        .chunk_size(args.chunk_size)
        .metrics(RecordCodecMetrics::global())
        .on_progress(|done: usize, total: usize| {
            tracing::debug!(done, total, "decode progress");
        });

    let start = Instant::now();
    let records = engine
        .decode_all(&data, &line)
        .with_context(|| format!("decoding '{}' with layout '{}'", args.input.display(), line.display_name()))?;
    let elapsed = start.elapsed();

    let soft = records.iter().filter(|r| r.has_soft_failures()).count();
    if soft > 0 {
        eprintln!("warning: {soft} record(s) contain fields that could not be decoded");
    }

    let options = RenderOptions {
        format,
        header: args.header,
        quote: args.quote,
        src_hex: args.src_hex,
    };
    let rendered = render(&records, &line, &options)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing output '{}'", path.display()))?;
            eprintln!(
                "✓ {} records decoded in {:.1}ms → {}",
                records.len(),
                elapsed.as_secs_f64() * 1000.0,
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Load the layout to decode with. A file describing several layouts needs
/// `name` to pick one.
pub fn load_layout(path: &Path, name: Option<&str>) -> Result<Arc<LineSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading layout '{}'", path.display()))?;
    let layouts = LayoutParser::parse_all(&content)
        .with_context(|| format!("parsing layout '{}'", path.display()))?;
    select_layout(layouts, name)
        .with_context(|| format!("selecting layout from '{}'", path.display()))
}

fn select_layout(layouts: Vec<LineSpec>, name: Option<&str>) -> Result<Arc<LineSpec>> {
    let available = || {
        layouts
            .iter()
            .map(|l| l.display_name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let chosen = match name {
        Some(name) => layouts
            .iter()
            .position(|l| l.display_name() == name)
            .ok_or_else(|| anyhow!("layout '{}' not found (available: {})", name, available()))?,
        None => match layouts.len() {
            0 => bail!("no layouts defined"),
            1 => 0,
            _ => bail!("several layouts defined, pick one with --name ({})", available()),
        },
    };
    layouts
        .into_iter()
        .nth(chosen)
        .map(Arc::new)
        .ok_or_else(|| anyhow!("no layouts defined"))
}
