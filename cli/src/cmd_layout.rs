//! `recordcodec layout` — validate and inspect layout descriptions.

use anyhow::{bail, Context, Result};
use recordcodec_layout::{LayoutParser, LAYOUT_EXTENSIONS};
use std::path::Path;

pub fn validate(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("'{}' is not a directory", dir.display());
    }

    let mut ok = 0;
    let mut errors = 0;

    for entry in walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_layout_file(e.path()))
    {
        let path = entry.path();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading '{}'", path.display()))?;
        match LayoutParser::parse_all(&content) {
            Ok(layouts) if layouts.is_empty() => {
                errors += 1;
                eprintln!("  ✗ {}: no layouts defined", path.display());
            }
            Ok(layouts) => {
                ok += layouts.len();
                println!("  ✓ {} ({} layouts)", path.display(), layouts.len());
            }
            Err(e) => {
                errors += 1;
                eprintln!("  ✗ {}: {}", path.display(), e);
            }
        }
    }

    println!("\n{} layouts valid, {} files with errors", ok, errors);
    if errors > 0 {
        bail!("{} layout files failed validation", errors);
    }
    Ok(())
}

pub fn show(file: &Path, as_yaml: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading '{}'", file.display()))?;
    let layouts = LayoutParser::parse_all(&content)
        .with_context(|| format!("parsing '{}'", file.display()))?;

    if as_yaml {
        print!("{}", LayoutParser::to_yaml_all(&layouts)?);
        return Ok(());
    }

    for line in &layouts {
        println!("✓ Layout '{}' parsed successfully", line.display_name());
        println!("  Line size: {} bytes", line.line_size());
        println!("  Fields:    {}", line.field_count());
        for field in line.fields() {
            let decimals = if field.scale() > 0 {
                format!(", {} decimals", field.scale())
            } else {
                String::new()
            };
            println!(
                "    - {:<24} {:<18} @{:>5} +{:<4}{}",
                field.name(),
                field.field_type().layout_name(),
                field.start(),
                field.size(),
                decimals
            );
        }
    }
    Ok(())
}

fn is_layout_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| LAYOUT_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}
