//! In-memory layout registry.
//!
//! Suitable for CLI use and for services that decode several record kinds.
//! Thread-safe via `Arc<RwLock<Inner>>`; layouts are handed out as
//! `Arc<LineSpec>` so decoded records can hold on to them.

use indexmap::IndexMap;
use recordcodec_core::{LayoutError, LineSpec};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use crate::format::LayoutParser;

/// File extensions picked up by [`LayoutRegistry::load_directory`].
pub const LAYOUT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

#[derive(Default)]
struct Inner {
    /// Display name → layout, in registration order.
    by_name: IndexMap<String, Arc<LineSpec>>,
}

/// Thread-safe in-memory layout registry.
#[derive(Clone, Default)]
pub struct LayoutRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layout under its display name. Names must be unique.
    pub fn add(&self, line: LineSpec) -> Result<Arc<LineSpec>, LayoutError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let name = line.display_name().to_string();
        if inner.by_name.contains_key(&name) {
            return Err(LayoutError::AlreadyExists { name });
        }
        let line = Arc::new(line);
        inner.by_name.insert(name, Arc::clone(&line));
        Ok(line)
    }

    pub fn get(&self, name: &str) -> Option<Arc<LineSpec>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .get(name)
            .cloned()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load a single layout file.
    ///
    /// Every document in the file is registered. Returns the count loaded.
    pub fn load_file(&self, path: &Path) -> Result<usize, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        let layouts = LayoutParser::parse_all(&content)?;
        if layouts.is_empty() {
            return Err(LayoutError::Parse(format!(
                "{}: empty layout file",
                path.display()
            )));
        }
        let count = layouts.len();
        for line in layouts {
            self.add(line)?;
        }
        tracing::debug!(path = %path.display(), count, "loaded layout file");
        Ok(count)
    }

    /// Load every layout file under `dir` recursively, in path order.
    /// Returns the total number of layouts loaded.
    pub fn load_directory(&self, dir: &Path) -> Result<usize, LayoutError> {
        let mut files = collect_layout_files(dir)?;
        files.sort();
        let mut count = 0;
        for path in &files {
            count += self.load_file(path)?;
        }
        tracing::info!(dir = %dir.display(), files = files.len(), layouts = count, "layout directory loaded");
        Ok(count)
    }
}

fn has_layout_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| LAYOUT_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Collect all layout files under `dir` recursively.
fn collect_layout_files(dir: &Path) -> Result<Vec<PathBuf>, LayoutError> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Err(LayoutError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        )));
    }
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(collect_layout_files(&path)?);
        } else if has_layout_extension(&path) {
            files.push(path);
        }
    }
    Ok(files)
}
