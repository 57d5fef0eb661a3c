use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::constants::fragments::{PAGE_SEPARATOR, TEXT_EXTENSION};
use crate::errors::SuggestError;
use crate::types::PageText;

/// True if the path has a `.txt` extension (case-insensitive).
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
        .unwrap_or(false)
}

/// All text files under `root`, sorted by path.
pub fn text_files_under(root: &Path, follow_links: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_text_file(path))
        .collect();
    files.sort();
    files
}

/// Read a plain-text document dump and split it into pages on form feeds.
pub fn read_pages(path: &Path) -> Result<Vec<PageText>, SuggestError> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.split(PAGE_SEPARATOR).map(str::to_string).collect())
}

/// Write `value` as pretty JSON (two-space indent, UTF-8 kept unescaped).
///
/// The payload goes to a temporary file next to `path` first and is then
/// renamed over it, so readers never observe a half-written file.
pub fn write_json_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), SuggestError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(value)?;
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
