use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::SuggestError;
use crate::source::PageSource;
use crate::transport::fs::{read_pages, text_files_under};
use crate::types::PageText;

/// Page source reading `<id>.txt` dumps (pages separated by form feeds) from a
/// directory tree.
///
/// A document id resolves to the first text file, in path order, whose name
/// without `.txt` equals the id, or equals the id without its own extension.
/// So `Wiskunde_Bijlage_1.pdf` is served by either `Wiskunde_Bijlage_1.pdf.txt`
/// or `Wiskunde_Bijlage_1.txt`.
#[derive(Clone, Debug)]
pub struct TextDirectoryPages {
    root: PathBuf,
    files: HashMap<String, PathBuf>,
}

impl TextDirectoryPages {
    /// Index every text file under `root` without following symlinks.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SuggestError> {
        Self::open_with(root, false)
    }

    /// Index every text file under `root`, optionally following symlinks.
    pub fn open_with(root: impl Into<PathBuf>, follow_links: bool) -> Result<Self, SuggestError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SuggestError::Configuration(format!(
                "document directory '{}' does not exist",
                root.display()
            )));
        }
        let mut files: HashMap<String, PathBuf> = HashMap::new();
        for path in text_files_under(&root, follow_links) {
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if let Some(existing) = files.get(key) {
                warn!(
                    document = key,
                    kept = %existing.display(),
                    ignored = %path.display(),
                    "duplicate document dump"
                );
                continue;
            }
            files.insert(key.to_string(), path);
        }
        debug!(root = %root.display(), documents = files.len(), "document directory indexed");
        Ok(Self { root, files })
    }

    /// Root directory this source was opened on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of indexed document dumps.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when no document dump was found.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn resolve(&self, document: &str) -> Option<&PathBuf> {
        self.files.get(document).or_else(|| {
            Path::new(document)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| self.files.get(stem))
        })
    }
}

impl PageSource for TextDirectoryPages {
    fn pages(&self, document: &str) -> Result<Vec<PageText>, SuggestError> {
        let path = self
            .resolve(document)
            .ok_or_else(|| SuggestError::DocumentUnavailable {
                document: document.to_string(),
                reason: format!("no text dump under {}", self.root.display()),
            })?;
        read_pages(path).map_err(|err| SuggestError::DocumentUnavailable {
            document: document.to_string(),
            reason: err.to_string(),
        })
    }
}
