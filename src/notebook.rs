use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a notebook file. Validation findings are not
/// errors (see [`crate::structure::StructureError`]); these cover I/O and
/// malformed input only.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid notebook JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("not a notebook file (expected .ipynb): {0}")]
    Extension(String),
    #[error("notebook has no cells")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
}

/// One unit of a notebook document. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Cell {
    pub source: String,
    pub kind: CellKind,
}

impl Cell {
    pub fn code(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: CellKind::Code,
        }
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: CellKind::Markdown,
        }
    }
}

/// The full ordered sequence of cells under review, materialized before any
/// validation runs. Loaders guarantee at least one cell.
#[derive(Debug, Clone)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

// nbformat v4 wire shapes. `source` may be a single string or an array of
// line strings (with embedded newlines); everything else is ignored.
#[derive(Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: SourceText,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Text(String::new())
    }
}

impl SourceText {
    fn join(self) -> String {
        match self {
            SourceText::Text(text) => text,
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

impl From<RawCell> for Cell {
    fn from(raw: RawCell) -> Self {
        let kind = if raw.cell_type == "code" {
            CellKind::Code
        } else {
            CellKind::Markdown
        };
        Cell {
            source: raw.source.join(),
            kind,
        }
    }
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Load a notebook from disk. Rejects paths without an `.ipynb`
    /// extension before touching the filesystem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("ipynb") {
            return Err(NotebookError::Extension(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|source| NotebookError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let notebook = content.parse::<Notebook>()?;
        debug!(cells = notebook.cells.len(), "loaded notebook {}", path.display());
        Ok(notebook)
    }
}

impl FromStr for Notebook {
    type Err = NotebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawNotebook = serde_json::from_str(s)?;
        let cells: Vec<Cell> = raw.cells.into_iter().map(Cell::from).collect();
        if cells.is_empty() {
            return Err(NotebookError::Empty);
        }
        Ok(Notebook::new(cells))
    }
}
