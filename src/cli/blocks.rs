use std::path::Path;

use anyhow::{bail, Result};

use crate::block::Block;
use crate::notebook::Notebook;

/// Print the classified type of every cell. Diagnostic aid for the
/// classifier heuristics.
pub fn run(path: &str) -> Result<()> {
    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }

    let notebook = Notebook::from_path(file)?;
    for (index, cell) in notebook.cells.iter().enumerate() {
        let block = Block::classify(cell);
        println!("cell {:>3}  {}", index, block.block_type);
    }

    Ok(())
}
