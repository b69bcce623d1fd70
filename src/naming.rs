use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::block::Block;
use crate::notebook::Notebook;
use crate::structure::{ErrorKind, StructureError};

static SNAKE_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+(_([a-z]+|[0-9]+))*$").expect("valid snake_case pattern"));

pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Flag every `def ` line whose function name is not snake_case. Unlike the
/// prompt-template check this pass walks all cells of the notebook.
pub fn check_snake_case_functions(notebook: &Notebook) -> Vec<StructureError> {
    let mut errors = Vec::new();
    for cell in &notebook.cells {
        let block = Block::classify(cell);
        for (index, line) in block.content.split('\n').enumerate() {
            let Some((_, rest)) = line.split_once("def ") else {
                continue;
            };
            let name = rest.split('(').next().unwrap_or(rest);
            if !is_snake_case(name) {
                errors.push(StructureError::new(
                    ErrorKind::NamingViolation,
                    block.block_type,
                    index,
                    line,
                    "Function names should be in snake_case",
                ));
            }
        }
    }
    debug!(errors = errors.len(), "snake_case scan finished");
    errors
}
