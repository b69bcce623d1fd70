//! nbreview - Review exported notebook files against the task template
//!
//! Loads an `.ipynb` notebook, classifies each cell into a semantic block
//! type, and checks the first (prompt) cell against a fixed section layout:
//! header, keywords, difficulty, worked examples, starter code. A separate
//! pass flags function names that are not snake_case. All findings are
//! accumulated and reported; nothing aborts on a single violation.

pub mod block;
pub mod cli;
pub mod config;
pub mod naming;
pub mod notebook;
pub mod report;
pub mod structure;
