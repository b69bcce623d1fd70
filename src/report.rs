use serde::Serialize;
use tracing::debug;

use crate::naming;
use crate::notebook::Notebook;
use crate::structure::{self, StructureError};

/// Aggregated result of one review run: one error list per pass, in the
/// order the passes ran.
#[derive(Debug, Serialize)]
pub struct ReviewReport {
    pub structure_errors: Vec<StructureError>,
    pub naming_errors: Vec<StructureError>,
}

impl ReviewReport {
    pub fn error_count(&self) -> usize {
        self.structure_errors.len() + self.naming_errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Run the review passes over a notebook. Passes are independent: each one
/// scans the materialized cells on its own and nothing is shared between
/// them.
pub fn review(notebook: &Notebook, check_naming: bool) -> ReviewReport {
    let structure_errors = structure::check_prompt_block(notebook);
    let naming_errors = if check_naming {
        naming::check_snake_case_functions(notebook)
    } else {
        Vec::new()
    };
    debug!(
        structure = structure_errors.len(),
        naming = naming_errors.len(),
        "review complete"
    );
    ReviewReport {
        structure_errors,
        naming_errors,
    }
}

/// Print a report in a human-readable format.
pub fn print_report(report: &ReviewReport) {
    if report.is_clean() {
        println!("✅ No review issues found!");
        return;
    }

    println!("\n📋 Notebook Review Results:\n");

    if !report.structure_errors.is_empty() {
        println!("❌ Structure ({}):", report.structure_errors.len());
        for error in &report.structure_errors {
            println!("   • line {}: {}", error.line_number, first_line(&error.message));
        }
        println!();
    }

    if !report.naming_errors.is_empty() {
        println!("❌ Naming ({}):", report.naming_errors.len());
        for error in &report.naming_errors {
            println!("   • line {}: {}", error.line_number, first_line(&error.message));
        }
        println!();
    }

    println!(
        "Summary: {} structure, {} naming",
        report.structure_errors.len(),
        report.naming_errors.len()
    );
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}
