use std::fmt;

use serde::Serialize;

use crate::notebook::{Cell, CellKind};

/// Semantic type of a cell, derived once from its content and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockType {
    Prompt,
    Solution,
    PythonHeader,
    PythonCode,
    PythonTest,
    SwiftHeader,
    SwiftCode,
    SwiftTest,
    Unknown,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Prompt => write!(f, "Prompt"),
            BlockType::Solution => write!(f, "Solution"),
            BlockType::PythonHeader => write!(f, "Python header"),
            BlockType::PythonCode => write!(f, "Python code"),
            BlockType::PythonTest => write!(f, "Python test"),
            BlockType::SwiftHeader => write!(f, "Swift header"),
            BlockType::SwiftCode => write!(f, "Swift code"),
            BlockType::SwiftTest => write!(f, "Swift test"),
            BlockType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A classified view over one cell, used only during validation.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub content: &'a str,
    pub block_type: BlockType,
}

impl<'a> Block<'a> {
    pub fn classify(cell: &'a Cell) -> Self {
        Self {
            content: &cell.source,
            block_type: block_type_of(&cell.source, cell.kind),
        }
    }
}

/// First match wins; header prefixes outrank the code heuristics.
fn block_type_of(content: &str, kind: CellKind) -> BlockType {
    if content.starts_with("# Prompt") {
        BlockType::Prompt
    } else if content.starts_with("# Solution") {
        BlockType::Solution
    } else if content.starts_with("# Python Answer") {
        BlockType::PythonHeader
    } else if is_python_code(content, kind) {
        if content.contains("import unittest") || content.contains("assert ") {
            BlockType::PythonTest
        } else {
            BlockType::PythonCode
        }
    } else if content.starts_with("# Swift Answer") {
        BlockType::SwiftHeader
    } else if is_swift_code(content, kind) {
        if content.contains("import XCTest") || content.contains("assert(") {
            BlockType::SwiftTest
        } else {
            BlockType::SwiftCode
        }
    } else {
        BlockType::Unknown
    }
}

/// Syntactic heuristic, not a parser: checks punctuation shape of `def ` and
/// `class ` lines, not naming or nesting. Naming is a separate pass.
fn is_python_code(content: &str, kind: CellKind) -> bool {
    if kind != CellKind::Code {
        return false;
    }
    if content.contains("def ") {
        content
            .split('\n')
            .filter(|line| line.contains("def "))
            .all(|line| line.contains('(') && line.contains(')') && line.contains(':'))
    } else if content.contains("class ") {
        content
            .split('\n')
            .filter(|line| line.contains("class "))
            .all(|line| line.trim().starts_with("class ") && line.ends_with(':'))
    } else {
        content.contains("assert ")
    }
}

fn is_swift_code(content: &str, kind: CellKind) -> bool {
    if kind != CellKind::Code {
        return false;
    }
    if content.contains("func ") {
        content
            .split('\n')
            .filter(|line| line.contains("func "))
            .all(|line| line.contains('(') && line.contains(')') && line.contains('{'))
    } else if content.contains("class ") {
        // A class line would have to start with both visibility keywords at
        // once, which never holds, so class-only cells are never treated as
        // Swift code. Kept as-is: downstream messages depend on it.
        content
            .split('\n')
            .filter(|line| line.contains("class "))
            .all(|line| {
                line.starts_with("public ") && line.starts_with("private ") && line.ends_with('{')
            })
    } else {
        false
    }
}
