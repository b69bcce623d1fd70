use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::block::{Block, BlockType};
use crate::notebook::Notebook;

/// What kind of deviation a [`StructureError`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    WrongFirstBlockType,
    LiteralMismatch,
    SequentialMismatch,
    MissingExampleStart,
    ExtraBlankLine,
    InsufficientExamples,
    NamingViolation,
}

/// One reported deviation from the task template. Line numbers are 0-based
/// indices into the owning block's lines. Never fatal: errors accumulate
/// into a list and the scan keeps going.
#[derive(Debug, Clone, Serialize)]
pub struct StructureError {
    pub kind: ErrorKind,
    pub line_number: usize,
    pub line_text: String,
    pub message: String,
}

impl StructureError {
    pub(crate) fn new(
        kind: ErrorKind,
        block_type: BlockType,
        line_number: usize,
        line_text: &str,
        detail: impl fmt::Display,
    ) -> Self {
        Self {
            kind,
            line_number,
            line_text: line_text.to_string(),
            message: format!("{detail}.\nBlock: {block_type}\nLine {line_number}: {line_text}"),
        }
    }
}

/// One expected line in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Line must equal the text exactly.
    Literal(&'static str),
    /// Line must start with the text.
    Prefix(&'static str),
    /// Line must be empty. Blank rules never get the prefix exception.
    Blank,
    /// Line is unconstrained.
    Any,
}

impl Rule {
    fn matches(self, line: &str) -> bool {
        match self {
            Rule::Literal(text) => line == text,
            Rule::Prefix(text) => line.starts_with(text),
            Rule::Blank => line.is_empty(),
            Rule::Any => true,
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Rule::Literal(text) | Rule::Prefix(text) => text,
            Rule::Blank | Rule::Any => "",
        }
    }
}

/// Fixed section-marker lines of the template.
mod section {
    pub const PROMPT: &str = "# Prompt:";
    pub const EXAMPLES: &str = "**Example:**-";
    pub const STARTER_CODE: &str = " **Starter Code:** -";
    pub const PYTHON_CODE: &str = "```python";
    pub const SWIFT_CODE: &str = "```swift";
}

/// Main header: lines 0..=9 of a well-formed prompt cell, ending with the
/// examples marker and the blank line after it.
const MAIN_RULES: [Rule; 10] = [
    Rule::Literal(section::PROMPT),
    Rule::Blank,
    Rule::Any,
    Rule::Blank,
    Rule::Prefix("**Keywords:**-"),
    Rule::Blank,
    Rule::Prefix("**Difficulty Level:** -"),
    Rule::Blank,
    Rule::Literal(section::EXAMPLES),
    Rule::Blank,
];

/// One example group, cycled for every example.
const EXAMPLE_RULES: [Rule; 8] = [
    Rule::Prefix("Example "),
    Rule::Blank,
    Rule::Prefix("Input: "),
    Rule::Blank,
    Rule::Prefix("Output: "),
    Rule::Blank,
    Rule::Prefix("Explanation: "),
    Rule::Blank,
];

/// Starter-code tail. The marker itself is consumed by the transition into
/// the section; consuming the final fence ends the whole scan.
const STARTER_RULES: [Rule; 8] = [
    Rule::Prefix(section::STARTER_CODE),
    Rule::Blank,
    Rule::Literal(section::PYTHON_CODE),
    Rule::Any,
    Rule::Literal("```"),
    Rule::Literal(section::SWIFT_CODE),
    Rule::Any,
    Rule::Literal("```"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MainHeader,
    Examples,
    StarterCode,
    Done,
}

/// Scan cursor: the full state folded over the line sequence. Each step is
/// a pure function of the cursor and the current line.
#[derive(Debug, Clone, Copy)]
struct Scan {
    state: State,
    main_rule: usize,
    example_rule: usize,
    starter_rule: usize,
    examples_seen: usize,
}

impl Scan {
    fn start() -> Self {
        Self {
            state: State::MainHeader,
            main_rule: 0,
            example_rule: 0,
            starter_rule: 0,
            examples_seen: 0,
        }
    }

    /// Where an exactly-matched section marker lands the cursor. The marker
    /// line counts as that section's own marker rule.
    fn entered_at(self, marker: &str) -> Option<(Self, bool)> {
        let mut next = self;
        next.example_rule = 0;
        match marker {
            section::PROMPT => {
                next.state = State::MainHeader;
                next.main_rule = 1;
            }
            section::EXAMPLES => {
                next.state = State::MainHeader;
                next.main_rule = 9;
            }
            section::STARTER_CODE => {
                next.state = State::StarterCode;
                next.starter_rule = 1;
            }
            section::PYTHON_CODE => {
                next.state = State::StarterCode;
                next.starter_rule = 3;
            }
            section::SWIFT_CODE => {
                next.state = State::StarterCode;
                next.starter_rule = 6;
            }
            _ => return None,
        }
        let entered_starter = self.state != State::StarterCode && next.state == State::StarterCode;
        Some((next, entered_starter))
    }
}

fn literal_mismatch(
    block_type: BlockType,
    index: usize,
    line: &str,
    rule: Rule,
    place: &str,
) -> StructureError {
    StructureError::new(
        ErrorKind::LiteralMismatch,
        block_type,
        index,
        line,
        format!(
            "Expected '{}' on {place} {index}, but got '{line}'",
            rule.expected()
        ),
    )
}

/// One transition of the state machine: `(scan, line) -> (scan', error?)`.
fn step(scan: Scan, block_type: BlockType, index: usize, line: &str) -> (Scan, Option<StructureError>) {
    match scan.state {
        State::MainHeader => step_main(scan, block_type, index, line),
        State::Examples => step_examples(scan, block_type, index, line),
        State::StarterCode => step_starter(scan, block_type, index, line),
        State::Done => (scan, None),
    }
}

fn step_main(
    mut scan: Scan,
    block_type: BlockType,
    index: usize,
    line: &str,
) -> (Scan, Option<StructureError>) {
    let rule = MAIN_RULES[scan.main_rule];
    let error = if rule.matches(line) {
        None
    } else {
        Some(literal_mismatch(block_type, index, line, rule, "line"))
    };
    scan.main_rule += 1;
    if scan.main_rule == MAIN_RULES.len() {
        scan.state = State::Examples;
        scan.example_rule = 0;
    }
    (scan, error)
}

fn step_examples(
    mut scan: Scan,
    block_type: BlockType,
    index: usize,
    line: &str,
) -> (Scan, Option<StructureError>) {
    if scan.example_rule == 0 {
        // Header position: a new example, a section marker, or a stray line.
        if line.starts_with("Example ") {
            scan.examples_seen += 1;
            let expected = format!("Example {}:", scan.examples_seen);
            let error = (line != expected).then(|| {
                StructureError::new(
                    ErrorKind::SequentialMismatch,
                    block_type,
                    index,
                    line,
                    format!(
                        "Expected '{expected}' on example {}, but got '{line}'",
                        scan.examples_seen
                    ),
                )
            });
            scan.example_rule = 1;
            return (scan, error);
        }
        if let Some((next, entered_starter)) = scan.entered_at(line) {
            let error = (entered_starter && scan.examples_seen < 2).then(|| {
                StructureError::new(
                    ErrorKind::InsufficientExamples,
                    block_type,
                    index,
                    line,
                    "There should be at least two examples",
                )
            });
            return (next, error);
        }
        if scan.examples_seen == 0 {
            let error = StructureError::new(
                ErrorKind::MissingExampleStart,
                block_type,
                index,
                line,
                "The examples should start with 'Example 1:'",
            );
            scan.example_rule = 1;
            return (scan, Some(error));
        }
        if line.is_empty() {
            // Stray blank between examples; the cursor stays put.
            let error = StructureError::new(
                ErrorKind::ExtraBlankLine,
                block_type,
                index,
                line,
                format!(
                    "There is an extra empty line in the examples section after example {}",
                    scan.examples_seen
                ),
            );
            return (scan, Some(error));
        }
        scan.example_rule = 1;
        return (scan, None);
    }

    let rule = EXAMPLE_RULES[scan.example_rule];
    if rule.matches(line) {
        scan.example_rule = (scan.example_rule + 1) % EXAMPLE_RULES.len();
        return (scan, None);
    }
    if let Some((next, entered_starter)) = scan.entered_at(line) {
        let error = (entered_starter && scan.examples_seen < 2).then(|| {
            StructureError::new(
                ErrorKind::InsufficientExamples,
                block_type,
                index,
                line,
                "There should be at least two examples",
            )
        });
        return (next, error);
    }
    let error = literal_mismatch(block_type, index, line, rule, "line/section");
    scan.example_rule = (scan.example_rule + 1) % EXAMPLE_RULES.len();
    (scan, Some(error))
}

fn step_starter(
    mut scan: Scan,
    block_type: BlockType,
    index: usize,
    line: &str,
) -> (Scan, Option<StructureError>) {
    let rule = STARTER_RULES[scan.starter_rule];
    let error = if rule.matches(line) {
        None
    } else {
        Some(literal_mismatch(block_type, index, line, rule, "line"))
    };
    scan.starter_rule += 1;
    if scan.starter_rule == STARTER_RULES.len() {
        // Final fence: the rest of the cell is not checked.
        scan.state = State::Done;
    }
    (scan, error)
}

/// Check cell 0 of the notebook against the prompt template. Returns every
/// deviation found, in line order; an empty list means the cell conforms.
pub fn check_prompt_block(notebook: &Notebook) -> Vec<StructureError> {
    let Some(cell) = notebook.cells.first() else {
        return Vec::new();
    };
    let block = Block::classify(cell);
    if block.block_type != BlockType::Prompt {
        return vec![StructureError::new(
            ErrorKind::WrongFirstBlockType,
            block.block_type,
            0,
            block.content,
            "The first block should be the prompt",
        )];
    }

    let mut errors = Vec::new();
    let mut scan = Scan::start();
    for (index, line) in block.content.split('\n').enumerate() {
        if scan.state == State::Done {
            break;
        }
        let (next, error) = step(scan, block.block_type, index, line);
        errors.extend(error);
        scan = next;
    }
    debug!(
        errors = errors.len(),
        examples = scan.examples_seen,
        "prompt block scan finished"
    );
    errors
}
