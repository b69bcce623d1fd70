//! Integration tests for the prompt-block structure check.

use nbreview::notebook::{Cell, Notebook};
use nbreview::structure::{check_prompt_block, ErrorKind};

const VALID_PROMPT: &str = "# Prompt:\n\nGiven a list of numbers, return it reversed.\n\n**Keywords:**- [x] Arrays\n\n**Difficulty Level:** - Easy\n\n**Example:**-\n\nExample 1:\n\nInput: [1, 2]\n\nOutput: [2, 1]\n\nExplanation: the list is reversed\n\nExample 2:\n\nInput: []\n\nOutput: []\n\nExplanation: empty stays empty\n\n **Starter Code:** -\n\n```python\ndef reverse_list(numbers):\n```\n```swift\nfunc reverseList(_ numbers: [Int]) -> [Int] {\n```";

fn check(content: &str) -> Vec<nbreview::structure::StructureError> {
    check_prompt_block(&Notebook::new(vec![Cell::markdown(content)]))
}

#[test]
fn test_valid_document_is_clean() {
    let errors = check(VALID_PROMPT);
    assert!(errors.is_empty(), "unexpected errors: {errors:#?}");
}

#[test]
fn test_non_prompt_first_cell_yields_exactly_one_error() {
    // Whatever follows cell 0 is irrelevant once the short-circuit fires.
    for content in ["# Solution", "plain prose", "## Prompt:", ""] {
        let notebook = Notebook::new(vec![
            Cell::markdown(content),
            Cell::markdown(VALID_PROMPT),
            Cell::code("def Bad(x):"),
        ]);
        let errors = check_prompt_block(&notebook);
        assert_eq!(errors.len(), 1, "content {content:?}");
        assert_eq!(errors[0].kind, ErrorKind::WrongFirstBlockType);
        assert!(errors[0]
            .message
            .contains("The first block should be the prompt"));
    }
}

#[test]
fn test_prompt_prefix_without_colon_is_still_prompt() {
    // Classification needs only the "# Prompt" prefix; the template check
    // then flags the header line itself.
    let errors = check("# Prompt\n\ntext");
    assert!(!errors
        .iter()
        .any(|e| e.kind == ErrorKind::WrongFirstBlockType));
    assert!(errors
        .iter()
        .any(|e| e.kind == ErrorKind::LiteralMismatch && e.line_number == 0));
}

#[test]
fn test_single_example_reports_insufficient_examples() {
    let content = VALID_PROMPT.replace(
        "Example 2:\n\nInput: []\n\nOutput: []\n\nExplanation: empty stays empty\n\n",
        "",
    );
    let errors = check(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::InsufficientExamples);
    assert!(errors[0].message.contains("at least two examples"));
}

#[test]
fn test_example_numbering_must_be_sequential() {
    let content = VALID_PROMPT.replacen("Example 1:", "Example 2:", 1);
    let errors = check(&content);
    let mismatch = errors
        .iter()
        .find(|e| e.kind == ErrorKind::SequentialMismatch)
        .expect("sequential mismatch expected");
    assert!(mismatch.message.contains("Expected 'Example 1:'"));
    assert_eq!(mismatch.line_number, 10);
    assert_eq!(mismatch.line_text, "Example 2:");
}

#[test]
fn test_third_example_out_of_order() {
    let content = VALID_PROMPT.replacen("Example 2:", "Example 5:", 1);
    let errors = check(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::SequentialMismatch);
    assert!(errors[0].message.contains("Expected 'Example 2:'"));
}

#[test]
fn test_keywords_line_mismatch_is_reported_at_its_index() {
    let content = VALID_PROMPT.replace("**Keywords:**- [x] Arrays", "Keywords: Arrays");
    let errors = check(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::LiteralMismatch);
    assert_eq!(errors[0].line_number, 4);
    assert_eq!(errors[0].line_text, "Keywords: Arrays");
    assert!(errors[0].message.contains("Expected '**Keywords:**-'"));
}

#[test]
fn test_keywords_prefix_match_accepts_longer_line() {
    let content = VALID_PROMPT.replace("**Keywords:**- [x] Arrays", "**Keywords:**- [x] Two Pointers");
    assert!(check(&content).is_empty());
}

#[test]
fn test_missing_examples_marker() {
    let content = VALID_PROMPT.replace("**Example:**-", "Examples:");
    let errors = check(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::LiteralMismatch);
    assert_eq!(errors[0].line_number, 8);
    assert!(errors[0].message.contains("Expected '**Example:**-'"));
}

#[test]
fn test_extra_blank_line_between_examples() {
    let content = VALID_PROMPT.replace("reversed\n\nExample 2:", "reversed\n\n\nExample 2:");
    let errors = check(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::ExtraBlankLine);
    assert!(errors[0].message.contains("extra empty line"));
}

#[test]
fn test_prose_before_first_example() {
    let content = VALID_PROMPT.replacen("Example 1:", "stray line\n\nExample 1:", 1);
    let errors = check(&content);
    assert!(errors
        .iter()
        .any(|e| e.kind == ErrorKind::MissingExampleStart));
}

#[test]
fn test_errors_accumulate_without_aborting() {
    let content = VALID_PROMPT
        .replace("**Keywords:**- [x] Arrays", "kw")
        .replace("**Difficulty Level:** - Easy", "easy")
        .replace("```swift", "``` swift");
    let errors = check(&content);
    assert_eq!(errors.len(), 3);
    assert!(errors.windows(2).all(|w| w[0].line_number < w[1].line_number));
}

#[test]
fn test_lines_after_final_fence_are_ignored() {
    let content = format!("{VALID_PROMPT}\ntrailing\n\nnoise");
    assert!(check(&content).is_empty());
}

#[test]
fn test_truncated_prompt_reports_nothing_past_the_end() {
    // The walk covers only the lines that exist.
    let errors = check("# Prompt:\n\ntext");
    assert!(errors.is_empty());
}

#[test]
fn test_messages_carry_block_and_line_context() {
    let content = VALID_PROMPT.replace("**Keywords:**- [x] Arrays", "kw");
    let errors = check(&content);
    assert!(errors[0].message.contains("Block: Prompt"));
    assert!(errors[0].message.contains("Line 4: kw"));
}
