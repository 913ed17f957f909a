//! End-to-end cleanup scenarios over the public API.

use latent_code_extract::{
    ExtractOptions, Extractor, FunctionDef, Program, ProgramParser, PythonParser, Validity,
};
use pretty_assertions::assert_eq;

fn python() -> Extractor<PythonParser> {
    Extractor::python().expect("python grammar should load")
}

#[test]
fn cleans_a_chatty_completion() {
    let completion = "\
Sure! Here is an improved priority function:

```python
import math

def priority(item, weights):
    \"\"\"Score one item.\"\"\"
    return sum(w * x for w, x in zip(weights, item))
```

Example usage:

```python
print(priority([1, 2], [0.5, 0.5]))
```
";

    let mut extractor = python();
    let cleaned = extractor.extract(completion);

    assert!(cleaned.starts_with("import math"));
    assert!(cleaned.contains("def priority(item, weights):"));
    // Only the first fenced block is considered.
    assert!(!cleaned.contains("print(priority"));
    assert!(!cleaned.contains("Example usage"));

    // The cleaned text is itself a valid module and extraction is idempotent.
    assert!(extractor.is_valid(&cleaned));
    assert_eq!(extractor.extract(&cleaned), cleaned);
}

#[test]
fn functions_only_output_drops_globals() {
    let completion = "```python\nimport os\nLIMIT = 10\n\ndef walk():\n    return os.walk('.')\n```";

    let mut extractor = python();
    let functions = extractor.extract_with(
        completion,
        ExtractOptions {
            include_preface: false,
        },
    );

    assert_eq!(functions, "def walk():\n    return os.walk('.')");

    let full = extractor.extract(completion);
    assert!(full.starts_with("import os"));
    assert!(full.contains("LIMIT = 10"));
}

#[test]
fn unparseable_candidate_is_returned_unchanged() {
    let completion = "```python\ndef broken(:\n    pass\n```";

    let mut extractor = python();
    assert_eq!(extractor.extract(completion), "def broken(:\n    pass");
}

#[test]
fn validity_check_never_panics() {
    let mut extractor = python();

    assert!(extractor.is_valid(""));
    assert!(!extractor.is_valid("def h(:"));
    assert!(!extractor.is_valid("(((((("));

    let binary_garbage: String = (0u8..=127).map(|b| b as char).collect();
    let _ = extractor.is_valid(&binary_garbage);

    let huge = "def f():\n    pass\n".repeat(10_000);
    assert!(extractor.is_valid(&huge));
}

#[test]
fn invalid_outcome_carries_a_reason() {
    let mut extractor = python();
    match extractor.check_syntax("def h(:") {
        Validity::Invalid { line, reason } => {
            assert_eq!(line, 1);
            assert!(!reason.is_empty());
        }
        Validity::Valid => panic!("expected invalid syntax"),
    }
}

/// A trivial parser proving the extraction logic is grammar-agnostic: it
/// treats every line starting with `fn ` as a one-line function.
struct LineParser;

impl ProgramParser for LineParser {
    fn fence_tag(&self) -> &'static str {
        "pseudo"
    }

    fn to_program(&mut self, code: &str) -> Option<Program> {
        let functions: Vec<FunctionDef> = code
            .lines()
            .filter(|line| line.starts_with("fn "))
            .map(|line| FunctionDef::new(line[3..].to_string(), line.to_string()))
            .collect();
        if functions.is_empty() {
            return None;
        }
        Some(Program::new(String::new(), functions))
    }

    fn check_syntax(&mut self, code: &str) -> Validity {
        if code.lines().all(|line| line.is_empty() || line.starts_with("fn ")) {
            Validity::Valid
        } else {
            Validity::Invalid {
                line: 1,
                reason: "expected fn lines".to_string(),
            }
        }
    }
}

#[test]
fn extractor_works_with_a_custom_parser() {
    let mut extractor = Extractor::new(LineParser);

    let text = "notes\n```pseudo\nfn one\nfn two\n```\nmore notes";
    assert_eq!(extractor.extract(text), "fn one\nfn two");

    // Parse failure still degrades to the candidate text.
    assert_eq!(extractor.extract("```pseudo\nnothing here\n```"), "nothing here");
}
