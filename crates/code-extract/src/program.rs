use std::fmt;

/// Structured view of source code: leading non-function statements (imports,
/// globals) followed by an ordered sequence of function definitions.
///
/// The representation is deliberately text-oriented. Each element round-trips
/// to the exact source slice it was parsed from, so rendering a program drops
/// everything the parser did not recognize as part of its structure (trailing
/// comments, example-usage sections).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    preface: String,
    functions: Vec<FunctionDef>,
}

impl Program {
    /// Create a program from a preface and ordered function definitions
    #[must_use]
    pub const fn new(preface: String, functions: Vec<FunctionDef>) -> Self {
        Self { preface, functions }
    }

    /// Leading non-function code, empty when the program has no functions
    #[must_use]
    pub fn preface(&self) -> &str {
        &self.preface
    }

    /// Function definitions in original order
    #[must_use]
    pub fn functions(&self) -> &[FunctionDef] {
        &self.functions
    }

    /// Serialize the full program: preface followed by all functions.
    #[must_use]
    pub fn render(&self) -> String {
        let functions = self.render_functions();
        if self.preface.is_empty() {
            return functions;
        }
        if functions.is_empty() {
            return self.preface.clone();
        }
        format!("{}\n{}", self.preface, functions)
    }

    /// Serialize only the function definitions, joined by a single newline.
    #[must_use]
    pub fn render_functions(&self) -> String {
        self.functions
            .iter()
            .map(FunctionDef::source)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A single function definition, kept as its verbatim source slice.
///
/// For decorated functions the slice includes the decorators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    name: String,
    source: String,
}

impl FunctionDef {
    /// Create a function definition
    #[must_use]
    pub const fn new(name: String, source: String) -> Self {
        Self { name, source }
    }

    /// Function name as declared in the source
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Verbatim source text of the definition
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Outcome of a syntax check.
///
/// Parse failures are captured here instead of escaping as errors; callers
/// that only need a boolean can use [`Validity::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The input parses as a complete module.
    Valid,
    /// The input does not parse; `line` is 1-based and best-effort.
    Invalid { line: usize, reason: String },
}

impl Validity {
    /// Collapse the outcome to a boolean
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Text-to-program converter for one concrete language.
///
/// The extraction logic only depends on this capability, so the grammar can be
/// swapped without touching it. Implementations must never panic on arbitrary
/// input; parse failures are reported through `None` / [`Validity::Invalid`].
pub trait ProgramParser {
    /// Language tag used on markdown fences, e.g. `"python"` for ```` ```python ````.
    fn fence_tag(&self) -> &'static str;

    /// Parse source text into a structured program.
    ///
    /// Returns `None` when the text is not a syntactically valid module.
    fn to_program(&mut self, code: &str) -> Option<Program>;

    /// Check whether source text parses as a complete module.
    fn check_syntax(&mut self, code: &str) -> Validity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Program {
        Program::new(
            "import os".to_string(),
            vec![
                FunctionDef::new("f".to_string(), "def f():\n    pass".to_string()),
                FunctionDef::new("g".to_string(), "def g():\n    pass".to_string()),
            ],
        )
    }

    #[test]
    fn test_render_includes_preface() {
        let rendered = sample().render();
        assert_eq!(rendered, "import os\ndef f():\n    pass\ndef g():\n    pass");
    }

    #[test]
    fn test_render_functions_skips_preface() {
        let rendered = sample().render_functions();
        assert_eq!(rendered, "def f():\n    pass\ndef g():\n    pass");
    }

    #[test]
    fn test_render_empty_program() {
        let program = Program::new(String::new(), Vec::new());
        assert_eq!(program.render(), "");
        assert_eq!(program.render_functions(), "");
    }

    #[test]
    fn test_render_preface_only() {
        let program = Program::new("import os".to_string(), Vec::new());
        assert_eq!(program.render(), "import os");
    }

    #[test]
    fn test_display_matches_render() {
        let program = sample();
        assert_eq!(program.to_string(), program.render());
    }

    #[test]
    fn test_validity_is_valid() {
        assert!(Validity::Valid.is_valid());
        assert!(!Validity::Invalid {
            line: 1,
            reason: "invalid syntax".to_string()
        }
        .is_valid());
    }
}
