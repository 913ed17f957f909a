use crate::error::Result;
use crate::fence;
use crate::program::{ProgramParser, Validity};
use crate::python::PythonParser;
use log::debug;

/// Options controlling code extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Keep leading non-function code (imports, globals) in the output.
    pub include_preface: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_preface: true,
        }
    }
}

/// Best-effort cleaner for source code embedded in free-form text, such as a
/// language-model completion.
///
/// Extraction strips the surrounding prose via fence detection, re-parses the
/// candidate into a structured program, and renders only what the parser
/// recognized. Every failure path degrades to the best available text; neither
/// extraction nor the validity check ever returns an error.
pub struct Extractor<P> {
    parser: P,
}

impl Extractor<PythonParser> {
    /// Create an extractor for Python source
    pub fn python() -> Result<Self> {
        Ok(Self::new(PythonParser::new()?))
    }
}

impl<P: ProgramParser> Extractor<P> {
    /// Create an extractor over any program parser
    pub const fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Check whether `code` parses as a syntactically valid module.
    pub fn is_valid(&mut self, code: &str) -> bool {
        self.parser.check_syntax(code).is_valid()
    }

    /// Check syntax, reporting the first offending line on failure.
    pub fn check_syntax(&mut self, code: &str) -> Validity {
        self.parser.check_syntax(code)
    }

    /// Extract clean code from `text`, keeping the preface.
    pub fn extract(&mut self, text: &str) -> String {
        self.extract_with(text, ExtractOptions::default())
    }

    /// Extract clean code from `text`.
    ///
    /// Fence detection picks the candidate code, the structural parse drops
    /// trailing commentary and example-usage sections, and the result is
    /// re-rendered with or without the preface. If the candidate does not
    /// parse, it is returned verbatim.
    pub fn extract_with(&mut self, text: &str, options: ExtractOptions) -> String {
        let code = fence::candidate_code(text, self.parser.fence_tag());

        let Some(program) = self.parser.to_program(code) else {
            debug!("structural parse failed; returning candidate code verbatim");
            return code.to_string();
        };

        if options.include_preface {
            program.render()
        } else {
            program.render_functions()
        }
    }
}
