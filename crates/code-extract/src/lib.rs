//! # Latent Code Extract
//!
//! Best-effort cleanup of code embedded in free-form text, built for
//! post-processing language-model completions.
//!
//! ## Pipeline
//!
//! ```text
//! Raw completion text
//!     │
//!     ├──> Fence detection (first ```python ... ``` pair, or raw text)
//!     │
//!     ├──> Structural parse (tree-sitter) → Program { preface, functions }
//!     │        │
//!     │        └─ parse failure → candidate code returned verbatim
//!     │
//!     └──> Render: preface + functions, or functions only
//! ```
//!
//! ## Example
//!
//! ```rust
//! use latent_code_extract::Extractor;
//!
//! let mut extractor = Extractor::python().unwrap();
//!
//! let completion = "Here is the function:\n```python\ndef f(x):\n    return x + 1\n```\nExample usage:\nprint(f(1))";
//! let cleaned = extractor.extract(completion);
//!
//! assert!(cleaned.contains("def f(x):"));
//! assert!(!cleaned.contains("Example usage"));
//! ```

mod error;
mod extract;
mod fence;
mod program;
mod python;

pub use error::{ExtractError, Result};
pub use extract::{ExtractOptions, Extractor};
pub use fence::candidate_code;
pub use program::{FunctionDef, Program, ProgramParser, Validity};
pub use python::PythonParser;
