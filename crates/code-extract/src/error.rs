use thiserror::Error;

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while setting up a program parser.
///
/// Note that the extraction and validity operations themselves never return
/// errors; they degrade to the best available text or to `Invalid`.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Tree-sitter error
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),
}

impl ExtractError {
    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }
}
