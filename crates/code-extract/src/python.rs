use crate::error::{ExtractError, Result};
use crate::program::{FunctionDef, Program, ProgramParser, Validity};
use tree_sitter::{Node, Parser};

/// Python front-end backed by the tree-sitter grammar.
///
/// Only top-level `def` statements (including decorated ones) count as
/// functions; everything before the first of them is the preface. Statements
/// and comments trailing the last function are not part of the program model
/// and disappear on render.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ExtractError::tree_sitter(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Unwrap a top-level node to its function definition, if it is one
    fn as_function(node: Node) -> Option<Node> {
        match node.kind() {
            "function_definition" => Some(node),
            "decorated_definition" => node
                .child_by_field_name("definition")
                .filter(|def| def.kind() == "function_definition"),
            _ => None,
        }
    }

    fn function_name(code: &str, function_node: Node) -> Option<String> {
        let name = function_node.child_by_field_name("name")?;
        Some(code[name.byte_range()].to_string())
    }
}

impl ProgramParser for PythonParser {
    fn fence_tag(&self) -> &'static str {
        "python"
    }

    fn to_program(&mut self, code: &str) -> Option<Program> {
        let tree = self.parser.parse(code, None)?;
        let root = tree.root_node();
        if root.has_error() {
            return None;
        }

        let mut cursor = root.walk();
        let mut functions = Vec::new();
        let mut first_function_start = None;

        for child in root.children(&mut cursor) {
            let Some(function_node) = Self::as_function(child) else {
                continue;
            };

            // The outer node, so decorators stay attached to their function.
            if first_function_start.is_none() {
                first_function_start = Some(child.start_byte());
            }

            let name = Self::function_name(code, function_node).unwrap_or_default();
            functions.push(FunctionDef::new(name, code[child.byte_range()].to_string()));
        }

        let preface = match first_function_start {
            Some(start) => code[..start].trim().to_string(),
            None => String::new(),
        };

        Some(Program::new(preface, functions))
    }

    fn check_syntax(&mut self, code: &str) -> Validity {
        let Some(tree) = self.parser.parse(code, None) else {
            return Validity::Invalid {
                line: 1,
                reason: "parser produced no tree".to_string(),
            };
        };

        let root = tree.root_node();
        if !root.has_error() {
            return Validity::Valid;
        }

        match first_error(root) {
            Some(node) => Validity::Invalid {
                line: node.start_position().row + 1,
                reason: if node.is_missing() {
                    format!("missing {}", node.kind())
                } else {
                    "invalid syntax".to_string()
                },
            },
            None => Validity::Invalid {
                line: 1,
                reason: "invalid syntax".to_string(),
            },
        }
    }
}

/// Find the shallowest-first error or missing node in the tree
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    for child in children {
        if let Some(err) = first_error(child) {
            return Some(err);
        }
    }

    // has_error() without an ERROR descendant should not happen; report the
    // node itself rather than claiming validity.
    Some(node)
}
