//! tree-sitter front end for BUILD files.
//!
//! Only syntax is checked here. Directives, rule calls and loads are pulled
//! out of the tree by the callers in this module.

use crate::error::{Error, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

pub struct StarlarkParser {
    parser: Parser,
}

impl StarlarkParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_starlark::LANGUAGE.into())
            .map_err(|e| Error::ParseError(format!("Failed to load Starlark grammar: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse the build file at `path`. A file with syntax errors is rejected
    /// with the line of the first one, since directives in a broken file
    /// cannot be trusted.
    pub fn parse(&mut self, path: &Path, content: &str) -> Result<StarlarkAst> {
        let tree = self.parser.parse(content, None).ok_or_else(|| {
            Error::ParseError(format!("{}: parsing was cancelled", path.display()))
        })?;
        let ast = StarlarkAst {
            tree,
            source: content.to_string(),
        };

        if ast.root().has_error() {
            let line = ast.first_error_line().unwrap_or(1);
            return Err(Error::ParseError(format!(
                "{}:{line}: syntax error in build file",
                path.display()
            )));
        }
        Ok(ast)
    }
}

/// Parsed Starlark AST
#[derive(Debug)]
pub struct StarlarkAst {
    pub tree: Tree,
    pub source: String,
}

impl StarlarkAst {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn node_text<'a>(&'a self, node: &Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn first_error_line(&self) -> Option<usize> {
        let mut line = None;
        self.walk_nodes(|node| {
            if line.is_none() && (node.is_error() || node.is_missing()) {
                line = Some(node.start_position().row + 1);
            }
        });
        line
    }

    /// Visit every node in document order
    pub fn walk_nodes<'a>(&'a self, mut visit: impl FnMut(Node<'a>)) {
        let mut cursor = self.tree.walk();
        loop {
            visit(cursor.node());
            if cursor.goto_first_child() || cursor.goto_next_sibling() {
                continue;
            }
            loop {
                if !cursor.goto_parent() {
                    return;
                }
                if cursor.goto_next_sibling() {
                    break;
                }
            }
        }
    }
}
