//! Extract rule calls and load statements from Starlark AST

use std::collections::HashMap;
use tree_sitter::Node;

use super::starlark_parser::StarlarkAst;

/// A rule call in a BUILD file
#[derive(Debug, Clone)]
pub struct RuleCall {
    pub kind: String,
    pub name: String,
    pub attributes: HashMap<String, AttributeValue>,
    pub location: SourceLocation,
}

impl RuleCall {
    /// Whether the attribute is missing or holds no values
    pub fn is_attr_empty(&self, attr: &str) -> bool {
        match self.attributes.get(attr) {
            None => true,
            Some(AttributeValue::String(value)) | Some(AttributeValue::Label(value)) => {
                value.is_empty()
            }
            Some(AttributeValue::List(items)) => items.is_empty(),
            Some(AttributeValue::Glob(glob)) => glob.patterns.is_empty(),
            Some(AttributeValue::Boolean(_)) => false,
            // Any other expression is opaque to us and may produce values
            Some(AttributeValue::Expression(_)) => false,
        }
    }
}

/// Attribute values in rule calls
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    List(Vec<String>),
    Label(String),
    Glob(GlobPattern),
    Boolean(bool),
    Expression(String),
}

/// Glob pattern (e.g., glob(["*.ts"], exclude = ["*.spec.ts"]))
#[derive(Debug, Clone, PartialEq)]
pub struct GlobPattern {
    pub patterns: Vec<String>,
    pub exclude: Vec<String>,
}

/// A `load("<label>", "sym", alias = "sym")` statement
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStatement {
    pub label: String,
    /// Names bound in the loading file
    pub symbols: Vec<String>,
    pub location: SourceLocation,
}

/// Source location in the BUILD file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    fn of(node: &Node) -> Self {
        Self {
            line: node.start_position().row + 1,
            column: node.start_position().column,
        }
    }
}

/// Extracts rule calls and loads from Starlark AST
pub struct RuleExtractor;

impl RuleExtractor {
    /// Extract every call to one of `kinds` that carries a `name`
    pub fn extract_rules(ast: &StarlarkAst, kinds: &[&str]) -> Vec<RuleCall> {
        let mut rules = Vec::new();
        ast.walk_nodes(|node| {
            if node.kind() != "call" {
                return;
            }
            if let Some(rule) = Self::extract_rule_call(&node, ast, kinds) {
                rules.push(rule);
            }
        });
        rules
    }

    /// Extract every `load(...)` statement
    pub fn extract_loads(ast: &StarlarkAst) -> Vec<LoadStatement> {
        let mut loads = Vec::new();
        ast.walk_nodes(|node| {
            if node.kind() != "call" || Self::function_name(&node, ast) != Some("load") {
                return;
            }
            if let Some(load) = Self::extract_load(&node, ast) {
                loads.push(load);
            }
        });
        loads
    }

    fn function_name<'a>(node: &Node, ast: &'a StarlarkAst) -> Option<&'a str> {
        node.child_by_field_name("function")
            .map(|function| ast.node_text(&function))
    }

    /// Extract a rule call from a call node
    fn extract_rule_call(node: &Node, ast: &StarlarkAst, kinds: &[&str]) -> Option<RuleCall> {
        let kind = Self::function_name(node, ast)?;
        if !kinds.contains(&kind) {
            return None;
        }

        let mut attributes = HashMap::new();
        if let Some(args_node) = node.child_by_field_name("arguments") {
            Self::extract_arguments(&args_node, ast, &mut attributes);
        }

        // Rules without a literal name cannot be matched
        let name = match attributes.get("name") {
            Some(AttributeValue::String(name)) => name.clone(),
            _ => return None,
        };

        Some(RuleCall {
            kind: kind.to_string(),
            name,
            attributes,
            location: SourceLocation::of(node),
        })
    }

    fn extract_load(node: &Node, ast: &StarlarkAst) -> Option<LoadStatement> {
        let args_node = node.child_by_field_name("arguments")?;
        let mut label = None;
        let mut symbols = Vec::new();

        let mut cursor = args_node.walk();
        for child in args_node.named_children(&mut cursor) {
            match child.kind() {
                "string" if label.is_none() => label = Some(unquote(ast.node_text(&child))),
                "string" => symbols.push(unquote(ast.node_text(&child))),
                "keyword_argument" => {
                    if let Some(name_node) = child.child_by_field_name("name") {
                        symbols.push(ast.node_text(&name_node).to_string());
                    }
                }
                _ => {}
            }
        }

        Some(LoadStatement {
            label: label?,
            symbols,
            location: SourceLocation::of(node),
        })
    }

    /// Extract keyword arguments from an argument list
    fn extract_arguments(
        node: &Node,
        ast: &StarlarkAst,
        attributes: &mut HashMap<String, AttributeValue>,
    ) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "keyword_argument" {
                continue;
            }
            let (Some(name_node), Some(value_node)) = (
                child.child_by_field_name("name"),
                child.child_by_field_name("value"),
            ) else {
                continue;
            };
            let name = ast.node_text(&name_node);
            attributes.insert(name.to_string(), Self::extract_value(&value_node, ast));
        }
    }

    /// Extract a value from a node
    fn extract_value(node: &Node, ast: &StarlarkAst) -> AttributeValue {
        match node.kind() {
            "string" => {
                let value = unquote(ast.node_text(node));
                if value.starts_with(':') || value.starts_with("//") || value.starts_with('@') {
                    AttributeValue::Label(value)
                } else {
                    AttributeValue::String(value)
                }
            }
            "list" => AttributeValue::List(Self::string_items(node, ast)),
            "call" if Self::function_name(node, ast) == Some("glob") => {
                Self::extract_glob_pattern(node, ast)
            }
            "true" => AttributeValue::Boolean(true),
            "false" => AttributeValue::Boolean(false),
            _ => AttributeValue::Expression(ast.node_text(node).to_string()),
        }
    }

    fn string_items(node: &Node, ast: &StarlarkAst) -> Vec<String> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| child.kind() == "string")
            .map(|child| unquote(ast.node_text(&child)))
            .collect()
    }

    /// Extract a glob pattern
    fn extract_glob_pattern(node: &Node, ast: &StarlarkAst) -> AttributeValue {
        let mut patterns = Vec::new();
        let mut exclude = Vec::new();

        if let Some(args_node) = node.child_by_field_name("arguments") {
            let mut cursor = args_node.walk();
            for child in args_node.named_children(&mut cursor) {
                match child.kind() {
                    "list" => patterns = Self::string_items(&child, ast),
                    "keyword_argument" => {
                        let is_exclude = child
                            .child_by_field_name("name")
                            .is_some_and(|name| ast.node_text(&name) == "exclude");
                        if let Some(value) = child.child_by_field_name("value") {
                            if is_exclude && value.kind() == "list" {
                                exclude = Self::string_items(&value, ast);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        AttributeValue::Glob(GlobPattern { patterns, exclude })
    }
}

fn unquote(text: &str) -> String {
    text.trim_matches('"').trim_matches('\'').to_string()
}
