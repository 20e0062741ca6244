// Parse tree definitions for the C subset front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The four declarable types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Float,
    Double,
    Char,
}

impl TypeName {
    /// Map a type keyword to its type, `None` for any other keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(TypeName::Int),
            "float" => Some(TypeName::Float),
            "double" => Some(TypeName::Double),
            "char" => Some(TypeName::Char),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Double => "double",
            TypeName::Char => "char",
        }
    }

    /// Whether a value of type `value` may be stored in a variable of this type.
    ///
    /// The relation is directed: `double` accepts `int`, but `int` does not
    /// accept `double`.
    pub fn accepts(self, value: TypeName) -> bool {
        match self {
            TypeName::Int => matches!(value, TypeName::Int),
            TypeName::Float => matches!(value, TypeName::Int | TypeName::Float),
            TypeName::Double => {
                matches!(value, TypeName::Int | TypeName::Float | TypeName::Double)
            }
            TypeName::Char => matches!(value, TypeName::Char),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Parse tree nodes, one variant per grammar production
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    Program {
        declarations: Vec<ParseNode>,
    },
    DeclarationList {
        declarations: Vec<ParseNode>,
        location: SourceLocation,
    },
    Function {
        return_type: TypeName,
        name: String,
        body: Box<ParseNode>, // Always a DeclarationList
        location: SourceLocation,
    },
    VariableDeclaration {
        var_type: TypeName,
        name: String,
        initializer: Option<Box<ParseNode>>,
        location: SourceLocation,
    },
    ExpressionStatement {
        expr: Box<ParseNode>,
        location: SourceLocation,
    },

    // Expressions
    FunctionCall {
        callee: String,
        arguments: Vec<ParseNode>,
        location: SourceLocation,
    },
    Identifier(String, SourceLocation),
    Number(String, SourceLocation),
}

impl ParseNode {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseNode::Program { .. } => SourceLocation::default(),
            ParseNode::DeclarationList { location, .. } => *location,
            ParseNode::Function { location, .. } => *location,
            ParseNode::VariableDeclaration { location, .. } => *location,
            ParseNode::ExpressionStatement { location, .. } => *location,
            ParseNode::FunctionCall { location, .. } => *location,
            ParseNode::Identifier(_, loc) => *loc,
            ParseNode::Number(_, loc) => *loc,
        }
    }

    /// Name of the grammar production this node was built from
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseNode::Program { .. } => "Program",
            ParseNode::DeclarationList { .. } => "DeclarationList",
            ParseNode::Function { .. } => "Function",
            ParseNode::VariableDeclaration { .. } => "VariableDeclaration",
            ParseNode::ExpressionStatement { .. } => "ExpressionStatement",
            ParseNode::FunctionCall { .. } => "FunctionCall",
            ParseNode::Identifier(..) => "Identifier",
            ParseNode::Number(..) => "Number",
        }
    }

    /// Render the tree as indented lines, one per node.
    ///
    /// Type and name payloads are shown as leaf lines under their declaring
    /// node, e.g. `Type(int)` and `Identifier(main)`.
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.push_outline(0, &mut lines);
        lines
    }

    fn push_outline(&self, level: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(level);
        let leaf = |lines: &mut Vec<String>, text: String| {
            lines.push(format!("{}  {}", indent, text));
        };

        match self {
            ParseNode::Program { declarations } | ParseNode::DeclarationList { declarations, .. } => {
                lines.push(format!("{}{}", indent, self.kind_name()));
                for decl in declarations {
                    decl.push_outline(level + 1, lines);
                }
            }
            ParseNode::Function {
                return_type,
                name,
                body,
                ..
            } => {
                lines.push(format!("{}Function", indent));
                leaf(lines, format!("Type({})", return_type));
                leaf(lines, format!("Identifier({})", name));
                body.push_outline(level + 1, lines);
            }
            ParseNode::VariableDeclaration {
                var_type,
                name,
                initializer,
                ..
            } => {
                lines.push(format!("{}VariableDeclaration", indent));
                leaf(lines, format!("Type({})", var_type));
                leaf(lines, format!("Identifier({})", name));
                if let Some(init) = initializer {
                    init.push_outline(level + 1, lines);
                }
            }
            ParseNode::ExpressionStatement { expr, .. } => {
                lines.push(format!("{}ExpressionStatement", indent));
                expr.push_outline(level + 1, lines);
            }
            ParseNode::FunctionCall {
                callee, arguments, ..
            } => {
                lines.push(format!("{}FunctionCall", indent));
                leaf(lines, format!("Identifier({})", callee));
                for arg in arguments {
                    arg.push_outline(level + 1, lines);
                }
            }
            ParseNode::Identifier(name, _) => {
                lines.push(format!("{}Identifier({})", indent, name));
            }
            ParseNode::Number(literal, _) => {
                lines.push(format!("{}Number({})", indent, literal));
            }
        }
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.outline() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lattice_is_directed() {
        assert!(TypeName::Double.accepts(TypeName::Int));
        assert!(TypeName::Double.accepts(TypeName::Float));
        assert!(TypeName::Float.accepts(TypeName::Int));
        assert!(!TypeName::Int.accepts(TypeName::Double));
        assert!(!TypeName::Int.accepts(TypeName::Float));
        assert!(!TypeName::Float.accepts(TypeName::Double));
        assert!(!TypeName::Char.accepts(TypeName::Int));
        assert!(!TypeName::Int.accepts(TypeName::Char));
        assert!(TypeName::Char.accepts(TypeName::Char));
    }

    #[test]
    fn test_type_keywords() {
        assert_eq!(TypeName::from_keyword("float"), Some(TypeName::Float));
        assert_eq!(TypeName::from_keyword("return"), None);
        assert_eq!(TypeName::Double.to_string(), "double");
    }

    #[test]
    fn test_outline_layout() {
        let loc = SourceLocation::default();
        let tree = ParseNode::Program {
            declarations: vec![ParseNode::Function {
                return_type: TypeName::Int,
                name: "main".to_string(),
                body: Box::new(ParseNode::DeclarationList {
                    declarations: vec![ParseNode::ExpressionStatement {
                        expr: Box::new(ParseNode::FunctionCall {
                            callee: "puts".to_string(),
                            arguments: vec![ParseNode::Number("1".to_string(), loc)],
                            location: loc,
                        }),
                        location: loc,
                    }],
                    location: loc,
                }),
                location: loc,
            }],
        };

        assert_eq!(
            tree.outline(),
            vec![
                "Program",
                "  Function",
                "    Type(int)",
                "    Identifier(main)",
                "    DeclarationList",
                "      ExpressionStatement",
                "        FunctionCall",
                "          Identifier(puts)",
                "          Number(1)",
            ]
        );
    }
}
