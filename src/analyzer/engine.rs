//! Semantic analysis over the parse tree
//!
//! [`SemanticAnalyzer`] walks a [`ParseNode`] tree depth first, declaring
//! symbols into the current scope and checking every use against the scope
//! chain. Function bodies get their own scope, created on the walker's stack
//! frame and dropped when the body has been analyzed.
//!
//! # Rules
//!
//! - A function name is declared (as a function) in the enclosing scope
//!   before its body is analyzed.
//! - A variable's initializer is checked *before* the variable is declared,
//!   so `int x = x;` reports `x` as undeclared.
//! - A call target must resolve to a function symbol.
//! - Initializer types follow the directed lattice of [`TypeName::accepts`].
//!
//! Analysis stops at the first error. The global table is still available
//! through [`SemanticAnalyzer::globals`] afterwards and holds whatever had
//! been declared up to that point.

use crate::analyzer::builtins::DEFAULT_BUILTINS;
use crate::analyzer::errors::{LookupContext, SemanticError};
use crate::analyzer::symbol_table::{Symbol, SymbolTable};
use crate::parser::ast::{ParseNode, SourceLocation, TypeName};

/// Contents of a function scope at the moment it was popped
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeRecord {
    pub owner: String,
    pub depth: usize,
    pub symbols: Vec<(String, Symbol)>,
}

impl ScopeRecord {
    fn capture(owner: &str, scope: &SymbolTable<'_>) -> Self {
        ScopeRecord {
            owner: owner.to_string(),
            depth: scope.depth(),
            symbols: scope
                .iter()
                .map(|(name, symbol)| (name.to_string(), *symbol))
                .collect(),
        }
    }
}

/// Infer the type of a number literal: all digits is `int`, any other
/// floating-point spelling is `double`.
pub fn infer_number_type(literal: &str) -> Result<TypeName, SemanticError> {
    if !literal.is_empty() && literal.chars().all(|c| c.is_ascii_digit()) {
        Ok(TypeName::Int)
    } else if literal.parse::<f64>().is_ok() {
        Ok(TypeName::Double)
    } else {
        Err(SemanticError::MalformedLiteral {
            literal: literal.to_string(),
            location: None,
        })
    }
}

fn seed_table<I, S>(predefined: I) -> Result<SymbolTable<'static>, SemanticError>
where
    I: IntoIterator<Item = (S, Symbol)>,
    S: AsRef<str>,
{
    let mut table = SymbolTable::new();
    for (name, symbol) in predefined {
        table.declare(name.as_ref(), symbol.ty, symbol.is_function)?;
    }
    Ok(table)
}

/// Scoped semantic checker
#[derive(Debug, Clone)]
pub struct SemanticAnalyzer {
    /// Seed for the global scope of every run
    builtins: SymbolTable<'static>,

    /// Global scope of the latest run
    globals: SymbolTable<'static>,

    /// Function scopes of the latest run, in the order they were popped
    closed_scopes: Vec<ScopeRecord>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    /// Create an analyzer seeded with the default predefined functions
    pub fn new() -> Self {
        let builtins = seed_table(DEFAULT_BUILTINS.iter().copied());
        debug_assert!(builtins.is_ok(), "duplicate name in DEFAULT_BUILTINS");
        Self::from_builtins(builtins.unwrap_or_default())
    }

    /// Create an analyzer seeded with a caller-supplied set of predefined
    /// symbols instead of the defaults.
    ///
    /// An empty set falls back to the defaults. A name repeated within the
    /// set is a [`SemanticError::DuplicateSymbol`].
    pub fn with_predefined<I, S>(predefined: I) -> Result<Self, SemanticError>
    where
        I: IntoIterator<Item = (S, Symbol)>,
        S: AsRef<str>,
    {
        let builtins = seed_table(predefined)?;
        if builtins.is_empty() {
            return Ok(Self::new());
        }
        Ok(Self::from_builtins(builtins))
    }

    fn from_builtins(builtins: SymbolTable<'static>) -> Self {
        SemanticAnalyzer {
            globals: builtins.clone(),
            builtins,
            closed_scopes: Vec::new(),
        }
    }

    /// Analyze `tree` and return the populated global scope.
    ///
    /// Every call starts from a fresh copy of the predefined symbols.
    pub fn analyze(&mut self, tree: &ParseNode) -> Result<&SymbolTable<'static>, SemanticError> {
        self.closed_scopes.clear();
        let mut globals = self.builtins.clone();

        let result = self.analyze_node(tree, &mut globals);
        self.globals = globals;

        result.map(|()| &self.globals)
    }

    /// Global scope of the latest run, complete or not
    pub fn globals(&self) -> &SymbolTable<'static> {
        &self.globals
    }

    pub fn into_globals(self) -> SymbolTable<'static> {
        self.globals
    }

    pub fn closed_scopes(&self) -> &[ScopeRecord] {
        &self.closed_scopes
    }

    fn analyze_node(
        &mut self,
        node: &ParseNode,
        scope: &mut SymbolTable<'_>,
    ) -> Result<(), SemanticError> {
        match node {
            ParseNode::Program { declarations }
            | ParseNode::DeclarationList { declarations, .. } => {
                for decl in declarations {
                    self.analyze_node(decl, scope)?;
                }
                Ok(())
            }
            ParseNode::ExpressionStatement { expr, .. } => self.analyze_node(expr, scope),
            ParseNode::Function {
                return_type,
                name,
                body,
                location,
            } => self.analyze_function(*return_type, name, body, *location, scope),
            ParseNode::VariableDeclaration {
                var_type,
                name,
                initializer,
                location,
            } => {
                if let Some(init) = initializer {
                    self.type_check_assignment(*var_type, init, scope)?;
                }
                scope
                    .declare(name, *var_type, false)
                    .map_err(|e| e.at(*location))
            }
            ParseNode::FunctionCall {
                callee, location, ..
            } => self.analyze_function_call(callee, *location, scope),
            // Leaves with nothing to check
            ParseNode::Identifier(..) | ParseNode::Number(..) => Ok(()),
        }
    }

    fn analyze_function(
        &mut self,
        return_type: TypeName,
        name: &str,
        body: &ParseNode,
        location: SourceLocation,
        scope: &mut SymbolTable<'_>,
    ) -> Result<(), SemanticError> {
        scope
            .declare(name, return_type, true)
            .map_err(|e| e.at(location))?;

        let mut local = SymbolTable::with_parent(&*scope);
        let result = self.analyze_node(body, &mut local);
        self.closed_scopes.push(ScopeRecord::capture(name, &local));

        result
    }

    /// Calls only check the callee; arguments are not analyzed.
    fn analyze_function_call(
        &self,
        callee: &str,
        location: SourceLocation,
        scope: &SymbolTable<'_>,
    ) -> Result<(), SemanticError> {
        let symbol = scope
            .lookup(callee)
            .map_err(|e| e.in_context(LookupContext::FunctionCall).at(location))?;

        if !symbol.is_function {
            return Err(SemanticError::NotAFunction {
                name: callee.to_string(),
                location: Some(location),
            });
        }
        Ok(())
    }

    /// Check that `value` may initialize a variable of type `expected`.
    /// Call initializers are accepted unchecked.
    fn type_check_assignment(
        &self,
        expected: TypeName,
        value: &ParseNode,
        scope: &SymbolTable<'_>,
    ) -> Result<(), SemanticError> {
        // Identifier failures carry the assignment prefix, literal ones do not
        let (found, context) = match value {
            ParseNode::Number(literal, loc) => {
                (infer_number_type(literal).map_err(|e| e.at(*loc))?, None)
            }
            ParseNode::Identifier(name, loc) => {
                let symbol = scope
                    .lookup(name)
                    .map_err(|e| e.in_context(LookupContext::Assignment).at(*loc))?;
                (symbol.ty, Some(LookupContext::Assignment))
            }
            _ => return Ok(()),
        };

        if expected.accepts(found) {
            Ok(())
        } else {
            Err(SemanticError::TypeMismatch {
                expected,
                found,
                context,
                location: Some(value.location()),
            })
        }
    }
}
