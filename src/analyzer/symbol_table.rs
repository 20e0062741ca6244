//! Chained lexical scopes
//!
//! A [`SymbolTable`] maps names to [`Symbol`]s and borrows its enclosing
//! scope. Lookup walks outward through the borrowed parents; declaration only
//! ever touches the table it is called on, so a nested scope may shadow an
//! outer name but a single scope never holds the same name twice.

use crate::analyzer::errors::SemanticError;
use crate::parser::ast::TypeName;
use rustc_hash::FxHashMap;

/// A declared name's recorded type and function-ness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ty: TypeName,
    pub is_function: bool,
}

impl Symbol {
    pub fn variable(ty: TypeName) -> Self {
        Symbol {
            ty,
            is_function: false,
        }
    }

    pub fn function(return_type: TypeName) -> Self {
        Symbol {
            ty: return_type,
            is_function: true,
        }
    }
}

/// One scope in the chain
#[derive(Debug, Clone, Default)]
pub struct SymbolTable<'p> {
    symbols: FxHashMap<String, Symbol>,
    insertion_order: Vec<String>, // Track order of declarations
    parent: Option<&'p SymbolTable<'p>>,
}

impl SymbolTable<'static> {
    /// Create a global (parentless) scope
    pub fn new() -> Self {
        SymbolTable::default()
    }
}

impl<'p> SymbolTable<'p> {
    /// Create a scope nested inside `parent`
    pub fn with_parent(parent: &'p SymbolTable<'p>) -> Self {
        SymbolTable {
            symbols: FxHashMap::default(),
            insertion_order: Vec::new(),
            parent: Some(parent),
        }
    }

    /// Declare `name` in this scope
    pub fn declare(
        &mut self,
        name: &str,
        ty: TypeName,
        is_function: bool,
    ) -> Result<(), SemanticError> {
        if self.symbols.contains_key(name) {
            return Err(SemanticError::DuplicateSymbol {
                name: name.to_string(),
                location: None,
            });
        }

        self.symbols
            .insert(name.to_string(), Symbol { ty, is_function });
        self.insertion_order.push(name.to_string());
        Ok(())
    }

    /// Resolve `name` here or in the nearest enclosing scope that has it
    pub fn lookup(&self, name: &str) -> Result<&Symbol, SemanticError> {
        let mut scope = Some(self);
        while let Some(table) = scope {
            if let Some(symbol) = table.symbols.get(name) {
                return Ok(symbol);
            }
            scope = table.parent;
        }

        Err(SemanticError::UndeclaredSymbol {
            name: name.to_string(),
            context: None,
            location: None,
        })
    }

    /// Get a symbol from this scope only
    pub fn get_local(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Symbols of this scope in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> + '_ {
        self.insertion_order
            .iter()
            .filter_map(|name| self.symbols.get(name).map(|s| (name.as_str(), s)))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn parent(&self) -> Option<&'p SymbolTable<'p>> {
        self.parent
    }

    /// Number of enclosing scopes; 0 for the global scope
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.parent;
        while let Some(table) = scope {
            depth += 1;
            scope = table.parent;
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut globals = SymbolTable::new();
        globals.declare("x", TypeName::Float, false).unwrap();

        assert_eq!(globals.lookup("x"), Ok(&Symbol::variable(TypeName::Float)));
        assert_eq!(globals.len(), 1);
        assert_eq!(globals.depth(), 0);
    }

    #[test]
    fn test_duplicate_in_same_scope() {
        let mut globals = SymbolTable::new();
        globals.declare("x", TypeName::Int, false).unwrap();

        let err = globals.declare("x", TypeName::Char, true).unwrap_err();
        assert!(matches!(err, SemanticError::DuplicateSymbol { ref name, .. } if name == "x"));
        // The first declaration survives
        assert_eq!(globals.get_local("x"), Some(&Symbol::variable(TypeName::Int)));
    }

    #[test]
    fn test_shadowing_and_parent_lookup() {
        let mut globals = SymbolTable::new();
        globals.declare("x", TypeName::Int, false).unwrap();
        globals.declare("f", TypeName::Double, true).unwrap();

        let mut local = SymbolTable::with_parent(&globals);
        local.declare("x", TypeName::Char, false).unwrap();

        assert_eq!(local.lookup("x").unwrap().ty, TypeName::Char);
        assert_eq!(local.lookup("f"), Ok(&Symbol::function(TypeName::Double)));
        assert!(!local.contains_local("f"));
        assert_eq!(local.depth(), 1);

        let inner = SymbolTable::with_parent(&local);
        assert_eq!(inner.depth(), 2);
        assert_eq!(inner.lookup("x").unwrap().ty, TypeName::Char);
    }

    #[test]
    fn test_lookup_never_descends() {
        let globals = SymbolTable::new();
        let mut local = SymbolTable::with_parent(&globals);
        local.declare("y", TypeName::Int, false).unwrap();

        assert!(matches!(
            globals.lookup("y"),
            Err(SemanticError::UndeclaredSymbol { ref name, .. }) if name == "y"
        ));
    }

    #[test]
    fn test_iteration_order() {
        let mut table = SymbolTable::new();
        for name in ["zeta", "alpha", "mid"] {
            table.declare(name, TypeName::Int, false).unwrap();
        }

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
