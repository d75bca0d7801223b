use super::annotations::DeclId;
use rustc_hash::FxHashMap;

/// Names in scope, as a stack of scopes.
///
/// The bottom scope holds the parameters and the program's declarations;
/// a statement that introduces temporaries pushes a scope for them and
/// pops it when it is done. A name can't be declared while it is visible,
/// which rules out shadowing.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<FxHashMap<String, DeclId>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![FxHashMap::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    // the outermost scope lives as long as the table
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declare `name` in the innermost scope. Returns false, leaving the
    /// table unchanged, if the name is already visible.
    pub fn insert(&mut self, name: &str, decl: DeclId) -> bool {
        if self.lookup(name).is_some() {
            return false;
        }

        match self.scopes.last_mut() {
            Some(scope) => {
                scope.insert(name.to_string(), decl);
                true
            }
            None => false,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<DeclId> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
