//! jackc-sym - the Jack symbol table.
//!
//! Tracks two scopes: class scope (`static`/`field`) and subroutine scope
//! (`argument`/`local`). Subroutine scope shadows class scope. Each kind
//! gets its own dense, insertion-ordered index, assigned by [`SymbolTable::define`].

use indexmap::IndexMap;

/// The source-level kind of a declared name.
///
/// Maps to a VM segment one-to-one except `Field`, which the Compilation
/// Engine translates to the `this` segment (see the kind-to-segment table
/// in the crate that emits VM code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Static,
    Field,
    Argument,
    Local,
}

/// One entry in the symbol table: a declared name's type, kind, and
/// dense per-kind index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub type_: String,
    pub kind: SymbolKind,
    pub index: u16,
}

/// The two-scope symbol table: class scope persists for the whole class,
/// subroutine scope is cleared at the start of each subroutine.
#[derive(Debug, Default)]
pub struct SymbolTable {
    class_scope: IndexMap<String, SymbolEntry>,
    subroutine_scope: IndexMap<String, SymbolEntry>,
    static_count: u16,
    field_count: u16,
    argument_count: u16,
    local_count: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the subroutine scope and resets its per-kind counters.
    /// Class scope (and its counters) is untouched.
    pub fn start_subroutine(&mut self) {
        self.subroutine_scope.clear();
        self.argument_count = 0;
        self.local_count = 0;
    }

    /// Inserts `name` into the scope appropriate for `kind`, assigning it
    /// the next dense index for that kind. Redefining a name already
    /// present in that scope is undefined behavior: the prior entry is
    /// silently overwritten, per spec.
    pub fn define(&mut self, name: impl Into<String>, type_: impl Into<String>, kind: SymbolKind) {
        let name = name.into();
        let index = match kind {
            SymbolKind::Static => {
                let i = self.static_count;
                self.static_count += 1;
                i
            }
            SymbolKind::Field => {
                let i = self.field_count;
                self.field_count += 1;
                i
            }
            SymbolKind::Argument => {
                let i = self.argument_count;
                self.argument_count += 1;
                i
            }
            SymbolKind::Local => {
                let i = self.local_count;
                self.local_count += 1;
                i
            }
        };

        let entry = SymbolEntry {
            name: name.clone(),
            type_: type_.into(),
            kind,
            index,
        };

        match kind {
            SymbolKind::Static | SymbolKind::Field => {
                self.class_scope.insert(name, entry);
            }
            SymbolKind::Argument | SymbolKind::Local => {
                self.subroutine_scope.insert(name, entry);
            }
        }
    }

    fn resolve(&self, name: &str) -> Option<&SymbolEntry> {
        self.subroutine_scope
            .get(name)
            .or_else(|| self.class_scope.get(name))
    }

    /// The runtime index of `name`, or `None` if it is not declared in
    /// either scope. The Compilation Engine turns an unresolved lookup
    /// into a `ResolutionError` rather than masking it.
    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.resolve(name).map(|e| e.index)
    }

    /// The declared type of `name`: a primitive (`int`/`char`/`boolean`)
    /// or a class name.
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.resolve(name).map(|e| e.type_.as_str())
    }

    /// The kind of `name`: `static`, `field`, `argument`, or `local`.
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        self.resolve(name).map(|e| e.kind)
    }

    /// The number of entries of `kind` declared in its scope. Used to
    /// size `function` locals and constructor object allocations.
    pub fn count(&self, kind: SymbolKind) -> u16 {
        match kind {
            SymbolKind::Static => self.static_count,
            SymbolKind::Field => self.field_count,
            SymbolKind::Argument => self.argument_count,
            SymbolKind::Local => self.local_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_assigns_dense_indices_per_kind() {
        let mut table = SymbolTable::new();
        table.define("x", "int", SymbolKind::Field);
        table.define("y", "int", SymbolKind::Field);
        table.define("count", "int", SymbolKind::Static);

        assert_eq!(table.index_of("x"), Some(0));
        assert_eq!(table.index_of("y"), Some(1));
        assert_eq!(table.index_of("count"), Some(0));
        assert_eq!(table.count(SymbolKind::Field), 2);
        assert_eq!(table.count(SymbolKind::Static), 1);
    }

    #[test]
    fn type_and_kind_round_trip() {
        let mut table = SymbolTable::new();
        table.define("p", "Point", SymbolKind::Field);

        assert_eq!(table.type_of("p"), Some("Point"));
        assert_eq!(table.kind_of("p"), Some(SymbolKind::Field));
    }

    #[test]
    fn subroutine_scope_shadows_class_scope() {
        let mut table = SymbolTable::new();
        table.define("x", "int", SymbolKind::Field);
        table.define("x", "boolean", SymbolKind::Argument);

        assert_eq!(table.type_of("x"), Some("boolean"));
        assert_eq!(table.kind_of("x"), Some(SymbolKind::Argument));
        assert_eq!(table.index_of("x"), Some(0));
    }

    #[test]
    fn start_subroutine_clears_subroutine_scope_only() {
        let mut table = SymbolTable::new();
        table.define("count", "int", SymbolKind::Field);
        table.define("arg0", "int", SymbolKind::Argument);
        table.define("local0", "int", SymbolKind::Local);

        table.start_subroutine();

        assert_eq!(table.index_of("arg0"), None);
        assert_eq!(table.index_of("local0"), None);
        assert_eq!(table.count(SymbolKind::Argument), 0);
        assert_eq!(table.count(SymbolKind::Local), 0);
        // class scope survives
        assert_eq!(table.index_of("count"), Some(0));
        assert_eq!(table.count(SymbolKind::Field), 1);
    }

    #[test]
    fn unresolved_name_is_none() {
        let table = SymbolTable::new();
        assert_eq!(table.index_of("missing"), None);
        assert_eq!(table.type_of("missing"), None);
        assert_eq!(table.kind_of("missing"), None);
    }

    #[test]
    fn method_receiver_is_pre_inserted_as_argument_zero() {
        let mut table = SymbolTable::new();
        table.start_subroutine();
        table.define("this", "Point", SymbolKind::Argument);
        table.define("dx", "int", SymbolKind::Argument);

        assert_eq!(table.index_of("this"), Some(0));
        assert_eq!(table.index_of("dx"), Some(1));
        assert_eq!(table.type_of("this"), Some("Point"));
    }
}
