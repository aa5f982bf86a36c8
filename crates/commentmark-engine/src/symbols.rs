//! The symbol lookup seam between the engine and whatever indexes the source.

use std::collections::BTreeSet;

/// Lookup callbacks used to classify documentation cross-references.
///
/// Implementations must not mutate shared state during rendering; documents
/// may be built in parallel against the same lookup.
pub trait SymbolLookup {
    /// Reports whether a symbol with the given name exists. The package hint
    /// is the import path the reference was written with, or empty for
    /// references within the current type.
    fn symbol_exists(&self, package_hint: &str, name: &str) -> bool;

    /// Reports whether the given import path names the package currently
    /// being documented.
    fn is_current_package(&self, import_path: &str) -> bool;
}

/// An in-memory [`SymbolLookup`] over the current package name and the set of
/// symbol names known to exist in it.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    current_package: String,
    symbols: BTreeSet<String>,
}

impl PackageIndex {
    pub fn new(current_package: impl Into<String>) -> Self {
        Self {
            current_package: current_package.into(),
            symbols: BTreeSet::new(),
        }
    }

    pub fn with_symbols<I, S>(current_package: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            current_package: current_package.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_symbol(&mut self, name: impl Into<String>) {
        self.symbols.insert(name.into());
    }

    pub fn current_package(&self) -> &str {
        &self.current_package
    }
}

impl SymbolLookup for PackageIndex {
    fn symbol_exists(&self, _package_hint: &str, name: &str) -> bool {
        self.symbols.contains(name)
    }

    fn is_current_package(&self, import_path: &str) -> bool {
        // An unnamed current package never matches anything.
        !self.current_package.is_empty() && import_path == self.current_package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbol_exists() {
        let index = PackageIndex::with_symbols("core", ["Volume", "Reader"]);
        assert!(index.symbol_exists("", "Volume"));
        assert!(!index.symbol_exists("", "Missing"));
    }

    #[test]
    fn current_package_matches_by_name() {
        let index = PackageIndex::new("core");
        assert!(index.is_current_package("core"));
        assert!(!index.is_current_package("other"));
    }

    #[test]
    fn empty_current_package_never_matches() {
        let index = PackageIndex::new("");
        assert!(!index.is_current_package(""));
        assert!(!index.is_current_package("core"));
    }

    #[test]
    fn add_symbol_extends_the_index() {
        let mut index = PackageIndex::new("core");
        assert!(!index.symbol_exists("", "Late"));
        index.add_symbol("Late");
        assert!(index.symbol_exists("", "Late"));
    }
}
