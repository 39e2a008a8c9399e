//! Symbol table for formula identifiers
//!
//! An ordinary name → [`UnitDef`] map with a second lookup pass for metric
//! prefixes: a name that is not in the table verbatim is retried with its
//! first character read as a prefix symbol (`mg` → milli + `g`). An exact
//! match always wins, so `min` is the minute and never milli-inch.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::units::catalog::CATALOG;
use crate::units::{Prefix, UnitDef};

/// How a name was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Exact(UnitDef),
    Prefixed { prefix: Prefix, base: UnitDef },
}

impl Resolution {
    /// The unit this resolution denotes
    pub const fn unit(&self) -> UnitDef {
        match self {
            Resolution::Exact(unit) => *unit,
            Resolution::Prefixed { prefix, base } => base.apply_prefix(*prefix),
        }
    }
}

/// Split `name` into a prefix symbol and the remaining base name
pub fn split_prefix(name: &str) -> Option<(Prefix, &str)> {
    let first = name.chars().next()?;
    let prefix = Prefix::from_symbol(first)?;
    let rest = &name[first.len_utf8()..];
    (!rest.is_empty()).then_some((prefix, rest))
}

static DEFAULTS: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::with_defaults);

/// Name → unit map
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    units: FxHashMap<String, UnitDef>,
}

impl SymbolTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalogue unit under both its symbol and its long name
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for entry in CATALOG {
            table.define(entry.symbol, entry.def);
            table.define(entry.name, entry.def);
        }
        table
    }

    /// Shared default table, built on first use
    pub fn defaults() -> &'static SymbolTable {
        &DEFAULTS
    }

    /// Bind `name`, returning the unit it previously denoted
    pub fn define(&mut self, name: impl Into<String>, unit: UnitDef) -> Option<UnitDef> {
        self.units.insert(name.into(), unit)
    }

    /// Exact lookup, no prefix handling
    pub fn lookup(&self, name: &str) -> Option<UnitDef> {
        self.units.get(name).copied()
    }

    /// Exact lookup, then prefix + base
    pub fn resolve(&self, name: &str) -> Option<Resolution> {
        if let Some(unit) = self.lookup(name) {
            return Some(Resolution::Exact(unit));
        }
        let (prefix, rest) = split_prefix(name)?;
        let base = self.lookup(rest)?;
        Some(Resolution::Prefixed { prefix, base })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Entries sorted by name
    pub fn entries(&self) -> Vec<(&str, UnitDef)> {
        let mut entries: Vec<_> = self
            .units
            .iter()
            .map(|(name, unit)| (name.as_str(), *unit))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, UnitDef)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, UnitDef)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<S: Into<String>> Extend<(S, UnitDef)> for SymbolTable {
    fn extend<I: IntoIterator<Item = (S, UnitDef)>>(&mut self, iter: I) {
        for (name, unit) in iter {
            self.define(name, unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::customary::Minute;
    use crate::units::si::{Gram, Meter};
    use crate::units::unit::Unit;

    #[test]
    fn test_defaults_have_symbols_and_names() {
        let table = SymbolTable::defaults();
        assert_eq!(table.lookup("m"), Some(Meter::DEF));
        assert_eq!(table.lookup("meter"), Some(Meter::DEF));
        assert_eq!(table.len(), CATALOG.len() * 2 - 1); // `bar` is its own name
    }

    #[test]
    fn test_prefix_resolution() {
        let table = SymbolTable::defaults();
        assert_eq!(
            table.resolve("mg"),
            Some(Resolution::Prefixed {
                prefix: Prefix::Milli,
                base: Gram::DEF
            })
        );
        assert!(
            table
                .resolve("mg")
                .unwrap()
                .unit()
                .same_as(&Gram::DEF.apply_prefix(Prefix::Milli))
        );
        assert_eq!(
            table.resolve("kilometer").map(|r| r.unit().factor),
            None,
            "only single-character prefix symbols are stripped"
        );
        assert_eq!(table.resolve("kmeter").map(|r| r.unit().factor), Some(1000.0));
    }

    #[test]
    fn test_exact_match_wins() {
        let table = SymbolTable::defaults();
        assert_eq!(table.resolve("min"), Some(Resolution::Exact(Minute::DEF)));
    }

    #[test]
    fn test_unresolved() {
        let table = SymbolTable::defaults();
        assert_eq!(table.resolve("xyz"), None);
        assert_eq!(table.resolve("k"), None);
        assert_eq!(table.resolve("kxyz"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn test_define_and_collect() {
        let mut table: SymbolTable = [("furlong", Meter::DEF.scale(201.168))].into_iter().collect();
        assert!(table.contains("furlong"));
        let old = table.define("furlong", Meter::DEF);
        assert!(old.is_some());
        assert_eq!(table.entries(), vec![("furlong", Meter::DEF)]);
    }
}
