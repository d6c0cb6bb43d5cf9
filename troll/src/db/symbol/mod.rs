/*!
The symbol database, an append-only interner.

Each distinct symbol name receives a dense identifier on first observation,
equal to the count of symbols interned so far. Identifiers never change, and
so may be used to index slots of a
[SymbolVector](crate::db::configs::SymbolVector) for the whole of a merge.
*/

use std::collections::HashMap;

use crate::{
    structures::Symbol,
    types::err::{self, InternalError},
};

/// The symbol database.
#[derive(Default)]
pub struct SymbolDB {
    /// Names, indexed by symbol identifier.
    external_map: Vec<String>,

    /// Identifiers, by name.
    string_map: HashMap<String, Symbol>,
}

impl SymbolDB {
    /// A count of symbols in the [SymbolDB].
    pub fn count(&self) -> usize {
        self.external_map.len()
    }

    /// The identifier of `name`, interning the name if it has not been seen before.
    pub fn symbol_of(&mut self, name: &str) -> Symbol {
        if let Some(&symbol) = self.string_map.get(name) {
            return symbol;
        }

        let fresh = self.external_map.len() as Symbol;
        self.external_map.push(name.to_string());
        self.string_map.insert(name.to_string(), fresh);
        fresh
    }

    /// The name interned for `symbol`.
    ///
    /// An unknown identifier is a bug in the caller, as identifiers are only
    /// issued by [symbol_of](SymbolDB::symbol_of).
    pub fn name_of(&self, symbol: Symbol) -> Result<&str, err::ErrorKind> {
        match self.external_map.get(symbol as usize) {
            Some(name) => Ok(name),
            None => Err(err::ErrorKind::from(InternalError::UnknownSymbol(symbol))),
        }
    }
}
