/*!
Merging the configurations of each clique into one.

A merged configuration is the union of its members' assignments. Members of a
clique are pairwise compatible, so a symbol set by several members carries one
value and the union is well defined. Should a member disagree with the value
already merged, the first value is kept, the disagreement is counted, and a
diagnostic goes to stderr: such a disagreement means the solver and the
conflict test have fallen out of step, and is worth a look.
*/

use std::{
    collections::{btree_map::Entry, BTreeMap},
    path::Path,
};

use crate::{
    context::Context,
    io::files,
    misc::log::targets::{self},
    structures::{Clique, Node, Symbol, Value},
    types::err,
};

impl Context {
    /// The union of the assignments of the clique's members.
    ///
    /// On a disagreement the merged value is kept, and the occurrence counted.
    pub fn merge_clique(
        &mut self,
        clique: &[Node],
    ) -> Result<BTreeMap<Symbol, Value>, err::ErrorKind> {
        let mut merged = BTreeMap::default();

        for &node in clique {
            for (symbol, value) in self.config_db.set_symbols(node) {
                match merged.entry(symbol) {
                    Entry::Vacant(entry) => {
                        entry.insert(value);
                    }

                    Entry::Occupied(entry) => {
                        if *entry.get() != value {
                            let name = self.symbol_db.name_of(symbol)?;
                            eprintln!(
                                "value '{value}': symbol {name} already merged with value {}",
                                entry.get()
                            );
                            self.counters.merge_disagreements += 1;
                        }
                    }
                }
            }
        }

        Ok(merged)
    }

    /// Merges each clique and writes one configuration file per clique to `directory`.
    ///
    /// Files are named `troll.config.<index>.<size>` by clique order and member count.
    pub fn merge_and_write(
        &mut self,
        cliques: &[Clique],
        directory: &Path,
    ) -> Result<(), err::ErrorKind> {
        for (index, clique) in cliques.iter().enumerate() {
            let merged = self.merge_clique(clique)?;
            let path =
                files::write_merged_config(directory, index, clique.len(), &merged, &self.symbol_db)?;

            log::debug!(target: targets::MERGE,
                "Clique of {} configurations merged to {path:?}", clique.len());
        }

        Ok(())
    }
}
