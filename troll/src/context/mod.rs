/*!
The context, to which configurations are added and within which a merge takes place.

A context bundles the [SymbolDB](crate::db::symbol::SymbolDB), the
[ConfigDB](crate::db::configs::ConfigDB), a [Config](crate::config::Config), and the
[Counters] of a merge. Everything else is passed through explicitly: the
compatibility graph is built from a context and handed back, and the maximum
clique solver is any implementation of
[MaxCliqueSolver](crate::solver::MaxCliqueSolver).

# Example

```rust
use troll::{config::Config, context::Context};

let mut the_context = Context::from_config(Config::default());

let a = the_context.read_config("X=y\nY=n\n".as_bytes()).unwrap();
let b = the_context.read_config("X=m\n".as_bytes()).unwrap();

assert!(the_context.config_db.conflict(a.configuration, b.configuration));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{configs::ConfigDB, symbol::SymbolDB},
};

/// A context, owning the databases of a merge.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a merge.
    pub counters: Counters,

    /// The symbol database.
    /// See [db::symbol](crate::db::symbol) for details.
    pub symbol_db: SymbolDB,

    /// The configuration database.
    /// See [db::configs](crate::db::configs) for details.
    pub config_db: ConfigDB,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        let config_db = ConfigDB::new(&config);
        Context {
            counters: Counters::default(),
            symbol_db: SymbolDB::default(),
            config_db,
            config,
        }
    }

    /// A count of configurations read into the context.
    pub fn configuration_count(&self) -> usize {
        self.config_db.count()
    }

    /// A count of distinct symbols observed across all configurations.
    pub fn symbol_count(&self) -> usize {
        self.symbol_db.count()
    }
}
