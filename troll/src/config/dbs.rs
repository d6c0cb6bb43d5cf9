//! Configuration structures for the databases.

use super::{defaults, ValueCheck};

/// Configuration of the configuration database.
#[derive(Clone, Debug)]
pub struct ConfigDBConfig {
    /// How many words to add to every configuration's word array when a fresh
    /// symbol requires more room.
    pub word_growth: usize,

    /// Which pairwise word test decides a clash.
    pub value_check: ValueCheck,
}

impl Default for ConfigDBConfig {
    fn default() -> Self {
        ConfigDBConfig {
            word_growth: defaults::WORD_GROWTH,
            value_check: defaults::VALUE_CHECK,
        }
    }
}
