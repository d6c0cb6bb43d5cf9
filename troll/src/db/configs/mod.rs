/*!
The configuration database, a bit-packed store of every parsed configuration.

Each configuration is a [SymbolVector]: a word array holding one three-bit slot
per symbol, twenty-one slots to a 64-bit word. The packing supports a pairwise
conflict test of a few bitwise operations per aligned word pair, with no
branching on individual symbols.

The slot codes are those of [Value]: `n = 001`, `m = 010`, `y = 011`, unset
`000`. The high bit of every word is padding and always zero. Shifting a word
left by one therefore never carries a slot's bits into its neighbour, which the
conflict test relies on.

Word arrays grow in lockstep across all configurations, so any two vectors
index the same symbol at the same position for the whole of a merge.
*/

use crate::{
    config::{dbs::ConfigDBConfig, Config, ValueCheck},
    misc::log::targets::{self},
    structures::{Node, Symbol, Value},
};

/// The number of three-bit slots packed into each word.
pub const SLOTS_PER_WORD: usize = 21;

/// The width of a slot, in bits.
const SLOT_WIDTH: usize = 3;

/// A mask covering a single slot.
const SLOT_MASK: u64 = 0b111;

/// The low bit of every slot, with the padding bit clear.
const SLOT_LSB: u64 = 0x1249_2492_4924_9249;

/// The packed assignments of a single configuration.
pub struct SymbolVector {
    /// The assignment words.
    words: Vec<u64>,

    /// The inclusive range of word indices ever written, if any.
    ///
    /// Every word outside the span is zero.
    span: Option<(usize, usize)>,
}

/// The configuration database: every parsed configuration, in parse order.
pub struct ConfigDB {
    /// One vector per configuration, indexed by [Node].
    vectors: Vec<SymbolVector>,

    /// The present length of every vector's word array.
    word_capacity: usize,

    /// A local configuration, typically derived from the configuration of a context.
    config: ConfigDBConfig,
}

impl ConfigDB {
    pub fn new(config: &Config) -> Self {
        ConfigDB {
            vectors: Vec::default(),
            word_capacity: config.config_db.word_growth.max(1),
            config: config.config_db.clone(),
        }
    }

    /// A count of configurations in the [ConfigDB].
    pub fn count(&self) -> usize {
        self.vectors.len()
    }

    /// A fresh configuration with nothing assigned, identified by the returned [Node].
    pub fn fresh_config(&mut self) -> Node {
        self.vectors.push(SymbolVector {
            words: vec![0; self.word_capacity],
            span: None,
        });
        self.vectors.len() - 1
    }

    /// Records `symbol = value` on the given configuration.
    ///
    /// Setting a symbol twice on the same configuration is undefined, as the slot
    /// is or-assigned. No configuration file assigns a symbol twice.
    pub fn add_symbol(&mut self, configuration: Node, symbol: Symbol, value: Value) {
        let word = symbol as usize / SLOTS_PER_WORD;
        let shift = (symbol as usize % SLOTS_PER_WORD) * SLOT_WIDTH;

        if word >= self.word_capacity {
            self.grow_to(word);
        }

        let vector = &mut self.vectors[configuration];
        vector.words[word] |= value.code() << shift;
        vector.span = match vector.span {
            None => Some((word, word)),
            Some((low, high)) => Some((low.min(word), high.max(word))),
        };
    }

    /// Every `(symbol, value)` pair set on the given configuration, in slot order.
    pub fn set_symbols(&self, configuration: Node) -> Vec<(Symbol, Value)> {
        let vector = &self.vectors[configuration];
        let mut symbols = Vec::default();

        let Some((low, high)) = vector.span else {
            return symbols;
        };

        for word in low..=high {
            if vector.words[word] == 0 {
                continue;
            }

            for slot in 0..SLOTS_PER_WORD {
                let code = (vector.words[word] >> (slot * SLOT_WIDTH)) & SLOT_MASK;
                if code == 0 {
                    continue;
                }

                let Some(value) = Value::from_code(code) else {
                    panic!("! Corrupt slot code {code:#05b} on configuration {configuration}");
                };

                symbols.push(((word * SLOTS_PER_WORD + slot) as Symbol, value));
            }
        }

        symbols
    }

    /// Whether configurations `i` and `j` disagree on the value of some shared symbol.
    ///
    /// Words outside a vector's span are zero and a zero word clashes with nothing,
    /// so the scan covers the intersection of the two spans, exiting on the first
    /// clashing word.
    pub fn conflict(&self, i: Node, j: Node) -> bool {
        let a = &self.vectors[i];
        let b = &self.vectors[j];

        let (Some((a_low, a_high)), Some((b_low, b_high))) = (a.span, b.span) else {
            return false;
        };

        let low = a_low.max(b_low);
        let high = a_high.min(b_high);

        for word in low..=high {
            let clash = match self.config.value_check {
                ValueCheck::Shift => shift_clash(a.words[word], b.words[word]),
                ValueCheck::PerSlot => per_slot_clash(a.words[word], b.words[word]),
            };

            if clash {
                return true;
            }
        }

        false
    }

    /// Extends every configuration's word array, in lockstep, to cover `word`.
    fn grow_to(&mut self, word: usize) {
        while self.word_capacity <= word {
            self.word_capacity += self.config.word_growth.max(1);
        }

        log::debug!(target: targets::PARSE, "Configuration store resized to {} words", self.word_capacity);

        for vector in &mut self.vectors {
            vector.words.resize(self.word_capacity, 0);
        }
    }
}

/// The shifted clash test.
///
/// Per slot, bit one of the result is `(a₀ ∧ b₁) ⊕ (b₀ ∧ a₁)`, set exactly when the
/// slots hold distinct nonzero codes. The zero padding bit keeps each shift within
/// its slot.
fn shift_clash(a: u64, b: u64) -> bool {
    (((a << 1) & b) ^ ((b << 1) & a)) != 0
}

/// The explicit clash test: some slot is set on both sides with differing codes.
fn per_slot_clash(a: u64, b: u64) -> bool {
    let set_a = (a | (a >> 1)) & SLOT_LSB;
    let set_b = (b | (b >> 1)) & SLOT_LSB;

    let differs = a ^ b;
    let differs = (differs | (differs >> 1)) & SLOT_LSB;

    (set_a & set_b & differs) != 0
}

#[cfg(test)]
mod config_db_tests {
    use super::*;

    fn db(check: ValueCheck) -> ConfigDB {
        let mut config = Config::default();
        config.config_db.value_check = check;
        ConfigDB::new(&config)
    }

    #[test]
    fn clash_tests_cover_the_value_table() {
        let domain = [None, Some(Value::No), Some(Value::Module), Some(Value::Yes)];

        for a in domain {
            for b in domain {
                let word_a = a.map_or(0, Value::code);
                let word_b = b.map_or(0, Value::code);

                let expected = match (a, b) {
                    (Some(x), Some(y)) => x != y,
                    _ => false,
                };

                assert_eq!(shift_clash(word_a, word_b), expected, "{a:?} vs {b:?}");
                assert_eq!(per_slot_clash(word_a, word_b), expected, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn clash_tests_agree_across_slots() {
        // Values spread over distinct slots of one word never clash.
        let word_a = Value::Yes.code() | (Value::No.code() << 3) | (Value::Module.code() << 60);
        let word_b = Value::Yes.code() << 3;

        assert!(shift_clash(word_a, word_b));
        assert!(per_slot_clash(word_a, word_b));

        let word_c = Value::No.code() << 3;
        assert!(!shift_clash(word_a, word_c));
        assert!(!per_slot_clash(word_a, word_c));
    }

    #[test]
    fn no_self_conflict() {
        for check in [ValueCheck::Shift, ValueCheck::PerSlot] {
            let mut the_db = db(check);
            let configuration = the_db.fresh_config();
            the_db.add_symbol(configuration, 0, Value::Yes);
            the_db.add_symbol(configuration, 5, Value::Module);
            the_db.add_symbol(configuration, 100, Value::No);

            assert!(!the_db.conflict(configuration, configuration));
        }
    }

    #[test]
    fn disjoint_symbols_are_compatible() {
        for check in [ValueCheck::Shift, ValueCheck::PerSlot] {
            let mut the_db = db(check);

            // Distinct slots of the same word.
            let a = the_db.fresh_config();
            the_db.add_symbol(a, 0, Value::Yes);
            let b = the_db.fresh_config();
            the_db.add_symbol(b, 1, Value::No);
            assert!(!the_db.conflict(a, b));

            // Distinct words.
            let c = the_db.fresh_config();
            the_db.add_symbol(c, (SLOTS_PER_WORD * 3) as Symbol, Value::Module);
            assert!(!the_db.conflict(a, c));
            assert!(!the_db.conflict(c, a));
        }
    }

    #[test]
    fn shared_symbol_disagreement_is_a_conflict() {
        for check in [ValueCheck::Shift, ValueCheck::PerSlot] {
            for (left, right) in [
                (Value::No, Value::Module),
                (Value::Module, Value::Yes),
                (Value::No, Value::Yes),
            ] {
                let mut the_db = db(check);
                let a = the_db.fresh_config();
                the_db.add_symbol(a, 7, left);
                let b = the_db.fresh_config();
                the_db.add_symbol(b, 7, right);

                assert!(the_db.conflict(a, b), "{left:?} vs {right:?}");
                assert!(the_db.conflict(b, a), "{right:?} vs {left:?}");
            }
        }
    }

    #[test]
    fn shared_symbol_agreement_is_compatible() {
        for check in [ValueCheck::Shift, ValueCheck::PerSlot] {
            for value in [Value::No, Value::Module, Value::Yes] {
                let mut the_db = db(check);
                let a = the_db.fresh_config();
                the_db.add_symbol(a, 7, value);
                the_db.add_symbol(a, 30, Value::Yes);
                let b = the_db.fresh_config();
                the_db.add_symbol(b, 7, value);

                assert!(!the_db.conflict(a, b));
            }
        }
    }

    #[test]
    fn set_symbols_in_slot_order() {
        let mut the_db = db(ValueCheck::Shift);
        let configuration = the_db.fresh_config();

        the_db.add_symbol(configuration, 44, Value::No);
        the_db.add_symbol(configuration, 2, Value::Yes);
        the_db.add_symbol(configuration, 21, Value::Module);

        assert_eq!(
            the_db.set_symbols(configuration),
            vec![
                (2, Value::Yes),
                (21, Value::Module),
                (44, Value::No),
            ]
        );
    }

    #[test]
    fn set_symbols_of_an_empty_configuration() {
        let mut the_db = db(ValueCheck::Shift);
        let configuration = the_db.fresh_config();

        assert!(the_db.set_symbols(configuration).is_empty());
    }

    #[test]
    fn lockstep_growth() {
        let mut the_db = db(ValueCheck::Shift);

        let a = the_db.fresh_config();
        the_db.add_symbol(a, 0, Value::Yes);

        // Far past the initial capacity of one hundred words.
        let far = (SLOTS_PER_WORD * 150) as Symbol;
        let b = the_db.fresh_config();
        the_db.add_symbol(b, far, Value::Yes);

        // The earlier configuration remains comparable after the resize.
        assert!(!the_db.conflict(a, b));

        the_db.add_symbol(a, far, Value::No);
        assert!(the_db.conflict(a, b));
        assert_eq!(
            the_db.set_symbols(a),
            vec![(0, Value::Yes), (far, Value::No)]
        );
    }

    #[test]
    fn span_intersection_bounds_the_scan() {
        let mut the_db = db(ValueCheck::Shift);

        // Touches only word zero.
        let a = the_db.fresh_config();
        the_db.add_symbol(a, 3, Value::Yes);

        // Touches only word four.
        let b = the_db.fresh_config();
        the_db.add_symbol(b, (SLOTS_PER_WORD * 4 + 3) as Symbol, Value::No);

        // Empty intersection, no conflict either way.
        assert!(!the_db.conflict(a, b));
        assert!(!the_db.conflict(b, a));
    }
}
