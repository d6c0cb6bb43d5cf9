//! The three-valued assignment domain.

/// The value of a symbol in a configuration.
///
/// The bit patterns are load-bearing: the conflict test of
/// [ConfigDB](crate::db::configs::ConfigDB) requires `n`, `m`, and `y` to be exactly
/// these codes, with the high bit of every slot clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Value {
    /// The symbol is disabled.
    No = 0b001,

    /// The symbol is built as a module.
    Module = 0b010,

    /// The symbol is enabled.
    Yes = 0b011,
}

impl Value {
    /// The slot code of the value, widened for packing.
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// The value a slot code represents, if any.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0b001 => Some(Self::No),
            0b010 => Some(Self::Module),
            0b011 => Some(Self::Yes),
            _ => None,
        }
    }

    /// The value written `name` in a configuration file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "n" => Some(Self::No),
            "m" => Some(Self::Module),
            "y" => Some(Self::Yes),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::No => write!(f, "n"),
            Self::Module => write!(f, "m"),
            Self::Yes => write!(f, "y"),
        }
    }
}
