//! Databases for a merge: interned symbols and packed configurations.

pub mod configs;
pub mod symbol;
