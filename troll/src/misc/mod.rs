//! Miscellanea.

pub mod log;
