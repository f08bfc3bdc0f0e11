//! Defaults layering: built-in < `defaults.ini` < explicit CLI flags.

pub mod ini;
