//! Default values of configuration options.

pub const SYMBOL_LIMIT: usize = 26;

pub const NESTING_LIMIT: usize = 128;

/// Formulas are built and written recursively, so nesting must fit on the stack of a spawned thread.
pub const NESTING_LIMIT_MAX: usize = 512;

pub const DETACH_PUNCTUATION: bool = true;

pub const CANONICAL_NEGATION: bool = true;
