/*!
Configuration of a context.

All configuration for a context is contained within [Config], and a context never changes its configuration.
Each option records its name and bounds, so front ends (e.g. the cli) can check a requested value before use.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::structures::symbol::ALPHABET;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum count of distinct atomic propositions in a sentence.
    pub symbol_limit: ConfigOption<usize>,

    /// The maximum depth of nested clauses when building a formula, or of nested parentheses when parsing a formula.
    ///
    /// A built formula nests parentheses no deeper than its clauses, so whatever is built may be parsed back under the same limit.
    pub nesting_limit: ConfigOption<usize>,

    /// Split leading and trailing punctuation from words when normalizing a sentence.
    pub detach_punctuation: ConfigOption<bool>,

    /// Rewrite variant spellings of 'não' when normalizing a sentence.
    pub canonical_negation: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symbol_limit: ConfigOption {
                name: "symbol_limit",
                min: 1,
                max: ALPHABET.len(),
                value: defaults::SYMBOL_LIMIT,
            },

            nesting_limit: ConfigOption {
                name: "nesting_limit",
                min: 1,
                max: defaults::NESTING_LIMIT_MAX,
                value: defaults::NESTING_LIMIT,
            },

            detach_punctuation: ConfigOption {
                name: "detach_punctuation",
                min: false,
                max: true,
                value: defaults::DETACH_PUNCTUATION,
            },

            canonical_negation: ConfigOption {
                name: "canonical_negation",
                min: false,
                max: true,
                value: defaults::CANONICAL_NEGATION,
            },
        }
    }
}
