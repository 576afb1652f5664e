//! Key structures, such as symbols, mappings, and expressions.
//!
//! # Other structures without an implementation.
//!
//! ## Formula strings
//!
//! A formula string is the textual form of a formula built from a sentence.
//! Every binary node is wrapped in parentheses, e.g. `((P ∧ Q) → ¬R)`, and so no operator precedence is needed to read the string back.
//! Formula strings are plain [String]s, and are read back through the [parser](crate::procedures::parse) to an [expression].
//!
//! ## Sentences
//!
//! A sentence is some (short) text in Portuguese.
//! Before anything else a sentence is [normalized](crate::procedures::normalize), and all procedures other than normalization expect normalized text.

pub mod connective;
pub mod expression;
pub mod mapping;
pub mod symbol;
