//! A library for translating short Portuguese sentences into formulas of classical propositional logic (CPC), and back.
//!
//! cpc_translate handles sentences built from a fixed set of connective patterns:
//! - `… se e somente se …` (the biconditional, ↔),
//! - `se … então …` (the conditional, →),
//! - `… mas …` and `… e …` (conjunction, ∧),
//! - `… ou …` (disjunction, ∨),
//! - `não …` and `… não …` (negation, ¬).
//!
//! The patterns are recognised by their text, not by a grammar of Portuguese.
//! So, the library is a teaching aid for the translation exercises of an introductory logic course, rather than a parser of natural language.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! Contexts are built with a [configuration](crate::config) and offer two pipelines, each a pure function of its inputs:
//! - [Sentence to formula](crate::context::Context::sentence_to_formula).
//!   The sentence is [normalized](crate::procedures::normalize), split at its principal [connective](crate::procedures::detect),
//!   broken into [atomic candidates](crate::procedures::segment), each candidate is [assigned](crate::procedures::assign) a symbol,
//!   and finally a fully parenthesized formula is [built](crate::procedures::build).
//! - [Formula to sentence](crate::context::Context::formula_to_sentence).
//!   The formula is [parsed](crate::procedures::parse) to an [expression](crate::structures::expression) and the expression is [rendered](crate::procedures::render) using a [symbol mapping](crate::structures::mapping).
//!
//! The request and response payloads of a translation service are found in [io], and a command line interface is built as the `cpc_cli` binary.
//!
//! # Examples
//!
//! + Translate a conditional.
//!
//! ```rust
//! # use cpc_translate::context::Context;
//! let the_context = Context::default();
//!
//! let report = the_context.sentence_to_formula("Se chover, então a rua fica molhada.").unwrap();
//!
//! assert_eq!(report.formula, "(P → Q)");
//! assert_eq!(report.mapping.text_for('P'), Some("chover"));
//! assert_eq!(report.mapping.text_for('Q'), Some("a rua fica molhada"));
//! ```
//!
//! + Render a formula, with symbols given in either case.
//!
//! ```rust
//! # use cpc_translate::context::Context;
//! # use cpc_translate::structures::mapping::SymbolMapping;
//! let the_context = Context::default();
//!
//! let mapping = SymbolMapping::from_pairs([
//!     ("p", "gatos comem de tudo"),
//!     ("q", "kiki é uma gata"),
//! ]);
//!
//! let report = the_context.formula_to_sentence("p^¬q", &mapping).unwrap();
//! assert_eq!(report.sentence, "gatos comem de tudo e não kiki é uma gata");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a target for each component.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) (as the cli is, when built with the `log` feature):
//! - Logs of how a sentence was split can be found with `RUST_LOG=detection=trace …` or,
//! - Logs of symbol assignment with `RUST_LOG=assign …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
