use clap::{value_parser, Arg, ArgAction, Command};

use cpc_translate::config::{self};

pub fn cli() -> Command {
    Command::new("cpc_cli")
        .about("Translates short Portuguese sentences to formulas of classical propositional logic, and back")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)

        .subcommand(Command::new("formula")
            .about("Translate a sentence to a formula.")
            .arg(Arg::new("sentence")
                .value_name("SENTENCE")
                .required(true)
                .trailing_var_arg(true)
                .num_args(1..)
                .help("The sentence to translate, as one or more words.")))

        .subcommand(Command::new("sentence")
            .about("Translate a formula to a sentence.")
            .arg(Arg::new("formula")
                .value_name("FORMULA")
                .required(true)
                .num_args(1)
                .help("The formula to translate.")
                .long_help("The formula to translate.

Connectives may be written as:
  ¬ ! ~     negation
  ^ ∧ &     conjunction
  v ∨ |     disjunction
  -> →      conditional
  <-> ↔     biconditional

A 'v' following a symbol or ')' is a disjunction, and otherwise the symbol V."))

            .arg(Arg::new("map")
                .long("map")
                .short('m')
                .value_name("SYMBOL=TEXT")
                .action(ArgAction::Append)
                .num_args(1)
                .help("The text of a symbol, e.g. --map 'P=chove'. May be repeated."))

            .arg(Arg::new("mapping")
                .long("mapping")
                .value_name("JSON")
                .num_args(1)
                .conflicts_with("map")
                .help("The text of each symbol, as a JSON object, e.g. --mapping '{\"P\": \"chove\"}'.")))

        .subcommand(Command::new("batch")
            .about("Translate JSON requests read from stdin, one per line.")
            .long_about("Translate JSON requests read from stdin, one per line.

Each line is the body of a request to the given endpoint, and a reply is written for each (non-empty) line, in order.")

            .arg(Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .value_name("ENDPOINT")
                .required(true)
                .num_args(1)
                .value_parser(["nl-to-cpc", "cpc-to-nl"])
                .help("The endpoint the requests are sent to."))

            .arg(Arg::new("jobs")
                .long("jobs")
                .short('j')
                .value_name("N")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .help("The count of worker threads.
Default: The available parallelism.")))

        .arg(Arg::new("symbol_limit")
            .long("symbol-limit")
            .value_name("LIMIT")
            .value_parser(value_parser!(usize))
            .global(true)
            .num_args(1)
            .help(format!("The maximum count of distinct atomic propositions in a sentence.
Default: {}", config::defaults::SYMBOL_LIMIT)))

        .arg(Arg::new("nesting_limit")
            .long("nesting-limit")
            .value_name("LIMIT")
            .value_parser(value_parser!(usize))
            .global(true)
            .num_args(1)
            .help(format!("The maximum depth of nested clauses or parentheses, at most {}.
Default: {}", config::defaults::NESTING_LIMIT_MAX, config::defaults::NESTING_LIMIT)))

        .arg(Arg::new("no_punctuation_split")
            .long("no-punctuation-split")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Keep punctuation attached to words when normalizing a sentence."))

        .arg(Arg::new("no_canonical_negation")
            .long("no-canonical-negation")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Keep variant spellings of 'não' (e.g. 'nao') when normalizing a sentence."))
}
