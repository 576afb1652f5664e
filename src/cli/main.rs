use std::io::Write;

use clap::ArgMatches;

use cpc_translate::{
    context::Context,
    io::Endpoint,
    structures::mapping::SymbolMapping,
    types::err::{self},
};

mod batch;
mod parse;

/// Exit codes of the cli.
mod exit {
    pub const SUCCESS: i32 = 0;
    pub const TRANSLATION_ERROR: i32 = 1;
    pub const INVALID_OPTIONS: i32 = 2;
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let code = match matches.subcommand() {
        Some(("formula", args)) => with_context(args, formula),
        Some(("sentence", args)) => with_context(args, sentence),
        Some(("batch", args)) => with_context(args, batch_replies),
        _ => exit::INVALID_OPTIONS,
    };

    std::process::exit(code)
}

/// Builds a context from the global arguments of a subcommand, and calls `f` with the context.
fn with_context(args: &ArgMatches, f: impl FnOnce(&Context, &ArgMatches) -> i32) -> i32 {
    match parse::config::config_from_args(args) {
        Ok(config) => f(&Context::from_config(config), args),
        Err(note) => {
            eprintln!("c {note}");
            exit::INVALID_OPTIONS
        }
    }
}

fn translation_error(e: err::ErrorKind) -> i32 {
    eprintln!("c Error: {e}");
    exit::TRANSLATION_ERROR
}

fn formula(the_context: &Context, args: &ArgMatches) -> i32 {
    let sentence = match args.get_many::<String>("sentence") {
        Some(words) => words.map(|w| w.as_str()).collect::<Vec<_>>().join(" "),
        None => String::default(),
    };

    match the_context.sentence_to_formula(&sentence) {
        Ok(report) => {
            print!("{report}");
            exit::SUCCESS
        }
        Err(e) => translation_error(e),
    }
}

fn sentence(the_context: &Context, args: &ArgMatches) -> i32 {
    let Some(formula) = args.get_one::<String>("formula") else {
        return exit::INVALID_OPTIONS;
    };

    let mapping = match mapping_from_args(args) {
        Ok(mapping) => mapping,
        Err(note) => {
            eprintln!("c {note}");
            return exit::INVALID_OPTIONS;
        }
    };

    match the_context.formula_to_sentence(formula, &mapping) {
        Ok(report) => {
            print!("{report}");
            exit::SUCCESS
        }
        Err(e) => translation_error(e),
    }
}

/// The mapping given by either `--mapping` or some number of `--map` arguments.
fn mapping_from_args(args: &ArgMatches) -> Result<SymbolMapping, String> {
    if let Some(json) = args.get_one::<String>("mapping") {
        return serde_json::from_str::<SymbolMapping>(json)
            .map_err(|e| format!("Unreadable mapping: {e}"));
    }

    let mut pairs: Vec<(&str, &str)> = Vec::default();
    if let Some(entries) = args.get_many::<String>("map") {
        for entry in entries {
            match entry.split_once('=') {
                Some((symbol, text)) => pairs.push((symbol.trim(), text.trim())),
                None => return Err(format!("Expected SYMBOL=TEXT, found '{entry}'")),
            }
        }
    }
    Ok(SymbolMapping::from_pairs(pairs))
}

fn batch_replies(the_context: &Context, args: &ArgMatches) -> i32 {
    let endpoint = match args.get_one::<String>("endpoint").map(|e| e.parse::<Endpoint>()) {
        Some(Ok(endpoint)) => endpoint,
        _ => return exit::INVALID_OPTIONS,
    };

    let jobs = match args.get_one::<usize>("jobs").copied() {
        Some(0) => {
            eprintln!("c jobs must be at least 1");
            return exit::INVALID_OPTIONS;
        }
        Some(jobs) => jobs,
        None => std::thread::available_parallelism().map_or(1, |n| n.get()),
    };

    let requests = match batch::read_requests(std::io::stdin().lock()) {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("c Error reading requests: {e}");
            return exit::INVALID_OPTIONS;
        }
    };

    let replies = batch::reply_all(the_context, endpoint, requests, jobs);

    let mut stdout = std::io::stdout().lock();
    let mut code = exit::SUCCESS;
    for reply in replies {
        if reply.status != 200 {
            code = exit::TRANSLATION_ERROR;
        }
        if writeln!(stdout, "{}", reply.body).is_err() {
            return exit::TRANSLATION_ERROR;
        }
    }
    code
}
