use clap::ArgMatches;

use cpc_translate::config::{Config, ConfigOption};

/// A config from the (global) arguments, or a note on the first value out of bounds.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, String> {
    let mut the_config = Config::default();

    if let Ok(Some(limit)) = args.try_get_one::<usize>("symbol_limit") {
        set_within_bounds(&mut the_config.symbol_limit, *limit)?
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("nesting_limit") {
        set_within_bounds(&mut the_config.nesting_limit, *limit)?
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_punctuation_split") {
        the_config.detach_punctuation.value = false
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_canonical_negation") {
        the_config.canonical_negation.value = false
    };

    Ok(the_config)
}

fn set_within_bounds(option: &mut ConfigOption<usize>, value: usize) -> Result<(), String> {
    match option.set(value) {
        true => Ok(()),
        false => {
            let (min, max) = option.min_max();
            Err(format!(
                "{} must be between {min} and {max}, not {value}",
                option.name
            ))
        }
    }
}
