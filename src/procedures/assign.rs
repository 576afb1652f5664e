/*!
Assignment of symbols to atomic candidates.

Symbols are assigned to the *positive form* of a candidate, so `kiki não é uma gata` and `kiki é uma gata` share a symbol.
The positive form of a candidate is found by removing the first embedded ` não `, or else a leading `não `.

Each distinct positive form is given the next unused symbol of the [alphabet](crate::structures::symbol::ALPHABET), and repeated forms are skipped.
Assignment fails, rather than wrap around, once the [symbol limit](crate::config::Config::symbol_limit) is reached.

```rust
# use cpc_translate::context::Context;
let the_context = Context::default();
let mapping = the_context
    .assign(&["chove", "kiki não é uma gata", "não chove"])
    .unwrap();

assert_eq!(mapping.len(), 2);
assert_eq!(mapping.text_for('P'), Some("chove"));
assert_eq!(mapping.text_for('Q'), Some("kiki é uma gata"));
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::normalize::{collapse_whitespace, strip_trailing_punctuation},
    structures::{mapping::SymbolMapping, symbol::nth_symbol},
    types::err::{self},
};

/// The positive form of `candidate`, as detailed in the [module documentation](crate::procedures::assign).
///
/// ```rust
/// # use cpc_translate::procedures::assign::positive_form;
/// assert_eq!(positive_form("Kiki não é uma gata."), "kiki é uma gata");
/// assert_eq!(positive_form("não chove"), "chove");
/// assert_eq!(positive_form("chove"), "chove");
/// ```
pub fn positive_form(candidate: &str) -> String {
    let lower = candidate.to_lowercase();
    let text = strip_trailing_punctuation(&lower);

    if text.contains(" não ") {
        collapse_whitespace(&text.replacen(" não ", " ", 1))
    } else if let Some(rest) = text.strip_prefix("não ") {
        collapse_whitespace(rest)
    } else {
        collapse_whitespace(text)
    }
}

impl Context {
    /// A mapping from symbols to the (distinct) positive forms of `candidates`, in order.
    pub fn assign<S: AsRef<str>>(&self, candidates: &[S]) -> Result<SymbolMapping, err::ErrorKind> {
        let limit = self.config.symbol_limit.value;
        let mut mapping = SymbolMapping::default();

        for candidate in candidates {
            let positive = positive_form(candidate.as_ref());

            if positive.is_empty() {
                continue;
            }

            if let Some(symbol) = mapping.symbol_for(&positive) {
                log::trace!(target: targets::ASSIGN, "{positive:?} already assigned to {symbol}");
                continue;
            }

            let symbol = match mapping.len() < limit {
                true => nth_symbol(mapping.len()),
                false => None,
            };

            match symbol {
                Some(symbol) => {
                    log::debug!(target: targets::ASSIGN, "{symbol} assigned to {positive:?}");
                    mapping.insert(symbol, positive);
                }

                None => {
                    log::info!(target: targets::ASSIGN, "No symbol left for {positive:?}");
                    return Err(err::ErrorKind::AlphabetExhausted(limit));
                }
            }
        }

        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn positive_forms() {
        assert_eq!(positive_form("a rua não está  molhada ,"), "a rua está molhada");
        assert_eq!(positive_form("a não não b"), "a não b");
        assert_eq!(positive_form("não"), "não");
    }

    #[test]
    fn duplicates_skipped() {
        let the_context = Context::default();
        let mapping = the_context
            .assign(&["chove", "venta", "não venta", "chove."])
            .unwrap();
        assert_eq!(
            mapping.iter().collect::<Vec<_>>(),
            vec![('P', "chove"), ('Q', "venta")]
        );
    }

    #[test]
    fn empty_candidates_skipped() {
        let the_context = Context::default();
        let mapping = the_context.assign(&[",", "chove"]).unwrap();
        assert_eq!(mapping.text_for('P'), Some("chove"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn limit() {
        let mut config = Config::default();
        config.symbol_limit.value = 2;
        let the_context = Context::from_config(config);

        assert!(the_context.assign(&["a", "b", "a"]).is_ok());
        assert_eq!(
            the_context.assign(&["a", "b", "c"]),
            Err(err::ErrorKind::AlphabetExhausted(2))
        );
    }

    #[test]
    fn full_alphabet() {
        let the_context = Context::default();
        let candidates = (0..26).map(|i| format!("proposição {i}")).collect::<Vec<_>>();
        let mapping = the_context.assign(&candidates).unwrap();
        assert_eq!(mapping.text_for('O'), Some("proposição 25"));

        let mut too_many = candidates.clone();
        too_many.push("proposição 26".to_string());
        assert_eq!(
            the_context.assign(&too_many),
            Err(err::ErrorKind::AlphabetExhausted(26))
        );
    }
}
