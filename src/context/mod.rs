/*!
The context --- a configured translator, through which both pipelines are called.

A context holds a [configuration](crate::config) and nothing else.
Every translation is a pure function of the configuration and the inputs, and so a context may be shared by reference across threads.

# Example
```rust
# use cpc_translate::context::Context;
# use cpc_translate::config::Config;
let mut config = Config::default();
config.symbol_limit.value = 2;

let the_context = Context::from_config(config);

let report = the_context.sentence_to_formula("kiki não é uma gata").unwrap();
assert_eq!(report.formula, "¬P");
assert_eq!(report.mapping.text_for('P'), Some("kiki é uma gata"));

let report = the_context
    .formula_to_sentence("~p", &report.mapping)
    .unwrap();
assert_eq!(report.sentence, "não kiki é uma gata");

assert!(the_context.sentence_to_formula("a e b e c").is_err());
```
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{detect::detect, render::render, segment::segment},
    reports::{FormulaReport, SentenceReport},
    structures::{expression::Expression, mapping::SymbolMapping},
    types::err::{self},
};

/// A configured translator.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The sentence of `expression`, as [rendered](crate::procedures::render) with `mapping`.
    ///
    /// Symbols without text are written as their lower-case letter.
    pub fn render(&self, expression: &Expression, mapping: &SymbolMapping) -> String {
        let unmapped = expression
            .symbols()
            .into_iter()
            .filter(|symbol| mapping.text_for(*symbol).is_none())
            .collect::<Vec<_>>();
        if !unmapped.is_empty() {
            log::info!(target: targets::RENDER, "No text for {unmapped:?}");
        }

        render(expression, mapping)
    }

    /// Translates `sentence` to a formula, together with the mapping of symbols used.
    ///
    /// The candidates for symbols are found from the principal connective of the sentence only.
    /// Building the formula detects connectives recursively, and fails with an [unmapped clause](err::ErrorKind::UnmappedClause) if some clause found is not a candidate.
    pub fn sentence_to_formula(&self, sentence: &str) -> Result<SentenceReport, err::ErrorKind> {
        if sentence.trim().is_empty() {
            return Err(err::InputError::EmptySentence.into());
        }

        let normalized = self.normalize(sentence);
        let detection = detect(&normalized);

        let candidates = match detection.connective {
            None => vec![normalized.clone()],
            Some(_) => {
                let mut candidates = segment(&detection.left);
                candidates.extend(segment(&detection.right));
                candidates
            }
        };

        let mapping = self.assign(&candidates)?;
        let formula = self.build_formula(&normalized, &mapping)?;

        Ok(SentenceReport {
            original: sentence.to_string(),
            normalized,
            formula,
            mapping,
        })
    }

    /// Translates `formula` to a sentence, with the text of each symbol taken from `mapping`.
    pub fn formula_to_sentence(
        &self,
        formula: &str,
        mapping: &SymbolMapping,
    ) -> Result<FormulaReport, err::ErrorKind> {
        if formula.trim().is_empty() {
            return Err(err::InputError::EmptyFormula.into());
        }
        if mapping.is_empty() {
            return Err(err::InputError::EmptyMapping.into());
        }

        let expression = self.parse_formula(formula)?;
        let sentence = self.render(&expression, mapping);

        Ok(FormulaReport {
            formula: formula.to_string(),
            mapping: mapping.clone(),
            expression,
            sentence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_across_threads() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<Context>();
    }

    #[test]
    fn empty_inputs() {
        let the_context = Context::default();
        assert_eq!(
            the_context.sentence_to_formula(" \n "),
            Err(err::ErrorKind::InvalidInput(err::InputError::EmptySentence))
        );

        let mapping = SymbolMapping::from_pairs([("P", "chove")]);
        assert_eq!(
            the_context.formula_to_sentence("", &mapping),
            Err(err::ErrorKind::InvalidInput(err::InputError::EmptyFormula))
        );
        assert_eq!(
            the_context.formula_to_sentence("p", &SymbolMapping::default()),
            Err(err::ErrorKind::InvalidInput(err::InputError::EmptyMapping))
        );
    }

    #[test]
    fn unmapped_clause() {
        // 'se … então …' is not a segmentation marker, so the right operand is a single candidate.
        let the_context = Context::default();
        assert_eq!(
            the_context.sentence_to_formula("chove e se venta então faz frio"),
            Err(err::ErrorKind::UnmappedClause("venta".to_string()))
        );
    }

    #[test]
    fn render_with_partial_mapping() {
        let the_context = Context::default();
        let mapping = SymbolMapping::from_pairs([("Q", "venta")]);
        let expression = the_context.parse_formula("(p ^ q) -> r").unwrap();

        assert_eq!(expression.symbols(), vec!['P', 'Q', 'R']);
        assert_eq!(
            the_context.render(&expression, &mapping),
            "Se p e venta, então r"
        );
    }
}
