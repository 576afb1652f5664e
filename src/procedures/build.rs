/*!
Building a formula string from a sentence and a mapping.

The procedure is recursive, top-down, on the text of a (sub)sentence:

1. Whitespace is collapsed, and trailing `.` and `,` are stripped.
2. A sentence beginning `não ` is negated.
   If the remainder is the text of some symbol the result is `¬<symbol>`, otherwise the remainder is built and wrapped as `¬(<formula>)`.
3. Otherwise, the principal connective is [detected](crate::procedures::detect).
   - If some connective is found the result is `(<left> <connective> <right>)`, with left and right built recursively.
   - If no connective is found the sentence is an atomic clause.
     An embedded ` não ` is removed and the positive form is negated, as with a leading `não `.
     Without negation the clause is looked up verbatim.

An atomic clause which is not the text of any symbol is an [unmapped clause](err::ErrorKind::UnmappedClause).

```rust
# use cpc_translate::context::Context;
# use cpc_translate::structures::mapping::SymbolMapping;
let the_context = Context::default();
let mapping = SymbolMapping::from_pairs([("P", "chove"), ("Q", "a rua está molhada")]);

let formula = the_context.build_formula("se chove então a rua não está molhada", &mapping);
assert_eq!(formula, Ok("(P → ¬Q)".to_string()));
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::{
        detect::detect,
        normalize::{collapse_whitespace, strip_trailing_punctuation},
    },
    structures::{
        connective::NEGATION_SYMBOL,
        mapping::SymbolMapping,
    },
    types::err::{self},
};

impl Context {
    /// The formula string of `sentence`, with symbols from `mapping`.
    pub fn build_formula(
        &self,
        sentence: &str,
        mapping: &SymbolMapping,
    ) -> Result<String, err::ErrorKind> {
        let formula = self.build_nested(sentence, mapping, 0)?;
        log::debug!(target: targets::BUILD, "{sentence:?} built to {formula}");
        Ok(formula)
    }

    fn build_nested(
        &self,
        sentence: &str,
        mapping: &SymbolMapping,
        depth: usize,
    ) -> Result<String, err::ErrorKind> {
        let limit = self.config.nesting_limit.value;
        if depth > limit {
            return Err(err::ErrorKind::NestingExceeded(limit));
        }

        let collapsed = collapse_whitespace(&sentence.to_lowercase());
        let clause = strip_trailing_punctuation(&collapsed);

        if let Some(rest) = clause.strip_prefix("não ") {
            return self.negation(rest.trim(), mapping, depth);
        }

        let detection = detect(clause);
        match detection.connective {
            Some(connective) => {
                let left = self.build_nested(&detection.left, mapping, depth + 1)?;
                let right = self.build_nested(&detection.right, mapping, depth + 1)?;
                Ok(format!("({left} {connective} {right})"))
            }

            None if clause.contains(" não ") => {
                let positive = collapse_whitespace(&clause.replacen(" não ", " ", 1));
                self.negation(&positive, mapping, depth)
            }

            None => match mapping.symbol_for(clause) {
                Some(symbol) => Ok(symbol.to_string()),
                None => {
                    log::info!(target: targets::BUILD, "No symbol for {clause:?}");
                    Err(err::ErrorKind::UnmappedClause(clause.to_string()))
                }
            },
        }
    }

    /// The negation of `positive`, as a negated symbol if `positive` is mapped and otherwise a negated formula.
    fn negation(
        &self,
        positive: &str,
        mapping: &SymbolMapping,
        depth: usize,
    ) -> Result<String, err::ErrorKind> {
        match mapping.symbol_for(positive) {
            Some(symbol) => Ok(format!("{NEGATION_SYMBOL}{symbol}")),
            None => {
                let inner = self.build_nested(positive, mapping, depth + 1)?;
                Ok(format!("{NEGATION_SYMBOL}({inner})"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn mapping() -> SymbolMapping {
        SymbolMapping::from_pairs([("P", "chove"), ("Q", "venta"), ("R", "faz frio")])
    }

    #[test]
    fn atomic() {
        let the_context = Context::default();
        assert_eq!(the_context.build_formula("chove.", &mapping()), Ok("P".to_string()));
        assert_eq!(the_context.build_formula("não venta", &mapping()), Ok("¬Q".to_string()));
        assert_eq!(the_context.build_formula("faz não frio", &mapping()), Ok("¬R".to_string()));
    }

    #[test]
    fn nested() {
        let the_context = Context::default();
        assert_eq!(
            the_context.build_formula("chove e venta ou faz frio", &mapping()),
            Ok("(P ∧ (Q ∨ R))".to_string())
        );
        assert_eq!(
            the_context.build_formula("se chove e venta então não faz frio", &mapping()),
            Ok("((P ∧ Q) → ¬R)".to_string())
        );
    }

    #[test]
    fn negated_compound() {
        let the_context = Context::default();
        assert_eq!(
            the_context.build_formula("não chove e venta", &mapping()),
            Ok("¬((P ∧ Q))".to_string())
        );
    }

    #[test]
    fn unmapped() {
        let the_context = Context::default();
        assert_eq!(
            the_context.build_formula("chove e neva", &mapping()),
            Err(err::ErrorKind::UnmappedClause("neva".to_string()))
        );
    }

    #[test]
    fn nesting_limit() {
        let mut config = Config::default();
        config.nesting_limit.value = 1;
        let the_context = Context::from_config(config);

        assert!(the_context.build_formula("chove e venta", &mapping()).is_ok());
        assert_eq!(
            the_context.build_formula("chove e venta e faz frio", &mapping()),
            Err(err::ErrorKind::NestingExceeded(1))
        );
    }
}
