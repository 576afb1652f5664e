/*!
Reports of a translation.

Each pipeline of a [context](crate::context::Context) returns a report, which keeps the input alongside the result.

Reports are written (through [Display](std::fmt::Display)) as lines with a one-character prefix:
- `c` comments, e.g. the normalized sentence.
- `f` a formula.
- `m` a single entry of a mapping.
- `s` a sentence.
*/

use crate::structures::{expression::Expression, mapping::SymbolMapping};

/// A report of translating a sentence to a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceReport {
    /// The sentence, as given.
    pub original: String,

    /// The sentence, after [normalization](crate::procedures::normalize).
    pub normalized: String,

    /// The formula of the sentence.
    pub formula: String,

    /// The symbols used in the formula, together with their text.
    pub mapping: SymbolMapping,
}

impl std::fmt::Display for SentenceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c normalized {}", self.normalized)?;
        writeln!(f, "f {}", self.formula)?;
        for (symbol, text) in self.mapping.iter() {
            writeln!(f, "m {symbol} {text}")?;
        }
        Ok(())
    }
}

/// A report of translating a formula to a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaReport {
    /// The formula, as given.
    pub formula: String,

    /// The mapping used to render the formula.
    pub mapping: SymbolMapping,

    /// The parsed formula.
    pub expression: Expression,

    pub sentence: String,
}

impl std::fmt::Display for FormulaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "s {}", self.sentence)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;

    #[test]
    fn sentence_lines() {
        let the_context = Context::default();
        let report = the_context.sentence_to_formula("Chove ou venta.").unwrap();
        assert_eq!(
            report.to_string(),
            "c normalized chove ou venta .\nf (P ∨ Q)\nm P chove\nm Q venta\n"
        );
    }
}
