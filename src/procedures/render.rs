/*!
Rendering an [expression](crate::structures::expression) as a sentence.

Each node of the expression is written with a fixed template:

| Expression | Sentence |
|------------|----------|
| `P` | the text of `P` |
| `¬a` | `não <a>` |
| `a ∧ b ∧ …` | `<a> e <b> e …` |
| `a ∨ b ∨ …` | `<a> ou <b> ou …` |
| `a → b` | `Se <a>, então <b>` |
| `a ↔ b` | `<a> se e somente se <b>` |

Rendering never fails.
A symbol without text in the mapping is written as the (lower-case) letter, as it would appear in the lower-cased formula.

No parentheses are written, and so a rendered sentence may be ambiguous where the formula was not.

```rust
# use cpc_translate::procedures::render::render;
# use cpc_translate::structures::{expression::Expression, mapping::SymbolMapping};
let mapping = SymbolMapping::from_pairs([("P", "chove")]);
let expression = Expression::implies(Expression::Symbol('P'), Expression::Symbol('Q'));

assert_eq!(render(&expression, &mapping), "Se chove, então q");
```
*/

use crate::structures::{connective::NEGATION, expression::Expression, mapping::SymbolMapping};

/// The sentence of `expression`, with the text of each symbol taken from `mapping`.
pub fn render(expression: &Expression, mapping: &SymbolMapping) -> String {
    match expression {
        Expression::Symbol(symbol) => match mapping.text_for(*symbol) {
            Some(text) => text.to_string(),
            None => symbol.to_ascii_lowercase().to_string(),
        },

        Expression::Not(inner) => format!("{NEGATION} {}", render(inner, mapping)),

        Expression::And(items) => join(items, " e ", mapping),

        Expression::Or(items) => join(items, " ou ", mapping),

        Expression::Implies(antecedent, consequent) => format!(
            "Se {}, então {}",
            render(antecedent, mapping),
            render(consequent, mapping)
        ),

        Expression::Equivalent(left, right) => format!(
            "{} se e somente se {}",
            render(left, mapping),
            render(right, mapping)
        ),
    }
}

fn join(items: &[Expression], separator: &str, mapping: &SymbolMapping) -> String {
    items
        .iter()
        .map(|item| render(item, mapping))
        .collect::<Vec<_>>()
        .join(separator)
}
