/*!
Expressions, the parsed form of a formula string.

An expression is a tree:
- Leaves are [symbols](crate::structures::symbol).
- [Not](Expression::Not) has one child.
- [And](Expression::And) and [Or](Expression::Or) have two or more children.
  Chains of the same operator are flattened, so `(p ∧ q) ∧ r` and `p ∧ (q ∧ r)` are both `And([p, q, r])`.
- [Implies](Expression::Implies) and [Equivalent](Expression::Equivalent) have exactly two children, the antecedent (left) and the consequent (right).

Expressions are built through the associated constructors, which take care of flattening.

```rust
# use cpc_translate::structures::expression::Expression;
let p = Expression::Symbol('P');
let q = Expression::Symbol('Q');
let r = Expression::Symbol('R');

let left = Expression::and(vec![p.clone(), q.clone()]);
let chain = Expression::and(vec![left, r.clone()]);

assert_eq!(chain, Expression::And(vec![p, q, r]));
assert_eq!(chain.to_string(), "(P ∧ Q ∧ R)");
```
*/

use crate::structures::symbol::Symbol;

/// An expression of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Symbol(Symbol),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Implies(Box<Expression>, Box<Expression>),
    Equivalent(Box<Expression>, Box<Expression>),
}

impl Expression {
    #[allow(clippy::should_implement_trait)]
    pub fn not(expression: Expression) -> Self {
        Expression::Not(Box::new(expression))
    }

    /// The conjunction of `conjuncts`, flattening any conjunct which is itself a conjunction.
    ///
    /// A single conjunct is returned as is.
    pub fn and(conjuncts: Vec<Expression>) -> Self {
        let mut flat = Vec::with_capacity(conjuncts.len());
        for conjunct in conjuncts {
            match conjunct {
                Expression::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            1 => flat.remove(0),
            _ => Expression::And(flat),
        }
    }

    /// The disjunction of `disjuncts`, flattening any disjunct which is itself a disjunction.
    ///
    /// A single disjunct is returned as is.
    pub fn or(disjuncts: Vec<Expression>) -> Self {
        let mut flat = Vec::with_capacity(disjuncts.len());
        for disjunct in disjuncts {
            match disjunct {
                Expression::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            1 => flat.remove(0),
            _ => Expression::Or(flat),
        }
    }

    pub fn implies(antecedent: Expression, consequent: Expression) -> Self {
        Expression::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn equivalent(left: Expression, right: Expression) -> Self {
        Expression::Equivalent(Box::new(left), Box::new(right))
    }

    /// The symbols of the expression, in order of first occurrence.
    pub fn symbols(&self) -> Vec<Symbol> {
        fn collect(expression: &Expression, symbols: &mut Vec<Symbol>) {
            match expression {
                Expression::Symbol(symbol) => {
                    if !symbols.contains(symbol) {
                        symbols.push(*symbol)
                    }
                }
                Expression::Not(inner) => collect(inner, symbols),
                Expression::And(items) | Expression::Or(items) => {
                    items.iter().for_each(|item| collect(item, symbols))
                }
                Expression::Implies(left, right) | Expression::Equivalent(left, right) => {
                    collect(left, symbols);
                    collect(right, symbols);
                }
            }
        }

        let mut symbols = Vec::default();
        collect(self, &mut symbols);
        symbols
    }
}

impl std::fmt::Display for Expression {
    /// The expression as a fully parenthesized formula string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join(
            f: &mut std::fmt::Formatter<'_>,
            items: &[Expression],
            operator: char,
        ) -> std::fmt::Result {
            write!(f, "(")?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    write!(f, " {operator} ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, ")")
        }

        match self {
            Expression::Symbol(symbol) => write!(f, "{symbol}"),
            Expression::Not(inner) => write!(f, "¬{inner}"),
            Expression::And(items) => join(f, items, '∧'),
            Expression::Or(items) => join(f, items, '∨'),
            Expression::Implies(left, right) => write!(f, "({left} → {right})"),
            Expression::Equivalent(left, right) => write!(f, "({left} ↔ {right})"),
        }
    }
}
