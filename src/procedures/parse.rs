/*!
Parsing a formula string to an [expression](crate::structures::expression).

Whitespace is ignored, and the formula is read case-insensitively.
Each connective may be written in a few ways:

| Connective | Tokens |
|------------|--------|
| Negation | `¬` `!` `~` |
| Conjunction | `^` `∧` `&` |
| Disjunction | `v` `∨` `\|` |
| Conditional | `->` `→` |
| Biconditional | `<->` `↔` |

Symbols are single ASCII letters.
As `v` is also a disjunction, `v` is read as a disjunction when it follows a symbol or a closing parenthesis, and as the symbol `V` otherwise.
So, `pvq` is `P ∨ Q` while `p^v` is `P ∧ V`.

# Grammar

From lowest to highest precedence:

```text
equivalence := implication ( '↔' equivalence )?
implication := disjunction ( '→' implication )?
disjunction := conjunction ( '∨' conjunction )*
conjunction := unary ( '∧' unary )*
unary       := '¬' unary | primary
primary     := symbol | '(' equivalence ')'
```

The biconditional and the conditional split a formula at their first (unparenthesized) occurrence, and so are right-associative.

Parentheses may be nested up to the [nesting limit](crate::config::Config::nesting_limit), past which the formula is [too deep](crate::types::err::ParseError::TooDeep).
Negations and chains of connectives do not count towards the limit.

```rust
# use cpc_translate::context::Context;
# use cpc_translate::structures::expression::Expression;
let the_context = Context::default();

let expression = the_context.parse_formula("p <-> q").unwrap();
assert_eq!(
    expression,
    Expression::equivalent(Expression::Symbol('P'), Expression::Symbol('Q'))
);

let expression = the_context.parse_formula("p -> q -> r").unwrap();
assert_eq!(expression.to_string(), "(P → (Q → R))");
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{expression::Expression, symbol::Symbol},
    types::err::{self, ParseError},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Symbol(Symbol),
    Not,
    And,
    Or,
    Implies,
    Equivalent,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Symbol(symbol) => write!(f, "{symbol}"),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Implies => write!(f, "→"),
            Token::Equivalent => write!(f, "↔"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// The tokens of `formula`, each paired with its position.
fn tokenize(formula: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let characters = formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect::<Vec<_>>();

    let mut tokens: Vec<(Token, usize)> = Vec::with_capacity(characters.len());
    let mut index = 0;

    while index < characters.len() {
        let next = |offset: usize| characters.get(index + offset).copied();

        let (token, width) = match characters[index] {
            '(' => (Token::Open, 1),
            ')' => (Token::Close, 1),
            '¬' | '!' | '~' => (Token::Not, 1),
            '^' | '∧' | '&' => (Token::And, 1),
            '∨' | '|' => (Token::Or, 1),
            '→' => (Token::Implies, 1),
            '↔' => (Token::Equivalent, 1),
            '-' if next(1) == Some('>') => (Token::Implies, 2),
            '<' if next(1) == Some('-') && next(2) == Some('>') => (Token::Equivalent, 3),

            'v' => match tokens.last() {
                Some((Token::Symbol(_), _)) | Some((Token::Close, _)) => (Token::Or, 1),
                _ => (Token::Symbol('V'), 1),
            },

            c if c.is_ascii_alphabetic() => (Token::Symbol(c.to_ascii_uppercase()), 1),

            c => return Err(ParseError::UnknownToken(c, index)),
        };

        tokens.push((token, index));
        index += width;
    }

    Ok(tokens)
}

/// A binary operator, from lowest to highest precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Binary {
    Equivalent,
    Implies,
    Or,
    And,
}

impl Binary {
    fn of(token: Token) -> Option<Self> {
        match token {
            Token::Equivalent => Some(Self::Equivalent),
            Token::Implies => Some(Self::Implies),
            Token::Or => Some(Self::Or),
            Token::And => Some(Self::And),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Equivalent => 0,
            Self::Implies => 1,
            Self::Or => 2,
            Self::And => 3,
        }
    }

    fn right_associative(&self) -> bool {
        matches!(self, Self::Equivalent | Self::Implies)
    }
}

/// Something waiting for an operand.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Open,
    Not,
    Binary(Binary),
}

/// An operator precedence parser over a sequence of tokens.
///
/// Operands and pending operators are kept on stacks, rather than the call stack, so parsing a formula takes constant stack space however deeply the formula nests.
/// The depth is the count of open parentheses.
struct Parser {
    operands: Vec<Expression>,
    pending: Vec<Pending>,
    depth: usize,
    depth_limit: usize,
}

impl Parser {
    fn new(depth_limit: usize) -> Self {
        Parser {
            operands: Vec::default(),
            pending: Vec::default(),
            depth: 0,
            depth_limit,
        }
    }

    fn apply_not(&mut self) -> Result<(), ParseError> {
        let inner = self.operands.pop().ok_or(ParseError::UnexpectedEnd)?;
        self.operands.push(Expression::not(inner));
        Ok(())
    }

    fn apply_binary(&mut self, binary: Binary) -> Result<(), ParseError> {
        let right = self.operands.pop().ok_or(ParseError::UnexpectedEnd)?;
        let left = self.operands.pop().ok_or(ParseError::UnexpectedEnd)?;
        let expression = match binary {
            Binary::Equivalent => Expression::equivalent(left, right),
            Binary::Implies => Expression::implies(left, right),
            Binary::Or => Expression::or(vec![left, right]),
            Binary::And => Expression::and(vec![left, right]),
        };
        self.operands.push(expression);
        Ok(())
    }

    /// Applies each pending operator which binds tighter than `next`.
    fn reduce_before(&mut self, next: Binary) -> Result<(), ParseError> {
        while let Some(pending) = self.pending.last().copied() {
            match pending {
                Pending::Not => {
                    self.pending.pop();
                    self.apply_not()?;
                }

                Pending::Binary(top)
                    if top.precedence() > next.precedence()
                        || (top.precedence() == next.precedence() && !next.right_associative()) =>
                {
                    self.pending.pop();
                    self.apply_binary(top)?;
                }

                _ => break,
            }
        }
        Ok(())
    }

    /// Applies pending operators up to and including the innermost open parenthesis.
    fn close(&mut self) -> Result<(), ParseError> {
        loop {
            match self.pending.pop() {
                Some(Pending::Open) => {
                    self.depth -= 1;
                    return Ok(());
                }
                Some(Pending::Not) => self.apply_not()?,
                Some(Pending::Binary(binary)) => self.apply_binary(binary)?,
                None => return Err(ParseError::UnbalancedParentheses),
            }
        }
    }

    fn parse(mut self, tokens: &[(Token, usize)]) -> Result<Expression, ParseError> {
        let mut expect_operand = true;

        for &(token, at) in tokens {
            match (expect_operand, token) {
                (true, Token::Symbol(symbol)) => {
                    self.operands.push(Expression::Symbol(symbol));
                    expect_operand = false;
                }

                (true, Token::Not) => self.pending.push(Pending::Not),

                (true, Token::Open) => {
                    if self.depth >= self.depth_limit {
                        return Err(ParseError::TooDeep(self.depth_limit));
                    }
                    self.depth += 1;
                    self.pending.push(Pending::Open);
                }

                (true, token) => return Err(ParseError::UnexpectedToken(token.to_string(), at)),

                (false, Token::Close) => self.close()?,

                (false, token) => match Binary::of(token) {
                    Some(binary) => {
                        self.reduce_before(binary)?;
                        self.pending.push(Pending::Binary(binary));
                        expect_operand = true;
                    }

                    None if self.depth == 0 => return Err(ParseError::TrailingInput(at)),

                    None => return Err(ParseError::UnexpectedToken(token.to_string(), at)),
                },
            }
        }

        if expect_operand {
            return Err(ParseError::UnexpectedEnd);
        }

        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::Open => return Err(ParseError::UnbalancedParentheses),
                Pending::Not => self.apply_not()?,
                Pending::Binary(binary) => self.apply_binary(binary)?,
            }
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(expression), true) => Ok(expression),
            _ => Err(ParseError::UnexpectedEnd),
        }
    }
}

impl Context {
    /// The expression of `formula`, as detailed in the [module documentation](crate::procedures::parse).
    ///
    /// Parentheses may be nested up to the [nesting limit](crate::config::Config::nesting_limit).
    pub fn parse_formula(&self, formula: &str) -> Result<Expression, err::ErrorKind> {
        let tokens = tokenize(formula)?;
        let expression = Parser::new(self.config.nesting_limit.value).parse(&tokens)?;

        log::debug!(target: targets::PARSE, "{formula:?} parsed to {expression}");
        Ok(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(s: Symbol) -> Expression {
        Expression::Symbol(s)
    }

    #[test]
    fn token_variants() {
        let ascii = tokenize("~p ^ q v r -> s <-> t").unwrap();
        let unicode = tokenize("¬P∧Q∨R→S↔T").unwrap();
        let ascii_tokens = ascii.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        let unicode_tokens = unicode.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        assert_eq!(ascii_tokens, unicode_tokens);

        let bang = tokenize("!p&q|r").unwrap();
        assert_eq!(
            bang.iter().map(|(t, _)| *t).collect::<Vec<_>>(),
            vec![
                Token::Not,
                Token::Symbol('P'),
                Token::And,
                Token::Symbol('Q'),
                Token::Or,
                Token::Symbol('R')
            ]
        );
    }

    #[test]
    fn contextual_v() {
        let the_context = Context::default();
        assert_eq!(
            the_context.parse_formula("pvq").unwrap(),
            Expression::Or(vec![symbol('P'), symbol('Q')])
        );
        assert_eq!(
            the_context.parse_formula("p^v").unwrap(),
            Expression::And(vec![symbol('P'), symbol('V')])
        );
        assert_eq!(
            the_context.parse_formula("(P ∧ V) v V").unwrap(),
            Expression::Or(vec![
                Expression::And(vec![symbol('P'), symbol('V')]),
                symbol('V')
            ])
        );
    }

    #[test]
    fn precedence() {
        let the_context = Context::default();
        assert_eq!(
            the_context.parse_formula("p ^ q v r").unwrap(),
            Expression::Or(vec![
                Expression::And(vec![symbol('P'), symbol('Q')]),
                symbol('R')
            ])
        );
        assert_eq!(
            the_context.parse_formula("p -> q <-> r").unwrap(),
            Expression::equivalent(
                Expression::implies(symbol('P'), symbol('Q')),
                symbol('R')
            )
        );
        assert_eq!(
            the_context.parse_formula("¬p ^ q").unwrap(),
            Expression::And(vec![Expression::not(symbol('P')), symbol('Q')])
        );
    }

    #[test]
    fn flattening_through_parentheses() {
        let the_context = Context::default();
        assert_eq!(
            the_context.parse_formula("((P ∧ Q) ∧ R)").unwrap(),
            Expression::And(vec![symbol('P'), symbol('Q'), symbol('R')])
        );
    }

    #[test]
    fn malformed() {
        let the_context = Context::default();
        let malformed = |formula: &str| match the_context.parse_formula(formula) {
            Err(err::ErrorKind::MalformedFormula(e)) => e,
            other => panic!("{formula:?} parsed to {other:?}"),
        };

        assert_eq!(malformed("p # q"), ParseError::UnknownToken('#', 1));
        assert_eq!(malformed("p - q"), ParseError::UnknownToken('-', 1));
        assert_eq!(malformed("p^^q"), ParseError::UnexpectedToken("∧".to_string(), 2));
        assert_eq!(malformed("p^"), ParseError::UnexpectedEnd);
        assert_eq!(malformed("(p^q"), ParseError::UnbalancedParentheses);
        assert_eq!(malformed("p^q)"), ParseError::UnbalancedParentheses);
        assert_eq!(malformed("pq"), ParseError::TrailingInput(1));
        assert_eq!(malformed("()"), ParseError::UnexpectedToken(")".to_string(), 1));
        assert_eq!(malformed("(p q)"), ParseError::UnexpectedToken("Q".to_string(), 2));
    }

    #[test]
    fn depth_limit() {
        let mut config = crate::config::Config::default();
        config.nesting_limit.value = 3;
        let the_context = Context::from_config(config);

        assert!(the_context.parse_formula("(((p)))").is_ok());
        assert!(the_context.parse_formula("(p) ^ ((q) ^ (r))").is_ok());
        assert_eq!(
            the_context.parse_formula("((((p))))"),
            Err(err::ErrorKind::MalformedFormula(ParseError::TooDeep(3)))
        );

        // Neither negations nor chains of operators count towards the depth.
        assert!(the_context.parse_formula("¬¬¬¬¬p").is_ok());
        assert!(the_context.parse_formula("p -> q -> r -> s -> t").is_ok());
    }

    #[test]
    fn deepest_nesting_on_a_spawned_thread() {
        let mut config = crate::config::Config::default();
        let limit = config.nesting_limit.max;
        config.nesting_limit.value = limit;
        let the_context = Context::from_config(config);

        let handle = std::thread::spawn(move || {
            let formula = format!("{}p{}", "(¬".repeat(limit), ")".repeat(limit));
            let deepest = the_context.parse_formula(&formula).map(|e| e.symbols());

            let too_deep = the_context.parse_formula(&format!("({formula})"));

            let chain = vec!["p"; 1000].join(" -> ");
            let chain = the_context.parse_formula(&chain).map(|e| e.symbols());

            (deepest, too_deep, chain)
        });

        let (deepest, too_deep, chain) = handle.join().unwrap();
        assert_eq!(deepest, Ok(vec!['P']));
        assert_eq!(
            too_deep,
            Err(err::ErrorKind::MalformedFormula(ParseError::TooDeep(limit)))
        );
        assert_eq!(chain, Ok(vec!['P']));
    }
}
