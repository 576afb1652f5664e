//! Error types used in the library.
//!
//! - Input errors are the caller's to fix --- e.g. an empty sentence, or a payload which is not JSON.
//! - Other errors note some limit of the translation --- e.g. a clause which could not be matched to a symbol, or a formula which could not be read.
//!
//! Every error has a human-readable message through [Display](std::fmt::Display).
//! Throughout the library err::{self} is used to prefix use of the types with `err::`, e.g. `err::ErrorKind`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Some required input was empty or missing.
    InvalidInput(InputError),

    /// An atomic clause reached while building a formula has no symbol in the mapping.
    ///
    /// This happens when segmentation and negation stripping disagree on the text of a clause, e.g. as `mas` is a connective but not a segmentation marker.
    UnmappedClause(String),

    /// A formula could not be parsed.
    MalformedFormula(ParseError),

    /// More distinct atomic propositions than the (configured) count of symbols.
    AlphabetExhausted(usize),

    /// A sentence nested deeper than the (configured) limit.
    NestingExceeded(usize),
}

impl ErrorKind {
    /// Whether the error is due to the input, rather than a limit of translation.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ErrorKind::InvalidInput(_))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput(e) => write!(f, "{e}"),
            ErrorKind::UnmappedClause(clause) => write!(f, "unmapped atomic clause: {clause}"),
            ErrorKind::MalformedFormula(e) => write!(f, "malformed formula: {e}"),
            ErrorKind::AlphabetExhausted(limit) => write!(
                f,
                "alphabet exhausted: more than {limit} distinct atomic propositions"
            ),
            ErrorKind::NestingExceeded(limit) => write!(f, "nesting limit of {limit} exceeded"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors with input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    /// An empty sentence.
    EmptySentence,

    /// An empty formula.
    EmptyFormula,

    /// An empty (or missing) symbol mapping.
    EmptyMapping,

    /// A payload which could not be read, with details from the reader.
    Json(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::EmptySentence => write!(f, "empty input"),
            InputError::EmptyFormula => write!(f, "empty formula"),
            InputError::EmptyMapping => write!(f, "empty or missing mapping"),
            InputError::Json(detail) => write!(f, "invalid request: {detail}"),
        }
    }
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::InvalidInput(e)
    }
}

/// Errors during parsing.
///
/// Positions count characters of the formula after whitespace has been removed, from zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character which is not part of any token.
    UnknownToken(char, usize),

    /// A token which may not appear where it was found.
    UnexpectedToken(String, usize),

    /// The formula ended while some operand was expected.
    UnexpectedEnd,

    /// A parenthesis was opened but not closed, or closed but never opened.
    UnbalancedParentheses,

    /// Tokens following a complete formula.
    TrailingInput(usize),

    /// Parentheses nested deeper than the (configured) limit.
    TooDeep(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownToken(c, at) => write!(f, "unknown token '{c}' at position {at}"),
            ParseError::UnexpectedToken(t, at) => {
                write!(f, "unexpected token '{t}' at position {at}")
            }
            ParseError::UnexpectedEnd => write!(f, "unexpected end of formula"),
            ParseError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            ParseError::TrailingInput(at) => write!(f, "unexpected input at position {at}"),
            ParseError::TooDeep(limit) => write!(f, "nesting deeper than {limit}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::MalformedFormula(e)
    }
}
