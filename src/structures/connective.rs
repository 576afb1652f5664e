//! Binary connectives, as they are found in sentences.
//!
//! Each connective corresponds to a textual marker in a (normalized) sentence.
//! Two markers, `mas` and `e`, correspond to the same logical operator, conjunction.
//! The distinction is kept so logs note the adversative reading, though both are written `∧`.

/// A binary connective found in a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    /// `… se e somente se …`
    Biconditional,

    /// `se … então …`
    Conditional,

    /// `… mas …`, read as a conjunction.
    Adversative,

    /// `… e …`
    Conjunction,

    /// `… ou …`
    Disjunction,
}

impl Connective {
    /// The symbol used for the connective in a formula string.
    pub fn symbol(&self) -> char {
        match self {
            Self::Biconditional => '↔',
            Self::Conditional => '→',
            Self::Adversative | Self::Conjunction => '∧',
            Self::Disjunction => '∨',
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The marker of a negation, within a normalized sentence.
pub const NEGATION: &str = "não";

/// The symbol used for negation in a formula string.
pub const NEGATION_SYMBOL: char = '¬';
