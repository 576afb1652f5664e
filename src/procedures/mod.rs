/*!
The procedures of a translation.

# Sentence to formula

1. [Normalize](normalize) the sentence.
2. [Detect](detect) the principal connective, and split the sentence into a left and right operand.
3. [Segment](segment) each operand into atomic candidates.
4. [Assign](assign) a symbol to the positive form of each (distinct) candidate.
5. [Build](build) the formula, by detecting connectives again, recursively, and looking up each atomic clause in the mapping.

Segmentation and building do not agree on what counts as a connective (segmentation only splits on `e` and `ou`).
So, some sentences lead to a clause which has no symbol, and the translation fails with an [unmapped clause](crate::types::err::ErrorKind::UnmappedClause).

# Formula to sentence

1. [Parse](parse) the formula to an [expression](crate::structures::expression).
2. [Render](render) the expression with a mapping.
*/

pub mod assign;
pub mod build;
pub mod detect;
pub mod normalize;
pub mod parse;
pub mod render;
pub mod segment;
