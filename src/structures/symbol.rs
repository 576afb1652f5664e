/*!
Symbols, aka. 'propositional variables'.

A symbol is a single upper-case ASCII letter which stands for the text of an atomic proposition.

Symbols are handed out in a fixed order, given by [ALPHABET].
The order begins at `P`, as is usual in logic textbooks, wraps around to `A` after `Z`, and ends with `O`.

```rust
# use cpc_translate::structures::symbol::{ALPHABET, nth_symbol};
assert_eq!(nth_symbol(0), Some('P'));
assert_eq!(nth_symbol(11), Some('A'));
assert_eq!(nth_symbol(ALPHABET.len()), None);
```

# Notes
- When reading a formula symbols are case-insensitive, and so `p` and `P` are the same symbol.
  Lower-case letters are converted with [canonical_symbol].
*/

/// A symbol, aka. a 'propositional variable'.
pub type Symbol = char;

/// The order in which symbols are assigned to atomic propositions.
pub const ALPHABET: [Symbol; 26] = [
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'I', 'J', 'K', 'L', 'M', 'N', 'O',
];

/// The symbol at `index` in the assignment order, if the alphabet has not been exhausted.
pub fn nth_symbol(index: usize) -> Option<Symbol> {
    ALPHABET.get(index).copied()
}

/// The canonical (upper-case) form of a character, if the character is an ASCII letter.
pub fn canonical_symbol(character: char) -> Option<Symbol> {
    match character.is_ascii_alphabetic() {
        true => Some(character.to_ascii_uppercase()),
        false => None,
    }
}
