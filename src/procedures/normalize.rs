/*!
Normalization of a sentence.

A normalized sentence is:
- Trimmed and lower-case.
- Split into tokens separated by a single space.
  If [detach_punctuation](crate::config::Config::detach_punctuation) is set, runs of punctuation at the start or end of a word are tokens of their own, so `chover,` is read as `chover ,`.
- If [canonical_negation](crate::config::Config::canonical_negation) is set, free of variant spellings of `não` (e.g. `nao`, typed without an accent).

```rust
# use cpc_translate::context::Context;
let the_context = Context::default();
assert_eq!(
    the_context.normalize("  Se chover,  então a grama NAO fica seca. "),
    "se chover , então a grama não fica seca ."
);
```

Other procedures collapse whitespace and strip trailing punctuation through the helpers of this module, but do not otherwise normalize.
*/

use std::{collections::HashSet, sync::OnceLock};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::connective::NEGATION,
};

/// Characters split from the start or end of a word.
const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '"', '(', ')', '…'];

/// Spellings of 'não' which are rewritten.
static NEGATION_VARIANTS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn negation_variants() -> &'static HashSet<&'static str> {
    NEGATION_VARIANTS.get_or_init(|| HashSet::from(["nao", "ñao", "n˜ao", "năo", "nâo", "naõ"]))
}

impl Context {
    /// Normalizes `text`, as detailed in the [module documentation](crate::procedures::normalize).
    pub fn normalize(&self, text: &str) -> String {
        let lower = text.trim().to_lowercase();

        let mut tokens: Vec<&str> = Vec::default();
        for word in lower.split_whitespace() {
            match self.config.detach_punctuation.value {
                true => detach_punctuation(word, &mut tokens),
                false => tokens.push(word),
            }
        }

        if self.config.canonical_negation.value {
            let variants = negation_variants();
            for token in tokens.iter_mut() {
                if variants.contains(*token) {
                    *token = NEGATION;
                }
            }
        }

        let normalized = tokens.join(" ");
        log::trace!(target: targets::NORMALIZE, "{text:?} normalized to {normalized:?}");
        normalized
    }
}

/// Pushes `word` to `tokens`, with leading and trailing punctuation as distinct tokens.
fn detach_punctuation<'w>(word: &'w str, tokens: &mut Vec<&'w str>) {
    let without_leading = word.trim_start_matches(PUNCTUATION);
    let core = without_leading.trim_end_matches(PUNCTUATION);

    if core.is_empty() {
        tokens.push(word);
        return;
    }

    let leading = &word[..word.len() - without_leading.len()];
    let trailing = &without_leading[core.len()..];

    for token in [leading, core, trailing] {
        if !token.is_empty() {
            tokens.push(token);
        }
    }
}

/// `text` with each run of whitespace replaced by a single space, and trimmed.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `text` without any trailing `.` or `,`, and trimmed.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim()
        .trim_end_matches(|c: char| c == '.' || c == ',' || c.is_whitespace())
}
