/*!
Segmentation of an operand into atomic candidates.

An operand is split at each *interior* token `e` or `ou`, and the tokens between markers make up a candidate.
Trailing `.` and `,` are stripped from each candidate, and candidates left empty are dropped.

Only `e` and `ou` are markers.
In particular, `mas`, `se … então …`, and `se e somente se` are not, and text containing these is kept as a single candidate.

```rust
# use cpc_translate::procedures::segment::segment;
assert_eq!(
    segment("gatos comem de tudo, e kiki é uma gata ou um gato."),
    vec!["gatos comem de tudo", "kiki é uma gata", "um gato"]
);
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::normalize::strip_trailing_punctuation,
};

/// Tokens at which an operand is split.
const SEGMENT_MARKERS: [&str; 2] = ["e", "ou"];

/// The atomic candidates of `clause`, as detailed in the [module documentation](crate::procedures::segment).
pub fn segment(clause: &str) -> Vec<String> {
    let tokens = clause.split_whitespace().collect::<Vec<_>>();
    let last_index = tokens.len().saturating_sub(1);

    let mut candidates: Vec<String> = Vec::default();
    let mut current: Vec<&str> = Vec::default();

    for (index, token) in tokens.iter().enumerate() {
        let interior = 0 < index && index < last_index;
        match interior && SEGMENT_MARKERS.contains(token) {
            true => flush(&mut current, &mut candidates),
            false => current.push(token),
        }
    }
    flush(&mut current, &mut candidates);

    log::trace!(target: targets::SEGMENT, "{clause:?} segmented to {candidates:?}");
    candidates
}

fn flush(current: &mut Vec<&str>, candidates: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join(" ");
    current.clear();

    let candidate = strip_trailing_punctuation(&joined);
    if !candidate.is_empty() {
        candidates.push(candidate.to_string());
    }
}
