/*!
Detection of the principal connective of a sentence.

Detection is by textual pattern, and the first pattern found (in the order below) wins:

1. ` se e somente se ` --- a [biconditional](Connective::Biconditional).
2. A sentence beginning `se ` with ` então ` later --- a [conditional](Connective::Conditional).
   The antecedent is the text between `se ` and the first ` então `.
3. ` mas ` --- an [adversative](Connective::Adversative), read as a conjunction.
4. ` e ` --- a [conjunction](Connective::Conjunction).
5. ` ou ` --- a [disjunction](Connective::Disjunction).

In each case the sentence is split at the *first* occurrence of the marker.
No attempt is made to find the dominant connective of a sentence with several connectives, and so `a ou b e c` is read as `(a ou b) e c`.

```rust
# use cpc_translate::procedures::detect::detect;
# use cpc_translate::structures::connective::Connective;
let detection = detect("se chover então a rua fica molhada");

assert_eq!(detection.left, "chover");
assert_eq!(detection.connective, Some(Connective::Conditional));
assert_eq!(detection.right, "a rua fica molhada");
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::normalize::collapse_whitespace,
    structures::connective::Connective,
};

/// The result of detecting the principal connective of a sentence.
///
/// If no connective was found `left` is the (whitespace collapsed) sentence and `right` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub left: String,
    pub connective: Option<Connective>,
    pub right: String,
}

impl Detection {
    fn split(left: &str, connective: Connective, right: &str) -> Self {
        Detection {
            left: left.to_string(),
            connective: Some(connective),
            right: right.to_string(),
        }
    }
}

/// Markers which may appear anywhere in a sentence, in order of priority.
const INFIX_MARKERS: [(&str, Connective); 3] = [
    (" mas ", Connective::Adversative),
    (" e ", Connective::Conjunction),
    (" ou ", Connective::Disjunction),
];

/// Detects the principal connective of `sentence`, as detailed in the [module documentation](crate::procedures::detect).
pub fn detect(sentence: &str) -> Detection {
    let sentence = collapse_whitespace(sentence);

    let detection = 'detection: {
        if let Some((left, right)) = sentence.split_once(" se e somente se ") {
            break 'detection Detection::split(left, Connective::Biconditional, right);
        }

        if let Some(rest) = sentence.strip_prefix("se ") {
            if let Some((left, right)) = rest.split_once(" então ") {
                break 'detection Detection::split(left, Connective::Conditional, right);
            }
        }

        for (marker, connective) in INFIX_MARKERS {
            if let Some((left, right)) = sentence.split_once(marker) {
                break 'detection Detection::split(left, connective, right);
            }
        }

        Detection {
            left: sentence.clone(),
            connective: None,
            right: String::default(),
        }
    };

    match detection.connective {
        Some(connective) => log::trace!(target: targets::DETECTION, "{sentence:?} split at {connective:?} into {:?} and {:?}", detection.left, detection.right),
        None => log::trace!(target: targets::DETECTION, "No connective in {sentence:?}"),
    }

    detection
}
