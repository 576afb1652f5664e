/*!
A mapping from [symbols](crate::structures::symbol) to the text of atomic propositions.

Mappings are ordered, and the order is the order in which entries were made.
When built by the [assigner](crate::procedures::assign) this is the order of the [alphabet](crate::structures::symbol::ALPHABET).

Two invariants are kept by the assigner, though not by the mapping itself:
- No two symbols map to the same text.
- Texts are the *positive* form of a proposition, i.e. `kiki é uma gata` rather than `kiki não é uma gata`.

Mappings given by a caller are built with [from_pairs](SymbolMapping::from_pairs), which reads keys case-insensitively.

```rust
# use cpc_translate::structures::mapping::SymbolMapping;
let mapping = SymbolMapping::from_pairs([("p", "chove"), ("Q", "venta"), ("pq", "ignored")]);

assert_eq!(mapping.len(), 2);
assert_eq!(mapping.text_for('p'), Some("chove"));
assert_eq!(mapping.symbol_for("venta"), Some('Q'));
```

# Serialization
A mapping is (de)serialized as a JSON object from symbols to texts, e.g. `{"P": "chove", "Q": "venta"}`, preserving order.
*/

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{
    misc::log::targets::{self},
    structures::symbol::{canonical_symbol, Symbol},
};

/// An ordered mapping from symbols to the text of atomic propositions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolMapping {
    entries: Vec<(Symbol, String)>,
}

impl SymbolMapping {
    /// A count of entries in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries of the mapping, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.entries
            .iter()
            .map(|(symbol, text)| (*symbol, text.as_str()))
    }

    /// The text of a symbol, if the symbol is mapped.
    ///
    /// Symbols are case-insensitive.
    pub fn text_for(&self, symbol: Symbol) -> Option<&str> {
        let symbol = canonical_symbol(symbol)?;
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, text)| text.as_str())
    }

    /// The first symbol mapped to exactly `text`, if any.
    pub fn symbol_for(&self, text: &str) -> Option<Symbol> {
        self.entries
            .iter()
            .find(|(_, t)| t == text)
            .map(|(symbol, _)| *symbol)
    }

    /// Maps `symbol` to `text`, replacing any previous text of the symbol.
    ///
    /// Returns false, and does nothing, if `symbol` is not an ASCII letter.
    pub fn insert(&mut self, symbol: Symbol, text: impl Into<String>) -> bool {
        let Some(symbol) = canonical_symbol(symbol) else {
            return false;
        };
        let text = text.into();
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((symbol, text)),
        }
        true
    }

    /// A mapping from (key, text) pairs, as given by some caller.
    ///
    /// - Keys are read case-insensitively, and a key given in upper-case takes priority over the same key in lower-case.
    /// - Keys which are not a single ASCII letter are skipped (with a warning).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut mapping = SymbolMapping::default();
        // Whether the key of each entry was given in upper-case.
        let mut upper_keys: Vec<bool> = Vec::default();

        for (key, text) in pairs {
            let key = key.as_ref();
            let mut characters = key.chars();
            let symbol = match (characters.next().and_then(canonical_symbol), characters.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    log::warn!(target: targets::PAYLOAD, "Skipped mapping key {key:?}");
                    continue;
                }
            };
            let upper = key.starts_with(|c: char| c.is_ascii_uppercase());

            match mapping.entries.iter().position(|(s, _)| *s == symbol) {
                Some(index) => {
                    if upper || !upper_keys[index] {
                        mapping.entries[index].1 = text.into();
                        upper_keys[index] = upper;
                    }
                }
                None => {
                    mapping.entries.push((symbol, text.into()));
                    upper_keys.push(upper);
                }
            }
        }

        mapping
    }
}

impl std::fmt::Display for SymbolMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (symbol, text)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{symbol}: {text}")?;
        }
        Ok(())
    }
}

impl Serialize for SymbolMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, text) in &self.entries {
            map.serialize_entry(&symbol.to_string(), text)?;
        }
        map.end()
    }
}

struct MappingVisitor;

impl<'de> Visitor<'de> for MappingVisitor {
    type Value = SymbolMapping;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an object from symbols to text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs: Vec<(String, String)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(pair) = access.next_entry::<String, String>()? {
            pairs.push(pair);
        }
        Ok(SymbolMapping::from_pairs(pairs))
    }
}

impl<'de> Deserialize<'de> for SymbolMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MappingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_priority() {
        let mapping = SymbolMapping::from_pairs([("P", "upper"), ("p", "lower")]);
        assert_eq!(mapping.text_for('P'), Some("upper"));

        let mapping = SymbolMapping::from_pairs([("p", "lower"), ("P", "upper")]);
        assert_eq!(mapping.text_for('p'), Some("upper"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn skipped_keys() {
        let mapping = SymbolMapping::from_pairs([("", "a"), ("pq", "b"), ("1", "c"), ("ç", "d")]);
        assert!(mapping.is_empty());
    }

    #[test]
    fn insert_replaces() {
        let mut mapping = SymbolMapping::default();
        assert!(mapping.insert('r', "chove"));
        assert!(mapping.insert('R', "venta"));
        assert!(!mapping.insert('%', "nada"));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.text_for('R'), Some("venta"));
    }

    #[test]
    fn json_order() {
        let mapping = SymbolMapping::from_pairs([("Q", "b"), ("P", "a")]);
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"{"Q":"b","P":"a"}"#);

        let read: SymbolMapping = serde_json::from_str(r#"{"q": "b", "p": "a"}"#).unwrap();
        assert_eq!(read, mapping);
    }

    #[test]
    fn json_requires_text() {
        assert!(serde_json::from_str::<SymbolMapping>(r#"{"p": 1}"#).is_err());
        assert!(serde_json::from_str::<SymbolMapping>(r#"["p"]"#).is_err());
    }
}
