//! Translation mapping consumed from the translation collaborator.

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Mapping from region id to translated text.
///
/// Ids missing from the mapping are treated as empty translated text, which
/// the fit search records as a skipped region rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationMap {
    map: FxHashMap<String, String>,
}

/// Accepted on-disk shapes: either a bare id-to-text object or the object
/// wrapped under a `translations` key, as the translation service emits it.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranslationFile {
    Wrapped {
        translations: FxHashMap<String, String>,
    },
    Bare(FxHashMap<String, String>),
}

impl<'de> Deserialize<'de> for TranslationMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let file = TranslationFile::deserialize(deserializer)?;
        let map = match file {
            TranslationFile::Wrapped { translations } => translations,
            TranslationFile::Bare(map) => map,
        };
        Ok(Self { map })
    }
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from (id, text) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.map.insert(id.into(), text.into());
    }

    /// Looks up the translated text for a region id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
