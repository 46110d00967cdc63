use crate::ids::EntryId;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A usage example: a Kiksht sentence and its English gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(rename = "kiksht", alias = "sourceText")]
    pub source_text: String,
    #[serde(rename = "english", alias = "glossText")]
    pub gloss_text: String,
}

/// An inflected spelling of a root. Owned by exactly one [`LexicalEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectedForm {
    #[serde(rename = "kiksht", alias = "surfaceForm")]
    pub surface_form: String,
    #[serde(rename = "english", alias = "glossText")]
    pub gloss_text: String,
}

/// A dictionary headword. `root` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    pub id: EntryId,
    pub root: String,
    pub part_of_speech: String,
    pub definition: String,
    pub examples: Vec<Example>,
    pub forms: Vec<InflectedForm>,
}

impl LexicalEntry {
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}

/// One record as it appears in the JSON payload.
///
/// `examples` and `forms` may be absent or `null`; both read as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub root: String,
    pub part_of_speech: String,
    pub definition: String,
    #[serde(default)]
    pub examples: Option<Vec<Example>>,
    #[serde(default)]
    pub forms: Option<Vec<InflectedForm>>,
}

impl RawEntry {
    pub fn into_entry(self, id: EntryId) -> LexicalEntry {
        LexicalEntry {
            id,
            root: self.root,
            part_of_speech: self.part_of_speech,
            definition: self.definition,
            examples: self.examples.unwrap_or_default(),
            forms: self.forms.unwrap_or_default(),
        }
    }
}
