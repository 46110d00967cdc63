use std::collections::HashMap;

use kiksht_protocol::{EntryId, InflectedForm, LexicalEntry, RawEntry};
use serde::Deserialize;

use crate::error::LexiconError;

/// Outer key -> raw record, in document order.
///
/// The outer key is only used for error reporting; an entry's identity is
/// its `root` field, and the two are allowed to differ.
pub type RawDictionary = serde_json::Map<String, serde_json::Value>;

/// Read-only lookup tables over one dictionary payload.
#[derive(Debug, Clone, Default)]
pub struct LexicalIndex {
    entries: Vec<LexicalEntry>,
    by_root: HashMap<String, EntryId>,
    /// Every (owner, form position) pair: entries in payload order, then
    /// each entry's forms in order. First match wins on lookup.
    forms: Vec<(EntryId, usize)>,
}

impl LexicalIndex {
    /// Builds the index. Any malformed record fails the whole build.
    pub fn build(raw: &RawDictionary) -> Result<Self, LexiconError> {
        let mut entries = Vec::with_capacity(raw.len());
        let mut by_root = HashMap::with_capacity(raw.len());
        let mut forms = Vec::new();

        for (key, value) in raw {
            let record = RawEntry::deserialize(value).map_err(|e| LexiconError::MalformedEntry {
                key: key.clone(),
                reason: e.to_string(),
            })?;

            let id = EntryId::new(entries.len() as u32);
            if by_root.contains_key(&record.root) {
                return Err(LexiconError::MalformedEntry {
                    key: key.clone(),
                    reason: format!("root `{}` is already defined", record.root),
                });
            }

            let entry = record.into_entry(id);
            forms.extend((0..entry.forms.len()).map(|i| (id, i)));
            by_root.insert(entry.root.clone(), id);
            entries.push(entry);
        }

        Ok(Self {
            entries,
            by_root,
            forms,
        })
    }

    /// Parses a JSON document and builds the index from it.
    pub fn from_json(payload: &str) -> Result<Self, LexiconError> {
        let raw: RawDictionary = serde_json::from_str(payload)?;
        Self::build(&raw)
    }

    /// Exact lookup by root surface form.
    pub fn get(&self, root: &str) -> Option<&LexicalEntry> {
        self.by_root.get(root).and_then(|id| self.entry(*id))
    }

    pub fn entry(&self, id: EntryId) -> Option<&LexicalEntry> {
        self.entries.get(id.index())
    }

    /// Root entries in payload order.
    pub fn entries(&self) -> std::slice::Iter<'_, LexicalEntry> {
        self.entries.iter()
    }

    /// The flat `(form, owner)` sequence.
    pub fn forms(&self) -> impl Iterator<Item = (&InflectedForm, &LexicalEntry)> + '_ {
        self.forms.iter().filter_map(move |&(id, i)| {
            let owner = self.entry(id)?;
            owner.forms.get(i).map(|form| (form, owner))
        })
    }

    /// First inflected form (in [`Self::forms`] order) spelled `surface`.
    pub fn find_form(&self, surface: &str) -> Option<(&InflectedForm, &LexicalEntry)> {
        self.forms().find(|(form, _)| form.surface_form == surface)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn form_count(&self) -> usize {
        self.forms.len()
    }
}
