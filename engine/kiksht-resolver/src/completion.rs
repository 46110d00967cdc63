use kiksht_lexicon::LexicalIndex;
use kiksht_protocol::{InflectedForm, LexicalEntry};
use serde::Serialize;

use crate::render::plain_examples;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Root,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// Text inserted by the host.
    pub label: String,
    pub kind: CompletionKind,
    pub detail: String,
    pub documentation: String,
}

/// Every root, then every inflected form, in index order.
///
/// No prefix filtering happens here; the host narrows the list itself.
pub fn all_completions(index: &LexicalIndex) -> Vec<CompletionItem> {
    let mut items = Vec::with_capacity(index.len() + index.form_count());
    items.extend(index.entries().map(root_item));
    items.extend(index.forms().map(|(form, owner)| form_item(form, owner)));
    items
}

fn root_item(entry: &LexicalEntry) -> CompletionItem {
    let mut documentation = format!("{}\n\n", entry.definition);
    plain_examples(&mut documentation, entry);

    CompletionItem {
        label: entry.root.clone(),
        kind: CompletionKind::Root,
        detail: format!("{} [{}]:", entry.root, entry.part_of_speech),
        documentation,
    }
}

fn form_item(form: &InflectedForm, owner: &LexicalEntry) -> CompletionItem {
    // Forms carry no examples; they borrow the owner's.
    let mut documentation = format!(
        "{}\n\nForm of: {} [{}]: {}\n\n",
        form.gloss_text, owner.root, owner.part_of_speech, owner.definition
    );
    plain_examples(&mut documentation, owner);

    CompletionItem {
        label: form.surface_form.clone(),
        kind: CompletionKind::Form,
        detail: format!("{} [{}]:", form.surface_form, owner.part_of_speech),
        documentation,
    }
}
