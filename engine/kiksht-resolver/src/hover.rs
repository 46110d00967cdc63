use kiksht_lexicon::LexicalIndex;
use kiksht_protocol::{InflectedForm, LexicalEntry};
use kiksht_tokenizer::{line_at, token_at, PunctuationTrim, Span};

use crate::render::markdown_examples;

/// Zero-based cursor location; `character` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Root,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    /// Markdown shown by the host.
    pub contents: String,
    pub kind: HoverKind,
    /// Byte span of the raw token in its line.
    pub range: Option<Span>,
}

/// Describes the word under `position`, or `None` when there is nothing
/// there or the word is not in the dictionary.
pub fn resolve_hover(
    index: &LexicalIndex,
    buffer: &str,
    position: Position,
    trim: &PunctuationTrim,
) -> Option<Hover> {
    let line = line_at(buffer, position.line)?;
    let token = token_at(line, position.character)?;
    let word = trim.strip(token.text);

    let mut hover = describe(index, &word)?;
    hover.range = Some(token.span);
    Some(hover)
}

/// Looks up an already-cleaned word. A root always beats an inflected form
/// with the same spelling; among forms the first in index order wins.
pub fn describe(index: &LexicalIndex, word: &str) -> Option<Hover> {
    if let Some(entry) = index.get(word) {
        return Some(Hover {
            contents: render_root(entry),
            kind: HoverKind::Root,
            range: None,
        });
    }

    index.find_form(word).map(|(form, owner)| Hover {
        contents: render_form(form, owner),
        kind: HoverKind::Form,
        range: None,
    })
}

fn render_root(entry: &LexicalEntry) -> String {
    let mut out = format!(
        "**{}** [_{}_]: {}\n\n",
        entry.root, entry.part_of_speech, entry.definition
    );
    markdown_examples(&mut out, entry);
    out
}

fn render_form(form: &InflectedForm, owner: &LexicalEntry) -> String {
    let mut out = format!(
        "**{}** [_{}_]: {}\n\nForm of: **{}** [_{}_]: {}\n\n",
        form.surface_form,
        owner.part_of_speech,
        form.gloss_text,
        owner.root,
        owner.part_of_speech,
        owner.definition
    );
    markdown_examples(&mut out, owner);
    out
}
