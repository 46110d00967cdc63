//! Completion and hover answers over a [`LexicalIndex`].
//!
//! Both resolvers borrow the index; build it once per session and pass it
//! by reference. Reloading a dictionary means building a new index.

pub mod completion;
pub mod hover;
mod render;

pub use completion::{all_completions, CompletionItem, CompletionKind};
pub use hover::{describe, resolve_hover, Hover, HoverKind, Position};

pub use kiksht_lexicon::LexicalIndex;
pub use kiksht_tokenizer::PunctuationTrim;
