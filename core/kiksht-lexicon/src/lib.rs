pub mod error;
pub mod index;

pub use error::LexiconError;
pub use index::{LexicalIndex, RawDictionary};
