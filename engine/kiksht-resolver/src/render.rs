use kiksht_protocol::LexicalEntry;

/// `Examples:` block as shown in completion documentation.
pub(crate) fn plain_examples(out: &mut String, entry: &LexicalEntry) {
    if !entry.has_examples() {
        return;
    }
    out.push_str("Examples:\n");
    for ex in &entry.examples {
        out.push_str(&format!("* {} | {}\n", ex.source_text, ex.gloss_text));
    }
}

/// `Examples:` block as shown in hovers, source text in bold italics.
pub(crate) fn markdown_examples(out: &mut String, entry: &LexicalEntry) {
    if !entry.has_examples() {
        return;
    }
    out.push_str("Examples:\n");
    for ex in &entry.examples {
        out.push_str(&format!("* **_{}_** | {}\n", ex.source_text, ex.gloss_text));
    }
}
