use nom::{bytes::complete::take_till, character::complete::char, IResult};

use crate::token::{Span, Token};

/// Only U+0020 splits runs. Tabs and other whitespace belong to the token.
pub const SEPARATOR: char = ' ';

fn run(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == SEPARATOR)(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    char(SEPARATOR)(input)
}

/// Returns the run containing the character `offset`.
///
/// A run's span includes the position right after its last character, so
/// a cursor resting on the separator that ends a run still selects it. An
/// offset past the final run selects the final run. Empty lines and empty
/// runs (doubled or trailing separators) yield `None`.
pub fn token_at(line: &str, offset: usize) -> Option<Token<'_>> {
    let mut input = line;
    // Characters consumed before the current run, separators included.
    let mut consumed = 0;

    loop {
        let (rest, text) = run(input).ok()?;
        let run_len = text.chars().count();

        if offset <= consumed + run_len || rest.is_empty() {
            if text.is_empty() {
                return None;
            }
            let start = line.len() - input.len();
            return Some(Token {
                span: Span::new(start, start + text.len()),
                text,
            });
        }

        let (next, _) = separator(rest).ok()?;
        consumed += run_len + 1;
        input = next;
    }
}

/// Line `index` of `buffer`, split on `\n` or `\r\n`.
pub fn line_at(buffer: &str, index: usize) -> Option<&str> {
    buffer.lines().nth(index)
}
