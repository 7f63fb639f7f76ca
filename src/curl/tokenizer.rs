use tracing::debug;
use winnow::combinator::{alt, preceded, repeat, terminated};
use winnow::token::{take_till, take_until, take_while};
use winnow::{ModalResult, Parser};

/// Parse a single-quoted span. Double quotes inside it are literal, and a
/// span whose quote is never closed runs to the end of the input.
fn single_quoted<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        '\'',
        alt((
            terminated(take_until(0.., '\''), '\''),
            take_while(0.., |_: char| true),
        )),
    )
    .parse_next(s)
}

/// Parse a double-quoted span, the mirror image of [`single_quoted`].
fn double_quoted<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        '"',
        alt((
            terminated(take_until(0.., '"'), '"'),
            take_while(0.., |_: char| true),
        )),
    )
    .parse_next(s)
}

/// A bare run: anything up to the next space or quote. Tabs and newlines do
/// not split words.
fn bare<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., (' ', '\'', '"')).parse_next(s)
}

/// One word is a sequence of quoted spans and bare runs with the quote
/// characters stripped, so `ab'cd ef'gh` comes out as `abcd efgh`.
fn word(s: &mut &str) -> ModalResult<String> {
    repeat(1.., alt((single_quoted, double_quoted, bare)))
        .fold(String::new, |mut word, piece| {
            word.push_str(piece);
            word
        })
        .parse_next(s)
}

fn spaces<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., ' ').parse_next(s)
}

/// Split a command line into tokens. Spaces inside quotes do not split, the
/// quotes themselves are stripped, and no escape processing is done. Every
/// character belongs to some branch of the grammar, so the scan cannot fail.
pub fn tokenize(command: &str) -> Vec<String> {
    let mut input = command;
    let mut tokens: Vec<String> = preceded(spaces, repeat(0.., terminated(word, spaces)))
        .parse_next(&mut input)
        .unwrap_or_default();
    // A word like `''` accumulates nothing and is not a token.
    tokens.retain(|token| !token.is_empty());
    debug!(count = tokens.len(), "tokenized command");
    tokens
}
