/// The structured (`application/occi+json`) request parser.
pub mod json;
/// The header (`text/occi`) request parser.
pub mod text;

pub use json::parse_body;
pub use text::parse_headers;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

// Splits `text` on `separator`, ignoring separators placed inside
// double-quoted strings. Inside quotes, a backslash escapes the next
// character.
pub(crate) fn split_unquoted(text: &str, separator: char) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (index, character) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if in_quotes && character == '\\' {
            escaped = true;
        } else if character == '"' {
            in_quotes = !in_quotes;
        } else if character == separator && !in_quotes {
            fragments.push(&text[start..index]);
            start = index + character.len_utf8();
        }
    }
    fragments.push(&text[start..]);

    fragments
}

// Trims a value and removes its surrounding double quotes, if any,
// resolving the escaped characters between them.
pub(crate) fn unquote(value: &str) -> Cow<'_, str> {
    let value = value.trim();
    match value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) if inner.contains('\\') => Cow::Owned(unescape(inner)),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(value),
    }
}

// Escapes the double quotes and backslashes of a value placed between
// double quotes.
pub(crate) fn escape_quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\\']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    for character in value.chars() {
        if matches!(character, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    Cow::Owned(escaped)
}

fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut characters = text.chars();
    while let Some(character) = characters.next() {
        match character {
            '\\' => unescaped.push(characters.next().unwrap_or(character)),
            character => unescaped.push(character),
        }
    }
    unescaped
}
