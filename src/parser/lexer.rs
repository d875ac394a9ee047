//! Lexer for SGR markup.
//!
//! Converts input text into a stream of tokens: literal text runs, opening
//! tags with their attribute lists, and closing tags.

use crate::error::MarkupError;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag: `<u>` or `<u type=wavy>`.
    Open {
        name: &'a str,
        /// Attributes in document order; `None` for a valueless attribute.
        attrs: Vec<(&'a str, Option<&'a str>)>,
    },
    /// Closing tag: `</u>`.
    Close(&'a str),
}

/// Lexer for SGR markup text.
///
/// Tag and attribute names are borrowed from the input; no allocation
/// happens for text runs. Attribute values may be bare (`type=wavy`) or
/// quoted (`type="wavy"`), and a `>` inside a quoted value does not
/// terminate the tag.
///
/// # Examples
///
/// ```
/// use sgrml::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("<b>Hello</b>")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Text("Hello"));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume text until the next tag or end of input.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c == '<' {
                break;
            }
            self.advance();
        }

        (self.pos > start).then(|| &self.input[start..self.pos])
    }

    /// Consume a tag (including the angle brackets).
    fn consume_tag(&mut self) -> Result<Token<'a>, MarkupError> {
        let tag_start = self.pos;
        self.advance(); // consume '<'

        let closing = self.peek() == Some('/');
        if closing {
            self.advance();
        }

        // Scan to the terminating '>', tracking quoted attribute values so a
        // '>' inside quotes stays part of the value.
        let body_start = self.pos;
        let mut quote: Option<char> = None;

        loop {
            match self.peek() {
                Some(c) if quote == Some(c) => {
                    quote = None;
                    self.advance();
                }
                Some(c @ ('"' | '\'')) if quote.is_none() => {
                    quote = Some(c);
                    self.advance();
                }
                Some('>') if quote.is_none() => break,
                Some(_) => {
                    self.advance();
                }
                None if quote.is_some() => {
                    return Err(MarkupError::UnterminatedValue(tag_start));
                }
                None => return Err(MarkupError::UnclosedTag(tag_start)),
            }
        }

        let body = &self.input[body_start..self.pos];
        self.advance(); // consume '>'

        if closing {
            let name = body.split_whitespace().next().unwrap_or("");
            if name.is_empty() {
                return Err(MarkupError::EmptyTag(tag_start));
            }
            Ok(Token::Close(name))
        } else {
            parse_tag_body(body, tag_start)
        }
    }
}

/// Parse the body of an opening tag (the text between the brackets) into a
/// name and attribute list.
fn parse_tag_body(body: &str, tag_start: usize) -> Result<Token<'_>, MarkupError> {
    let mut rest = body.trim_start();

    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty() {
        return Err(MarkupError::EmptyTag(tag_start));
    }
    rest = rest[name_end..].trim_start();

    let mut attrs = Vec::new();
    while !rest.is_empty() {
        let mut end = rest.len();
        for (i, c) in rest.char_indices() {
            if c == '=' || c.is_whitespace() {
                end = i;
                break;
            }
        }
        let attr = &rest[..end];
        rest = &rest[end..];

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let quoted = &after_eq[1..];
                    let close = quoted
                        .find(q)
                        .ok_or(MarkupError::UnterminatedValue(tag_start))?;
                    rest = quoted[close + 1..].trim_start();
                    Some(&quoted[..close])
                }
                _ => {
                    let value_end = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    rest = after_eq[value_end..].trim_start();
                    Some(&after_eq[..value_end])
                }
            }
        } else {
            rest = rest.trim_start();
            None
        };

        attrs.push((attr, value));
    }

    Ok(Token::Open { name, attrs })
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.peek() == Some('<') {
            Some(self.consume_tag())
        } else {
            self.consume_text().map(|t| Ok(Token::Text(t)))
        }
    }
}
