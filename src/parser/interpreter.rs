//! Tag-stack interpreter for SGR markup.
//!
//! Walks the lexer's token stream, maintains the stack of currently-open
//! styles, and emits the output: escape sequences interleaved with literal
//! text.

use crate::error::{MarkupError, StyleError};
use crate::sequence;
use crate::tag::StyleTag;

use super::lexer::{Lexer, Token};

/// Name of the void tag that clears all styling, in both its `<reset>` and
/// `</reset>` spellings.
const RESET_TAG: &str = "reset";

/// Compiles SGR markup into a string of literal text and escape sequences.
///
/// This is the single-pass compilation behind [`Sgr`](crate::Sgr); use it
/// directly for one-shot compiles without the memoizing facade.
///
/// # Examples
///
/// ```
/// use sgrml::parser::compile;
///
/// let out = compile("<b>bold</b>").unwrap();
/// assert_eq!(out, "\x1b[1mbold\x1b[0m\x1b[0m");
/// ```
pub fn compile(input: &str) -> Result<String, MarkupError> {
    let mut interpreter = Interpreter::new();
    for token in Lexer::new(input) {
        interpreter.process_token(token?)?;
    }
    Ok(interpreter.finish())
}

/// The interpreter state for one compilation pass.
struct Interpreter {
    /// Styles opened and not yet closed, oldest first.
    stack: Vec<StyleTag>,
    /// Accumulated output.
    output: String,
}

impl Interpreter {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            output: String::new(),
        }
    }

    /// Process a single token.
    fn process_token(&mut self, token: Token<'_>) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => {
                self.handle_text(text);
                Ok(())
            }
            Token::Open { name, attrs } => self.handle_start(name, &attrs),
            Token::Close(name) => self.handle_end(name),
        }
    }

    /// An opening tag: resolve it, push it, emit its sequence.
    fn handle_start(
        &mut self,
        name: &str,
        attrs: &[(&str, Option<&str>)],
    ) -> Result<(), MarkupError> {
        if name == RESET_TAG {
            self.reset_all();
            return Ok(());
        }

        let tag = sequence::lookup(name, attrs)?;
        self.output.push_str(tag.sequence());
        self.stack.push(tag);
        Ok(())
    }

    /// A closing tag: remove the matching entry, then clear and replay.
    ///
    /// SGR parameters set absolute terminal state rather than nesting, so
    /// closing one style means clearing everything and re-emitting every
    /// style still open, in open order.
    fn handle_end(&mut self, name: &str) -> Result<(), MarkupError> {
        if name == RESET_TAG {
            self.reset_all();
            return Ok(());
        }

        if !sequence::is_known(name) {
            return Err(StyleError::UnknownStyle(name.to_string()).into());
        }

        let index = self
            .stack
            .iter()
            .rposition(|tag| *tag == *name)
            .ok_or_else(|| MarkupError::UnmatchedCloseTag(name.to_string()))?;
        self.stack.remove(index);

        self.output.push_str(sequence::RESET);
        for tag in &self.stack {
            self.output.push_str(tag.sequence());
        }
        Ok(())
    }

    /// Literal text passes through unchanged.
    fn handle_text(&mut self, data: &str) {
        self.output.push_str(data);
    }

    /// Emit the reset sequence and empty the stack. Legal at any depth.
    fn reset_all(&mut self) {
        self.output.push_str(sequence::RESET);
        self.stack.clear();
    }

    /// Consume the interpreter, forcing a final reset so the output never
    /// leaves the terminal styled. Balanced input already ends with a reset
    /// from its last closing tag, so this produces a trailing double reset.
    fn finish(mut self) -> String {
        self.reset_all();
        self.output
    }
}
