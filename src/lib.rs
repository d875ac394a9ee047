//! SGR markup compiler for terminal text styling.
//!
//! This crate compiles a small HTML-like markup language into ANSI SGR
//! escape sequences (ECMA-48 Select Graphic Rendition), turning text like
//! `<b>bold <i>and italic</i></b>` into the byte stream a terminal renders
//! with the corresponding styling.
//!
//! # Overview
//!
//! Styles nest the way tags nest. Because SGR parameters set absolute
//! terminal state rather than stacking, closing an inner tag emits a full
//! reset followed by a replay of every style still open, so the visual
//! nesting always matches the markup. Output unconditionally ends with a
//! reset, leaving the terminal unstyled.
//!
//! # Recognized tags
//!
//! | tag | attributes |
//! |---|---|
//! | `b` | — |
//! | `dim` | — |
//! | `i` | — |
//! | `u` | `type`: `solid` (default), `double`, `wavy`, `dotted`, `dashed` |
//! | `blink` | `type`: `slow` (default), `rapid`, `fast` (alias of rapid) |
//! | `inverse` | — |
//! | `reset` | void: `<reset>` and `</reset>` both clear all styling |
//!
//! # Usage
//!
//! ```
//! use sgrml::Sgr;
//!
//! let styled = Sgr::new("<b>Hello</b> World");
//! assert_eq!(
//!     styled.compile().unwrap(),
//!     "\x1b[1mHello\x1b[0m World\x1b[0m",
//! );
//!
//! // Compilation is memoized: printing reuses the cached result.
//! println!("{styled}");
//! ```
//!
//! Unknown tags, unknown attributes, and unknown variant values are
//! compilation errors:
//!
//! ```
//! use sgrml::{Sgr, MarkupError, StyleError};
//!
//! let err = Sgr::new("<u type=none>x</u>").compile().unwrap_err();
//! assert!(matches!(
//!     err,
//!     MarkupError::Style(StyleError::UnknownVariant { .. })
//! ));
//! ```

pub mod error;
pub mod parser;
pub mod sequence;
pub mod sgr;
pub mod tag;

// Re-export main types at crate root
pub use error::{MarkupError, StyleError};
pub use sequence::{RESET, wrap_sgr};
pub use sgr::Sgr;
pub use tag::StyleTag;
