//! Integration tests for markup compilation.
//!
//! Expected output is built with `wrap_sgr`, the same helper the library
//! uses to render sequences, so the assertions pin the exact byte stream a
//! terminal receives.

use std::fmt::Display;

use sgrml::{MarkupError, Sgr, StyleError, wrap_sgr};

fn w(params: impl Display) -> String {
    wrap_sgr(params)
}

/// Double reset: every balanced document ends with the closing tag's reset
/// followed by the finalization reset.
fn dr() -> String {
    format!("{}{}", w(0), w(0))
}

// ============================================================================
// BASIC STYLES
// ============================================================================

#[test]
fn bold() {
    assert_eq!(Sgr::new("<b>bold</b>"), format!("{}bold{}", w(1), dr()));
}

#[test]
fn dim() {
    assert_eq!(Sgr::new("<dim>dim</dim>"), format!("{}dim{}", w(2), dr()));
}

#[test]
fn italic() {
    assert_eq!(Sgr::new("<i>italic</i>"), format!("{}italic{}", w(3), dr()));
}

#[test]
fn inverse() {
    assert_eq!(
        Sgr::new("<inverse>inverse</inverse>"),
        format!("{}inverse{}", w(7), dr())
    );
}

#[test]
fn plain_text_gets_one_reset() {
    assert_eq!(Sgr::new("no tags"), format!("no tags{}", w(0)));
}

#[test]
fn multiple_sibling_tags() {
    assert_eq!(
        Sgr::new("<b>bold</b><i>italic</i>"),
        format!("{}bold{}{}italic{}", w(1), w(0), w(3), dr())
    );
}

// ============================================================================
// NESTING AND STACK REPLAY
// ============================================================================

#[test]
fn mixed_nesting_replays_open_styles() {
    assert_eq!(
        Sgr::new("<b>bold <i>italic and bold</b> italic</i> normal"),
        format!(
            "{}bold {}italic and bold{}{} italic{} normal{}",
            w(1),
            w(3),
            w(0),
            w(3),
            w(0),
            w(0)
        )
    );
}

#[test]
fn triple_nesting() {
    // From the original demo: b > i > dim, closed from the inside out.
    assert_eq!(
        Sgr::new("<b>B <i>BI <dim>BID</dim></b> I</i> N"),
        format!(
            "{b}B {i}BI {dim}BID{r}{b}{i}{r}{i} I{r} N{r}",
            b = w(1),
            i = w(3),
            dim = w(2),
            r = w(0)
        )
    );
}

// ============================================================================
// UNDERLINE VARIANTS
// ============================================================================

#[test]
fn underline_default() {
    assert_eq!(
        Sgr::new("<u>underline</u>"),
        format!("{}underline{}", w("4:1"), dr())
    );
}

#[test]
fn underline_types() {
    for (underline_type, params) in [
        ("solid", "4:1"),
        ("double", "4:2"),
        ("wavy", "4:3"),
        ("dotted", "4:4"),
        ("dashed", "4:5"),
    ] {
        assert_eq!(
            Sgr::new(format!("<u type={underline_type}>underline</u>")),
            format!("{}underline{}", w(params), dr()),
            "type {underline_type}"
        );
    }
}

#[test]
fn underline_type_quoted() {
    assert_eq!(
        Sgr::new("<u type=\"wavy\">underline</u>"),
        format!("{}underline{}", w("4:3"), dr())
    );
}

// ============================================================================
// BLINK VARIANTS
// ============================================================================

#[test]
fn blink_types() {
    assert_eq!(
        Sgr::new("<blink>blink</blink>"),
        format!("{}blink{}", w(5), dr())
    );
    assert_eq!(
        Sgr::new("<blink type=rapid>blink</blink>"),
        format!("{}blink{}", w(6), dr())
    );
}

#[test]
fn blink_fast_is_rapid() {
    assert_eq!(
        Sgr::new("<blink type=fast>x</blink>"),
        Sgr::new("<blink type=rapid>x</blink>")
    );
}

// ============================================================================
// RESET DIRECTIVE
// ============================================================================

#[test]
fn reset_clears_nested_styles() {
    assert_eq!(
        Sgr::new("<b><i>styled<reset>plain"),
        format!("{}{}styled{}plain{}", w(1), w(3), w(0), w(0))
    );
}

#[test]
fn reset_both_spellings() {
    assert_eq!(Sgr::new("a<reset>b"), Sgr::new("a</reset>b"));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn error_on_wrong_tag() {
    let err = Sgr::new("<unsupported>text</unsupported>")
        .compile()
        .unwrap_err();
    assert!(matches!(
        err,
        MarkupError::Style(StyleError::UnknownStyle(_))
    ));
}

#[test]
fn error_on_wrong_attr() {
    let err = Sgr::new("<u unsupported=none>underline</u>")
        .compile()
        .unwrap_err();
    assert!(matches!(
        err,
        MarkupError::Style(StyleError::UnsupportedAttribute { .. })
    ));
}

#[test]
fn error_on_wrong_variant() {
    let err = Sgr::new("<u type=none>underline</u>").compile().unwrap_err();
    assert!(matches!(
        err,
        MarkupError::Style(StyleError::UnknownVariant { .. })
    ));
}

#[test]
fn error_on_attr_for_fixed_style() {
    let err = Sgr::new("<b type=x>bold</b>").compile().unwrap_err();
    assert!(matches!(
        err,
        MarkupError::Style(StyleError::UnsupportedAttribute { .. })
    ));
}

#[test]
fn error_on_unmatched_close() {
    let err = Sgr::new("text</i>").compile().unwrap_err();
    assert_eq!(err, MarkupError::UnmatchedCloseTag("i".to_string()));
}

#[test]
fn error_on_malformed_tag() {
    let err = Sgr::new("text <b").compile().unwrap_err();
    assert_eq!(err, MarkupError::UnclosedTag(5));
}

// ============================================================================
// FACADE CONTRACT
// ============================================================================

#[test]
fn compile_is_memoized() {
    let sgr = Sgr::new("<b>x</b>");
    let first = sgr.compile().unwrap();
    let second = sgr.compile().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn equality() {
    assert_eq!(Sgr::new("<b>x</b>"), Sgr::new("<b>x</b>"));
    assert_ne!(Sgr::new("<b>x</b>"), Sgr::new("<b>y</b>"));
    assert_eq!(Sgr::new("<b>x</b>"), format!("{}x{}", w(1), dr()));
}

#[test]
fn display_matches_compile() {
    let sgr = Sgr::new("<u type=dotted>x</u>");
    assert_eq!(sgr.to_string(), sgr.compile().unwrap());
}
