//! The SGR sequence table.
//!
//! SELECT GRAPHIC RENDITION (SGR) is the ECMA-48 control function that sets
//! rendition aspects (bold, underline, ...) for the text that follows. Every
//! sequence this module produces has the form `ESC '[' <params> 'm'`, where
//! ESC is the C0 escape byte 0x1B, `ESC [` is the 7-bit Control Sequence
//! Introducer, and the final byte `m` (0x6D) selects SGR.
//!
//! The table maps each recognized style tag to its SGR parameter, either a
//! fixed value or one chosen by the tag's `type` attribute from a variant
//! table. Underline variants use the colon sub-parameter form `4:<n>`.

use crate::error::StyleError;
use crate::tag::StyleTag;

/// 7-bit Control Sequence Introducer: `ESC [`.
const CSI: &str = "\x1b[";

/// Final byte selecting the SGR control function.
const SGR_FINAL_BYTE: char = 'm';

/// The sequence that clears every rendition aspect (SGR parameter 0).
pub const RESET: &str = "\x1b[0m";

/// Wraps SGR parameters into a complete escape sequence.
///
/// # Examples
///
/// ```
/// use sgrml::wrap_sgr;
///
/// assert_eq!(wrap_sgr(1), "\x1b[1m");
/// assert_eq!(wrap_sgr("4:3"), "\x1b[4:3m");
/// ```
pub fn wrap_sgr(params: impl std::fmt::Display) -> String {
    format!("{CSI}{params}{SGR_FINAL_BYTE}")
}

/// How a style's SGR parameter is selected.
#[derive(Debug)]
enum ParamKind {
    /// A single fixed parameter; the style accepts no attributes.
    Fixed(&'static str),
    /// A parameter chosen by an attribute from a variant table.
    Variant {
        attribute: &'static str,
        default: &'static str,
        table: &'static phf::Map<&'static str, &'static str>,
    },
}

static UNDERLINE: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "solid" => "4:1",
    "double" => "4:2",
    "wavy" => "4:3",
    "dotted" => "4:4",
    "dashed" => "4:5",
};

static BLINK: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "slow" => "5",
    "rapid" => "6",
    "fast" => "6", // alias of rapid
};

static STYLES: phf::Map<&'static str, ParamKind> = phf::phf_map! {
    "b" => ParamKind::Fixed("1"),
    "dim" => ParamKind::Fixed("2"),
    "i" => ParamKind::Fixed("3"),
    "u" => ParamKind::Variant {
        attribute: "type",
        default: "solid",
        table: &UNDERLINE,
    },
    "blink" => ParamKind::Variant {
        attribute: "type",
        default: "slow",
        table: &BLINK,
    },
    "inverse" => ParamKind::Fixed("7"),
};

/// Returns true if `name` is a recognized style tag.
pub(crate) fn is_known(name: &str) -> bool {
    STYLES.contains_key(name)
}

/// Resolves a style name and its attributes to a [`StyleTag`] carrying the
/// fully-formed escape sequence.
///
/// Attributes are `(name, value)` pairs in document order; a style that
/// takes no attributes rejects any, and a variant style accepts only its
/// own attribute with a value from its variant set.
///
/// # Examples
///
/// ```
/// use sgrml::sequence::lookup;
///
/// let tag = lookup("u", &[("type", Some("double"))]).unwrap();
/// assert_eq!(tag.sequence(), "\x1b[4:2m");
///
/// // No attributes selects the default variant.
/// assert_eq!(lookup("u", &[]).unwrap().sequence(), "\x1b[4:1m");
/// ```
pub fn lookup(name: &str, attrs: &[(&str, Option<&str>)]) -> Result<StyleTag, StyleError> {
    let (canonical, kind) = STYLES
        .get_entry(name)
        .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))?;

    let param = match kind {
        ParamKind::Fixed(param) => {
            if let Some((attribute, _)) = attrs.first() {
                return Err(StyleError::UnsupportedAttribute {
                    style: (*canonical).to_string(),
                    attribute: (*attribute).to_string(),
                });
            }
            *param
        }
        ParamKind::Variant {
            attribute,
            default,
            table,
        } => {
            let mut variant = *default;
            for &(attr, value) in attrs {
                if attr != *attribute {
                    return Err(StyleError::UnsupportedAttribute {
                        style: (*canonical).to_string(),
                        attribute: attr.to_string(),
                    });
                }
                variant = value.unwrap_or("");
            }
            *table.get(variant).ok_or_else(|| StyleError::UnknownVariant {
                style: (*canonical).to_string(),
                variant: variant.to_string(),
            })?
        }
    };

    Ok(StyleTag::new(*canonical, wrap_sgr(param)))
}
