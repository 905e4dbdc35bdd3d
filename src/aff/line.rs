//! Physical-line classification for `.aff` directive files.
//!
//! One physical line is one record:
//! - blank after leading-whitespace trim, or first non-whitespace `#`:
//!   insignificant, contributes nothing to the index
//! - anything else: a directive occurrence, `<token><whitespace><free-text>?`
//!
//! There is no escaping, quoting, or line continuation. A `#` appearing
//! after the directive token is ordinary parameter text, not a comment
//! marker.

/// The classification of one physical source line.
#[derive(Debug)]
pub(crate) enum Line<'a> {
    /// Blank line or whole-line comment; skipped by the parser.
    Insignificant,
    /// A directive occurrence.
    Directive {
        /// The directive token, uppercased.
        name: String,
        /// Verbatim text from the first non-whitespace character after the
        /// token to end-of-line, trailing whitespace included. `None` when
        /// only whitespace follows the token.
        parameter: Option<&'a str>,
    },
}

/// Classifies a single line (without its terminator).
///
/// The directive token is the maximal leading run of non-whitespace
/// characters. It is uppercased with `to_ascii_uppercase` so the transform
/// is fixed and locale-independent; non-ASCII characters pass through
/// unchanged.
pub(crate) fn classify(raw: &str) -> Line<'_> {
    let significant = raw.trim_start();
    if significant.is_empty() || significant.starts_with('#') {
        return Line::Insignificant;
    }

    let token_end = significant
        .find(char::is_whitespace)
        .unwrap_or(significant.len());
    let (token, rest) = significant.split_at(token_end);

    let parameter = rest
        .find(|c: char| !c.is_whitespace())
        .map(|start| &rest[start..]);

    Line::Directive {
        name: token.to_ascii_uppercase(),
        parameter,
    }
}
