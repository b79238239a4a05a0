//! # Corpus Tokenization
//!
//! Both granularities first map every newline to [`EOS_MARKER`].
//! Word mode then splits on whitespace; char mode collapses the marker to
//! [`CHAR_EOS_SUBSTITUTE`] and splits into characters.

use crate::vocab::TokenGranularity;

/// The end-of-sequence token substituted for newlines.
pub const EOS_MARKER: &str = "<eos>";

/// The single-character stand-in for [`EOS_MARKER`] in char mode.
pub const CHAR_EOS_SUBSTITUTE: char = '+';

/// Apply the newline substitutions for `granularity`.
pub fn normalize_text(
    text: &str,
    granularity: TokenGranularity,
) -> String {
    let text = text.replace('\n', EOS_MARKER);
    match granularity {
        TokenGranularity::Word => text,
        TokenGranularity::Char => {
            let mut buf = [0u8; 4];
            text.replace(EOS_MARKER, CHAR_EOS_SUBSTITUTE.encode_utf8(&mut buf))
        }
    }
}

/// Split `text` into tokens.
///
/// Word mode yields no empty tokens. Note that `<eos>` is only its own token
/// when the newline is surrounded by whitespace; `"a\nb"` is the single
/// token `"a<eos>b"`.
///
/// Word splitting uses Unicode `White_Space`; the ASCII separator controls
/// U+001C..=U+001F are not treated as whitespace and stay inside tokens.
pub fn tokenize(
    text: &str,
    granularity: TokenGranularity,
) -> Vec<String> {
    let text = normalize_text(text, granularity);
    match granularity {
        TokenGranularity::Word => text.split_whitespace().map(str::to_owned).collect(),
        TokenGranularity::Char => text.chars().map(String::from).collect(),
    }
}
