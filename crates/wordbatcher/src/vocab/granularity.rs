//! # Token Granularity

use core::str::FromStr;

use crate::errors::{WBResult, WordbatcherError};

/// The unit a corpus is split into before counting and encoding.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TokenGranularity {
    /// Whitespace separated words; newlines become `<eos>`.
    #[default]
    Word,

    /// Individual characters; newlines become `'+'`.
    Char,
}

impl TokenGranularity {
    /// Parse a granularity name (`"word"` or `"char"`).
    ///
    /// ## Errors
    /// Any other name fails with [`WordbatcherError::InvalidArgument`].
    pub fn parse(name: &str) -> WBResult<Self> {
        Self::from_str(name).map_err(|_| {
            WordbatcherError::InvalidArgument(format!(
                "unknown token granularity {name:?}; expected \"word\" or \"char\""
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(TokenGranularity::parse("word").unwrap(), TokenGranularity::Word);
        assert_eq!(TokenGranularity::parse("char").unwrap(), TokenGranularity::Char);
    }

    #[test]
    fn test_parse_unknown() {
        for name in ["", "Word", "chars", "byte"] {
            let err = TokenGranularity::parse(name).unwrap_err();
            assert!(
                matches!(err, WordbatcherError::InvalidArgument(_)),
                "{name:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for g in TokenGranularity::iter() {
            assert_eq!(TokenGranularity::parse(&g.to_string()).unwrap(), g);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TokenGranularity::Char).unwrap();
        assert_eq!(json, "\"char\"");

        let g: TokenGranularity = serde_json::from_str("\"word\"").unwrap();
        assert_eq!(g, TokenGranularity::Word);
    }
}
