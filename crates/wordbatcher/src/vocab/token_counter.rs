//! # Token Counter

use crate::{
    types::{CountType, WBHashMap, hash_map_with_capacity},
    vocab::{TokenGranularity, tokenize::tokenize},
};

/// Token frequency counter.
pub struct TokenCounter<C = u64>
where
    C: CountType,
{
    /// How text is split into tokens.
    pub granularity: TokenGranularity,

    /// The token counts.
    pub token_counts: WBHashMap<String, C>,
}

impl<C: CountType> TokenCounter<C> {
    /// Create a new token counter.
    pub fn new(granularity: TokenGranularity) -> Self {
        Self {
            granularity,
            token_counts: hash_map_with_capacity(10_000),
        }
    }

    /// The number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.token_counts.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.token_counts.is_empty()
    }

    /// The count for `token`, if seen.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<C> {
        self.token_counts.get(token).copied()
    }

    /// Release the token counts and return them.
    pub fn release(self) -> WBHashMap<String, C> {
        self.token_counts
    }

    /// Update counts inplace from pre-split tokens.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for token in tokens {
            *self.token_counts.entry(token.into()).or_default() += C::one();
        }
    }

    /// Update counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let tokens = tokenize(text.as_ref(), self.granularity);
        self.update_from_tokens(tokens);
    }

    /// Update counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// The counts ordered by descending count, then ascending token.
    pub fn sorted_counts(&self) -> Vec<(&str, C)> {
        let mut counts: Vec<(&str, C)> = self
            .token_counts
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_counter() {
        let mut tc: TokenCounter<u64> = TokenCounter::new(TokenGranularity::Word);

        let samples = vec!["Hello world", "Foo world bar world"];
        tc.update_from_samples(samples.iter());

        assert_eq!(tc.len(), 4);
        assert_eq!(tc.get("world"), Some(3));
        assert_eq!(tc.get("missing"), None);

        let mut counts: Vec<(String, u64)> = tc.release().into_iter().collect();
        counts.sort();
        assert_eq!(
            counts,
            vec![
                ("Foo".to_string(), 1),
                ("Hello".to_string(), 1),
                ("bar".to_string(), 1),
                ("world".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_sorted_counts_tie_break() {
        let mut tc: TokenCounter<u32> = TokenCounter::new(TokenGranularity::Word);
        tc.update_from_text("c b a c b d c");

        assert_eq!(
            tc.sorted_counts(),
            vec![("c", 3), ("b", 2), ("a", 1), ("d", 1)]
        );
    }

    #[test]
    fn test_char_counts() {
        let mut tc: TokenCounter<usize> = TokenCounter::new(TokenGranularity::Char);
        tc.update_from_text("aa b\n");

        assert_eq!(
            tc.sorted_counts(),
            vec![("a", 2), (" ", 1), ("+", 1), ("b", 1)]
        );
    }

    #[test]
    fn test_empty() {
        let tc: TokenCounter = TokenCounter::new(TokenGranularity::Word);
        assert!(tc.is_empty());
        assert!(tc.sorted_counts().is_empty());
    }
}
