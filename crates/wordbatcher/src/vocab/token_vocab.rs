//! # Token Vocabulary

use std::{collections::BTreeMap, path::Path};

use crate::{
    errors::{WBResult, WordbatcherError},
    types::{TokenType, WBHashMap, hash_map_new},
    vocab::{TokenGranularity, tokenize::tokenize},
};

/// A ``{ token -> id }`` vocabulary with reverse lookup.
///
/// Built vocabularies have the contiguous ids ``0..len()``; loaded
/// vocabularies carry whatever ids their file assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_to_id: WBHashMap<String, T>,
    id_to_token: BTreeMap<T, String>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            token_to_id: hash_map_new(),
            id_to_token: BTreeMap::new(),
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Assign ids ``0..N`` to `tokens`, in iteration order.
    ///
    /// ## Errors
    /// [`WordbatcherError::VocabSizeOverflow`] if `N` ids do not fit in `T`.
    pub fn from_ordered_tokens<I>(tokens: I) -> WBResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut vocab = Self::default();
        for (idx, token) in tokens.into_iter().enumerate() {
            let id = T::from_usize(idx)
                .ok_or(WordbatcherError::VocabSizeOverflow { size: idx + 1 })?;
            vocab.insert(token.into(), id);
        }
        Ok(vocab)
    }

    /// Add or replace a ``token -> id`` mapping.
    ///
    /// A token inserted twice keeps its latest id. When two tokens share an
    /// id, reverse lookup resolves to the most recently inserted one.
    pub fn insert(
        &mut self,
        token: String,
        id: T,
    ) {
        if let Some(old) = self.token_to_id.insert(token.clone(), id)
            && old != id
            && self.id_to_token.get(&old) == Some(&token)
        {
            self.id_to_token.remove(&old);
        }
        self.id_to_token.insert(id, token);
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Look up the id for `token`.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the token for `id`.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// The largest id in the vocabulary.
    pub fn max_id(&self) -> Option<T> {
        self.id_to_token.keys().next_back().copied()
    }

    /// Iterate ``(id, token)`` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.id_to_token.iter().map(|(&id, token)| (id, token.as_str()))
    }

    /// Map `tokens` to ids, silently dropping tokens not in the vocabulary.
    pub fn encode_tokens<I>(
        &self,
        tokens: I,
    ) -> Vec<T>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Tokenize `text` and map it to ids; out-of-vocabulary tokens are dropped.
    pub fn encode_text(
        &self,
        text: &str,
        granularity: TokenGranularity,
    ) -> Vec<T> {
        let tokens = tokenize(text, granularity);
        let ids = self.encode_tokens(&tokens);

        let dropped = tokens.len() - ids.len();
        if dropped > 0 {
            log::debug!(
                "dropped {dropped} of {} tokens not in the vocabulary",
                tokens.len()
            );
        }

        ids
    }

    /// Read a UTF-8 file and encode it with [`Self::encode_text`].
    pub fn encode_path<P: AsRef<Path>>(
        &self,
        path: P,
        granularity: TokenGranularity,
    ) -> WBResult<Vec<T>> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.encode_text(&text, granularity))
    }

    /// Map ids back to their tokens.
    ///
    /// ## Errors
    /// [`WordbatcherError::TokenOutOfRange`] for an id with no token.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> WBResult<Vec<&str>> {
        ids.iter()
            .map(|&id| {
                self.id_to_token(id)
                    .ok_or(WordbatcherError::TokenOutOfRange)
            })
            .collect()
    }
}
