//! # Vocab Builder

use std::path::Path;

use crate::{
    errors::WBResult,
    types::{CountType, TokenType},
    vocab::{TokenCounter, TokenGranularity, TokenVocab},
};

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VocabBuilderOptions {
    /// How text is split into tokens.
    pub granularity: TokenGranularity,
}

impl VocabBuilderOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `granularity` - The token granularity.
    pub fn new(granularity: TokenGranularity) -> Self {
        Self { granularity }
    }

    /// Sets the token granularity.
    pub fn with_granularity(
        self,
        granularity: TokenGranularity,
    ) -> Self {
        Self { granularity }
    }

    /// Initializes a [`VocabBuilder`] from these options.
    pub fn init<C: CountType>(self) -> VocabBuilder<C> {
        VocabBuilder::new(self)
    }
}

/// Builds a frequency-ranked [`TokenVocab`] from training text.
///
/// Ids are assigned by descending count, ties broken by ascending token;
/// so the same text always builds the same vocabulary.
///
/// # Parameters
/// * `C` - the type used to store token counts.
pub struct VocabBuilder<C = u64>
where
    C: CountType,
{
    /// Builder options.
    pub options: VocabBuilderOptions,

    /// The token counter.
    pub counter: TokenCounter<C>,
}

impl<C: CountType> VocabBuilder<C> {
    /// Initializes a [`VocabBuilder`].
    pub fn new(options: VocabBuilderOptions) -> Self {
        Self {
            options,
            counter: TokenCounter::new(options.granularity),
        }
    }

    /// Update token counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.counter.update_from_text(text);
    }

    /// Update token counts inplace from a sample iterator.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.counter.update_from_samples(samples);
    }

    /// Update token counts inplace from the whole contents of a UTF-8 file.
    pub fn update_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> WBResult<()> {
        let text = std::fs::read_to_string(path)?;
        self.update_from_text(text);
        Ok(())
    }

    /// Builds the [`TokenVocab<T>`].
    ///
    /// ## Errors
    /// [`crate::WordbatcherError::VocabSizeOverflow`] if the distinct token
    /// count does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn build<T: TokenType>(&self) -> WBResult<TokenVocab<T>> {
        let counts = self.counter.sorted_counts();
        log::debug!(
            "building {} vocab from {} distinct tokens",
            self.options.granularity,
            counts.len()
        );
        TokenVocab::from_ordered_tokens(counts.into_iter().map(|(token, _)| token))
    }
}

/// Build a vocabulary from a single training file.
pub fn build_vocab_path<T, P>(
    path: P,
    granularity: TokenGranularity,
) -> WBResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut builder: VocabBuilder = VocabBuilderOptions::new(granularity).init();
    builder.update_from_path(path)?;
    builder.build()
}
