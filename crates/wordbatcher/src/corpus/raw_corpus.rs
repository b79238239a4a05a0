//! # Raw Corpus Loading

use crate::{
    batching::{BatchProducer, BatchProducerOptions},
    corpus::CorpusOptions,
    errors::WBResult,
    types::TokenType,
    vocab::{TokenVocab, VocabBuilder, VocabBuilderOptions, io::load_rank_vocab_path},
};

/// A corpus split.
#[derive(
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
pub enum Split {
    /// The training split; the vocabulary is built from it.
    Train,

    /// The validation split.
    Valid,

    /// The test split.
    Test,
}

/// The three encoded splits and the vocabulary used to encode them.
#[derive(Debug, Clone)]
pub struct RawCorpus<T: TokenType> {
    /// The encoded training split.
    pub train: Vec<T>,

    /// The encoded validation split.
    pub valid: Vec<T>,

    /// The encoded test split.
    pub test: Vec<T>,

    /// The vocabulary.
    pub vocab: TokenVocab<T>,
}

impl<T: TokenType> RawCorpus<T> {
    /// The number of tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The encoded ids of `split`.
    pub fn split(
        &self,
        split: Split,
    ) -> &[T] {
        match split {
            Split::Train => &self.train,
            Split::Valid => &self.valid,
            Split::Test => &self.test,
        }
    }

    /// Build a [`BatchProducer`] over `split`.
    pub fn producer(
        &self,
        split: Split,
        options: BatchProducerOptions,
    ) -> WBResult<BatchProducer<T>> {
        options.init(self.split(split))
    }
}

/// Load and encode a train/valid/test corpus.
///
/// The vocabulary comes from ``options.vocab_path`` when set, and is
/// otherwise built from the training split. Tokens missing from it are
/// dropped from every split.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn load_corpus<T: TokenType>(options: &CorpusOptions) -> WBResult<RawCorpus<T>> {
    let granularity = options.granularity;

    let vocab: TokenVocab<T> = match &options.vocab_path {
        Some(path) => {
            log::info!("loading vocab: {}", path.display());
            load_rank_vocab_path(path)?
        }
        None => {
            let path = options.split_path(Split::Train);
            log::info!("building {granularity} vocab: {}", path.display());
            let mut builder: VocabBuilder = VocabBuilderOptions::new(granularity).init();
            builder.update_from_path(&path)?;
            builder.build()?
        }
    };
    log::info!("vocab size: {}", vocab.len());

    let encode = |split: Split| -> WBResult<Vec<T>> {
        let path = options.split_path(split);
        let ids = vocab.encode_path(&path, granularity)?;
        log::info!("{split}: {} ids from {}", ids.len(), path.display());
        Ok(ids)
    };

    let train = encode(Split::Train)?;
    let valid = encode(Split::Valid)?;
    let test = encode(Split::Test)?;

    Ok(RawCorpus {
        train,
        valid,
        test,
        vocab,
    })
}
