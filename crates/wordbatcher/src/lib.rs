//! # `wordbatcher` Corpus Batching
//!
//! Prepares a plain-text corpus for sequential language model training.
//!
//! See:
//! * [`vocab`] to tokenize text and build or load a frequency-ranked vocabulary.
//! * [`batching`] to slice an encoded split into ``(input, target)`` windows.
//! * [`corpus`] to load and encode a ``train / valid / test`` directory in one call.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap implementations for ``foldhash``.
//!
//! This is done by the ``types::WBHashMap`` type alias machinery.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordbatcher::{
//!     BatchProducerOptions,
//!     CorpusOptions,
//!     RawCorpus,
//!     Split,
//!     TokenGranularity,
//! };
//!
//! type T = u32;
//!
//! let corpus: RawCorpus<T> = CorpusOptions::new("simple-examples/data")
//!     .with_granularity(TokenGranularity::Word)
//!     .load()?;
//!
//! let producer = corpus.producer(Split::Train, BatchProducerOptions::new(20, 35))?;
//! for pair in producer.iter().take(producer.epoch_size()) {
//!     assert_eq!(pair.input.shape(), [20, 35]);
//! }
//! # Ok::<(), wordbatcher::WordbatcherError>(())
//!```
#![warn(missing_docs, unused)]

pub mod batching;
pub mod corpus;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batching::{BatchProducer, BatchProducerOptions, WindowPair};
#[doc(inline)]
pub use corpus::{CorpusOptions, RawCorpus, Split, load_corpus};
#[doc(inline)]
pub use errors::{WBResult, WordbatcherError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{TokenGranularity, TokenVocab, VocabBuilder, VocabBuilderOptions};
