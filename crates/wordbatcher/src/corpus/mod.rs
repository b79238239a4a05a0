//! # Corpus Loading
//!
//! Loads a ``train / valid / test`` directory of UTF-8 text files
//! (the PTB layout by default), builds the vocabulary from the training
//! split, and encodes all three splits with it.
//!
//! ```rust,no_run
//! use wordbatcher::{
//!     WBResult,
//!     batching::BatchProducerOptions,
//!     corpus::{CorpusOptions, RawCorpus, Split},
//! };
//!
//! fn example() -> WBResult<()> {
//!     let corpus: RawCorpus<u32> = CorpusOptions::new("data/ptb").load()?;
//!     println!("vocab size: {}", corpus.vocab_size());
//!
//!     let producer = corpus.producer(Split::Train, BatchProducerOptions::new(20, 35))?;
//!     for pair in producer.epoch() {
//!         let _ = (pair.input, pair.target);
//!     }
//!     Ok(())
//! }
//! ```

mod corpus_options;
mod raw_corpus;

#[doc(inline)]
pub use corpus_options::{CorpusOptions, PTB_TEST_FILE, PTB_TRAIN_FILE, PTB_VALID_FILE};
#[doc(inline)]
pub use raw_corpus::{RawCorpus, Split, load_corpus};
