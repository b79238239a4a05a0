//! # Vocabulary
//!
//! Frequency-ranked token vocabularies and the tokenization they share with
//! encoding.
//!
//! A [`VocabBuilder`] counts tokens from training text and assigns ids
//! ``0..N`` by descending count (ties broken by ascending token).
//! The resulting [`TokenVocab`] is then used to encode every split;
//! tokens it does not contain are dropped rather than mapped to an
//! unknown id.
//!
//! ```rust,no_run
//! use wordbatcher::{
//!     WBResult,
//!     vocab::{TokenGranularity, TokenVocab, VocabBuilder, VocabBuilderOptions},
//! };
//!
//! fn example() -> WBResult<(TokenVocab<u32>, Vec<u32>)> {
//!     let mut builder: VocabBuilder = VocabBuilderOptions::new(TokenGranularity::Word).init();
//!     builder.update_from_path("ptb.train.txt")?;
//!
//!     let vocab: TokenVocab<u32> = builder.build()?;
//!     let ids = vocab.encode_path("ptb.valid.txt", TokenGranularity::Word)?;
//!     Ok((vocab, ids))
//! }
//! ```

pub mod io;
pub mod tokenize;

mod granularity;
mod token_counter;
mod token_vocab;
mod vocab_builder;

#[doc(inline)]
pub use granularity::TokenGranularity;
#[doc(inline)]
pub use token_counter::TokenCounter;
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use vocab_builder::{VocabBuilder, VocabBuilderOptions, build_vocab_path};
