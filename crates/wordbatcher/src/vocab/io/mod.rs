//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordbatcher::{
//!     TokenGranularity,
//!     WBResult,
//!     vocab::{TokenVocab, io::load_rank_vocab_path},
//! };
//!
//! fn example() -> WBResult<Vec<u32>> {
//!     let vocab: TokenVocab<u32> = load_rank_vocab_path("vocab.csv")?;
//!     vocab.encode_path("ptb.valid.txt", TokenGranularity::Word)
//! }
//! ```

mod rank_vocab;

#[doc(inline)]
pub use rank_vocab::*;
