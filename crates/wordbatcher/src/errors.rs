//! # Error Types

/// Errors from wordbatcher operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbatcherError {
    /// An argument was outside the supported set of values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The corpus is too short for the requested batch geometry.
    #[error(
        "epoch_size == 0 for {data_len} ids (batch_size={batch_size}, num_steps={num_steps}); \
         decrease batch_size or num_steps"
    )]
    EpochSizeZero {
        /// The requested number of rows.
        batch_size: usize,

        /// The requested window width.
        num_steps: usize,

        /// The length of the encoded sequence.
        data_len: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Token value out of range for the target type, or unknown to the vocabulary.
    #[error("token out of range")]
    TokenOutOfRange,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (vocab lines, integers, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordbatcher operations.
pub type WBResult<T> = core::result::Result<T, WordbatcherError>;
