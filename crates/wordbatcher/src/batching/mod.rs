//! # Sequential Batching
//!
//! Turns a flat id sequence into aligned ``(input, target)`` window pairs
//! for next-token training.
//!
//! The sequence is truncated to ``batch_size * batch_len`` ids and reshaped
//! into a [`BatchGrid`] of ``batch_size`` rows. Each epoch walks
//! ``epoch_size = (batch_len - 1) / num_steps`` non-overlapping column
//! windows; the target window is the input window shifted one column right.
//!
//! ```rust
//! use wordbatcher::batching::BatchProducerOptions;
//!
//! let ids: Vec<u32> = (0..10).collect();
//! let producer = BatchProducerOptions::new(2, 3).init(&ids).unwrap();
//! assert_eq!(producer.epoch_size(), 1);
//!
//! let pair = producer.iter().next().unwrap();
//! assert_eq!(pair.input.to_rows(), vec![vec![0, 1, 2], vec![5, 6, 7]]);
//! assert_eq!(pair.target.to_rows(), vec![vec![1, 2, 3], vec![6, 7, 8]]);
//! ```

mod batch_grid;
mod batch_producer;
mod batch_window;

#[doc(inline)]
pub use batch_grid::BatchGrid;
#[doc(inline)]
pub use batch_producer::{BatchProducer, BatchProducerOptions, WindowIter};
#[doc(inline)]
pub use batch_window::{BatchWindow, WindowPair};
