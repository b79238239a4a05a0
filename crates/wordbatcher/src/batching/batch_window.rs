//! # Batch Windows

use crate::types::TokenType;

/// A row-major ``[rows, cols]`` block of ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWindow<T: TokenType> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: TokenType> BatchWindow<T> {
    /// Wrap `data` as a ``[rows, cols]`` window.
    ///
    /// ## Panics
    /// If ``data.len() != rows * cols``.
    pub fn new(
        rows: usize,
        cols: usize,
        data: Vec<T>,
    ) -> Self {
        assert_eq!(data.len(), rows * cols, "window shape mismatch");
        Self { rows, cols, data }
    }

    /// The number of rows (the batch size).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns (the step count).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The ``[rows, cols]`` shape.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Row `r`, or `None` past the last row.
    pub fn row(
        &self,
        r: usize,
    ) -> Option<&[T]> {
        if r < self.rows {
            Some(&self.data[r * self.cols..(r + 1) * self.cols])
        } else {
            None
        }
    }

    /// The id at ``(r, c)``.
    pub fn get(
        &self,
        r: usize,
        c: usize,
    ) -> Option<T> {
        if c < self.cols {
            self.row(r).map(|row| row[c])
        } else {
            None
        }
    }

    /// The row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(|r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// Release the row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// One training step: an input window and its next-token target.
///
/// The target holds the same rows as the input, shifted one column right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPair<T: TokenType> {
    /// The window index within the epoch.
    pub step: usize,

    /// The ``[batch_size, num_steps]`` input ids.
    pub input: BatchWindow<T>,

    /// The ``[batch_size, num_steps]`` target ids.
    pub target: BatchWindow<T>,
}
