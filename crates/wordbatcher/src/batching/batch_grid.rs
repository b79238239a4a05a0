//! # Batch Grid

use crate::{
    batching::BatchWindow,
    errors::{WBResult, WordbatcherError},
    types::TokenType,
};

/// An id sequence reshaped into ``batch_size`` equal rows.
///
/// Row `r`, column `c` holds element ``r * batch_len + c`` of the source;
/// the trailing ``len % batch_size`` ids are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchGrid<T: TokenType> {
    rows: usize,
    batch_len: usize,
    data: Vec<T>,
}

impl<T: TokenType> BatchGrid<T> {
    /// Truncate and reshape `ids` into `batch_size` rows.
    ///
    /// ## Errors
    /// [`WordbatcherError::InvalidArgument`] if `batch_size` is 0.
    pub fn from_ids(
        ids: &[T],
        batch_size: usize,
    ) -> WBResult<Self> {
        if batch_size == 0 {
            return Err(WordbatcherError::InvalidArgument(
                "batch_size must be > 0".to_string(),
            ));
        }

        let batch_len = ids.len() / batch_size;
        Ok(Self {
            rows: batch_size,
            batch_len,
            data: ids[..batch_size * batch_len].to_vec(),
        })
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn batch_len(&self) -> usize {
        self.batch_len
    }

    /// Row `r`, or `None` past the last row.
    pub fn row(
        &self,
        r: usize,
    ) -> Option<&[T]> {
        if r < self.rows {
            Some(&self.data[r * self.batch_len..(r + 1) * self.batch_len])
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
        if c < self.batch_len {
            self.row(r).map(|row| row[c])
        } else {
            None
        }
    }

    /// The row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out ``grid[:, col..col + width]``.
    ///
    /// Returns `None` if the columns run past ``batch_len``.
    pub fn window(
        &self,
        col: usize,
        width: usize,
    ) -> Option<BatchWindow<T>> {
        let end = col.checked_add(width)?;
        if end > self.batch_len {
            return None;
        }

        let mut data = Vec::with_capacity(self.rows * width);
        for r in 0..self.rows {
            let base = r * self.batch_len;
            data.extend_from_slice(&self.data[base + col..base + end]);
        }
        Some(BatchWindow::new(self.rows, width, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape() {
        let ids: Vec<u32> = (0..11).collect();
        let grid = BatchGrid::from_ids(&ids, 2).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.batch_len(), 5);
        assert_eq!(grid.row(0), Some(&[0u32, 1, 2, 3, 4][..]));
        assert_eq!(grid.row(1), Some(&[5u32, 6, 7, 8, 9][..]));
        assert_eq!(grid.row(2), None);
        assert_eq!(grid.get(1, 4), Some(9));
        assert_eq!(grid.get(1, 5), None);
    }

    #[test]
    fn test_window() {
        let ids: Vec<u32> = (0..10).collect();
        let grid = BatchGrid::from_ids(&ids, 2).unwrap();

        let w = grid.window(1, 3).unwrap();
        assert_eq!(w.to_rows(), vec![vec![1, 2, 3], vec![6, 7, 8]]);

        assert!(grid.window(3, 2).is_some());
        assert!(grid.window(3, 3).is_none());
        assert!(grid.window(usize::MAX, 2).is_none());
    }

    #[test]
    fn test_short_input() {
        let ids: Vec<u32> = vec![1, 2, 3];
        let grid = BatchGrid::from_ids(&ids, 4).unwrap();

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.batch_len(), 0);
        assert_eq!(grid.row(3).map(<[u32]>::len), Some(0));
    }

    #[test]
    fn test_zero_batch_size() {
        let ids: Vec<u32> = vec![1, 2, 3];
        assert!(matches!(
            BatchGrid::from_ids(&ids, 0),
            Err(WordbatcherError::InvalidArgument(_))
        ));
    }
}
