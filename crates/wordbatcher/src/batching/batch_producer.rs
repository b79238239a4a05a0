//! # Batch Producer

use crate::{
    batching::{BatchGrid, WindowPair},
    errors::{WBResult, WordbatcherError},
    types::TokenType,
};

/// Options for [`BatchProducer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchProducerOptions {
    /// The number of rows per window.
    pub batch_size: usize,

    /// The number of columns per window.
    pub num_steps: usize,
}

impl BatchProducerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `batch_size` - The number of rows per window.
    /// * `num_steps` - The number of columns (unrolled steps) per window.
    pub fn new(
        batch_size: usize,
        num_steps: usize,
    ) -> Self {
        Self {
            batch_size,
            num_steps,
        }
    }

    /// Sets the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Sets the step count.
    pub fn with_num_steps(
        self,
        num_steps: usize,
    ) -> Self {
        Self { num_steps, ..self }
    }

    /// The number of windows per epoch for `data_len` ids.
    ///
    /// ``floor((floor(data_len / batch_size) - 1) / num_steps)``, saturating at 0.
    pub fn epoch_size_for(
        &self,
        data_len: usize,
    ) -> usize {
        if self.batch_size == 0 || self.num_steps == 0 {
            return 0;
        }
        (data_len / self.batch_size).saturating_sub(1) / self.num_steps
    }

    /// Initializes a [`BatchProducer`] over `ids`.
    ///
    /// ## Errors
    /// * [`WordbatcherError::InvalidArgument`] if either dimension is 0.
    /// * [`WordbatcherError::EpochSizeZero`] if `ids` is too short to fill
    ///   a single window pair.
    pub fn init<T: TokenType>(
        self,
        ids: &[T],
    ) -> WBResult<BatchProducer<T>> {
        BatchProducer::new(self, ids)
    }
}

/// Slices an id sequence into ``(input, target)`` window pairs.
///
/// Windows are taken in column order without shuffling; iteration wraps
/// back to the first window after the last, so [`Self::iter`] never ends.
#[derive(Debug, Clone)]
pub struct BatchProducer<T: TokenType> {
    options: BatchProducerOptions,
    grid: BatchGrid<T>,
    epoch_size: usize,
}

impl<T: TokenType> BatchProducer<T> {
    /// Build a producer; see [`BatchProducerOptions::init`].
    pub fn new(
        options: BatchProducerOptions,
        ids: &[T],
    ) -> WBResult<Self> {
        if options.num_steps == 0 {
            return Err(WordbatcherError::InvalidArgument(
                "num_steps must be > 0".to_string(),
            ));
        }
        let grid = BatchGrid::from_ids(ids, options.batch_size)?;

        let epoch_size = options.epoch_size_for(ids.len());
        if epoch_size == 0 {
            return Err(WordbatcherError::EpochSizeZero {
                batch_size: options.batch_size,
                num_steps: options.num_steps,
                data_len: ids.len(),
            });
        }

        log::debug!(
            "batch grid [{}, {}]; {} windows of {} steps",
            grid.rows(),
            grid.batch_len(),
            epoch_size,
            options.num_steps
        );

        Ok(Self {
            options,
            grid,
            epoch_size,
        })
    }

    /// The producer options.
    pub fn options(&self) -> &BatchProducerOptions {
        &self.options
    }

    /// The number of rows per window.
    pub fn batch_size(&self) -> usize {
        self.options.batch_size
    }

    /// The number of columns per window.
    pub fn num_steps(&self) -> usize {
        self.options.num_steps
    }

    /// The number of window pairs per epoch; always > 0.
    pub fn epoch_size(&self) -> usize {
        self.epoch_size
    }

    /// The reshaped id grid.
    pub fn grid(&self) -> &BatchGrid<T> {
        &self.grid
    }

    /// The window pair at `step`, or `None` for ``step >= epoch_size``.
    pub fn window_pair(
        &self,
        step: usize,
    ) -> Option<WindowPair<T>> {
        if step >= self.epoch_size {
            return None;
        }

        let n = self.options.num_steps;
        let col = step * n;
        Some(WindowPair {
            step,
            input: self.grid.window(col, n)?,
            target: self.grid.window(col + 1, n)?,
        })
    }

    /// An endless iterator over window pairs, starting at step 0.
    pub fn iter(&self) -> WindowIter<'_, T> {
        WindowIter {
            producer: self,
            step: 0,
        }
    }

    /// A finite iterator over a single epoch.
    pub fn epoch(&self) -> impl Iterator<Item = WindowPair<T>> + '_ {
        self.iter().take(self.epoch_size)
    }
}

impl<'a, T: TokenType> IntoIterator for &'a BatchProducer<T> {
    type Item = WindowPair<T>;
    type IntoIter = WindowIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Endless, epoch-repeating iterator over a [`BatchProducer`].
#[derive(Debug, Clone)]
pub struct WindowIter<'a, T: TokenType> {
    producer: &'a BatchProducer<T>,
    step: usize,
}

impl<T: TokenType> WindowIter<'_, T> {
    /// The step the next call to `next()` will yield.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Restart at step 0.
    pub fn reset(&mut self) {
        self.step = 0;
    }
}

impl<T: TokenType> Iterator for WindowIter<'_, T> {
    type Item = WindowPair<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.producer.window_pair(self.step)?;
        self.step = (self.step + 1) % self.producer.epoch_size;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> Vec<u32> {
        (0..10).collect()
    }

    #[test]
    fn test_worked_example() {
        let producer = BatchProducerOptions::new(2, 3).init(&ten()).unwrap();

        assert_eq!(producer.grid().batch_len(), 5);
        assert_eq!(producer.epoch_size(), 1);
        assert_eq!(
            producer.grid().as_slice(),
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        );

        let pair = producer.window_pair(0).unwrap();
        assert_eq!(pair.step, 0);
        assert_eq!(pair.input.to_rows(), vec![vec![0, 1, 2], vec![5, 6, 7]]);
        assert_eq!(pair.target.to_rows(), vec![vec![1, 2, 3], vec![6, 7, 8]]);

        assert!(producer.window_pair(1).is_none());
    }

    #[test]
    fn test_iter_wraps() {
        let ids: Vec<u32> = (0..20).collect();
        let producer = BatchProducerOptions::new(2, 2).init(&ids).unwrap();
        assert_eq!(producer.epoch_size(), 4);

        let steps: Vec<usize> = producer.iter().take(10).map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);

        let first = producer.iter().next().unwrap();
        let again = producer.iter().nth(4).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_epoch_and_reset() {
        let ids: Vec<u32> = (0..20).collect();
        let producer = BatchProducerOptions::new(2, 2).init(&ids).unwrap();

        let epoch: Vec<_> = producer.epoch().collect();
        assert_eq!(epoch.len(), 4);
        assert_eq!(epoch[3].input.to_rows(), vec![vec![6, 7], vec![16, 17]]);
        assert_eq!(epoch[3].target.to_rows(), vec![vec![7, 8], vec![17, 18]]);

        let mut it = producer.iter();
        it.next();
        it.next();
        assert_eq!(it.step(), 2);
        it.reset();
        assert_eq!(it.next().unwrap(), epoch[0]);

        let via_into: Vec<_> = (&producer).into_iter().take(4).collect();
        assert_eq!(via_into, epoch);
    }

    #[test]
    fn test_epoch_size_zero() {
        let err = BatchProducerOptions::new(2, 5).init(&ten()).unwrap_err();
        assert!(matches!(
            err,
            WordbatcherError::EpochSizeZero {
                batch_size: 2,
                num_steps: 5,
                data_len: 10
            }
        ));

        let err = BatchProducerOptions::new(11, 1).init(&ten()).unwrap_err();
        assert!(matches!(err, WordbatcherError::EpochSizeZero { .. }));

        let empty: Vec<u32> = vec![];
        let err = BatchProducerOptions::new(1, 1).init(&empty).unwrap_err();
        assert!(matches!(err, WordbatcherError::EpochSizeZero { .. }));
    }

    #[test]
    fn test_zero_dimensions() {
        for options in [BatchProducerOptions::new(0, 3), BatchProducerOptions::new(2, 0)] {
            let err = options.init(&ten()).unwrap_err();
            assert!(matches!(err, WordbatcherError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_options_builders() {
        let options = BatchProducerOptions::new(1, 1)
            .with_batch_size(20)
            .with_num_steps(35);
        assert_eq!(options, BatchProducerOptions::new(20, 35));
        assert_eq!(options.epoch_size_for(929_589), 1327);

        let json = serde_json::to_string(&options).unwrap();
        let back: BatchProducerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
