use std::collections::VecDeque;

/// Circular buffer definition. Buffer has a constant length of `size` elements. Buffer is filled by default samples.
/// When one new sample is pushed to the buffer, the oldest sample is popped out.
#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    buffer: VecDeque<T>,
}

impl<T: Clone + Default> CircularBuffer<T> {
    /// Creates new CircularBuffer with `size` number of default elements of type `T`.
    pub fn new(size: usize) -> Self {
        Self {
            buffer: VecDeque::from(vec![T::default(); size]),
        }
    }

    /// New element `elem` is pushed, and oldest is popped out
    pub fn push(&mut self, elem: T) -> T {
        let out = self.buffer.pop_front().unwrap_or_default();
        self.buffer.push_back(elem);
        out
    }

    /// Refills the buffer with default elements
    pub fn clear(&mut self) {
        let size = self.buffer.len();
        self.buffer.clear();
        self.buffer.resize(size, T::default());
    }

    /// Returns size of CircularBuffer
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
