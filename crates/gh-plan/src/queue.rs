//! `TaskQueue`: a plain FIFO over `VecDeque`.
//!
//! `enqueue` and `dequeue` are O(1) amortized.  `peek` never fails; it
//! returns `None` on an empty queue.  `dequeue` on an empty queue is a
//! contract violation reported as [`PlanError::EmptyQueue`].

use std::collections::VecDeque;

use crate::{PlanError, PlanResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQueue<T> {
    inner: VecDeque<T>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self { inner: VecDeque::new() }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` at the rear.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.inner.push_back(item);
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> PlanResult<T> {
        self.inner.pop_front().ok_or(PlanError::EmptyQueue)
    }

    /// The front element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Front-to-rear iteration.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

impl<T> FromIterator<T> for TaskQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
