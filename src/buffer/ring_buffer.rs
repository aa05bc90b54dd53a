//! # Ring Buffer Implementation
//!
//! A growable double-ended circular buffer.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots. Cars can join at
//! either end of the queue and leave from either end. The queue's front and
//! back can sit anywhere on the track and wrap around past spot 0.
//! When every spot is taken and another car arrives, we build a track twice
//! as big and move the cars over in order, front car in spot 0.

use std::fmt;

use log::{debug, trace, warn};

use super::iter::{IntoIter, Iter};
use crate::config::Config;
use crate::error::{EmptyBufferError, Operation, RingError, RingResult};

/// Number of slots [`RingBuffer::new`] starts with.
pub const DEFAULT_CAPACITY: usize = 32;

/// A double-ended ring buffer that doubles its storage when full.
///
/// ## Properties
/// - O(1) amortized push and pop at both ends
/// - Never rejects an insert (grows instead)
/// - Growth keeps front-to-back order
///
/// ## Layout
/// `storage` has one slot per unit of capacity. The live elements occupy
/// `storage[head], storage[(head + 1) % capacity], ..., storage[tail]`,
/// exactly `size` of them. Every slot outside that window is `None`.
/// `head` and `tail` mean nothing while `size == 0`.
#[derive(Clone)]
pub struct RingBuffer<T> {
    storage: Vec<Option<T>>,
    size: usize,
    head: usize,
    tail: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with [`DEFAULT_CAPACITY`] slots.
    ///
    /// ## Example
    /// ```
    /// # use ring_deque::RingBuffer;
    /// let buffer: RingBuffer<i32> = RingBuffer::new();
    /// assert_eq!(buffer.capacity(), 32);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with exactly `capacity` slots.
    ///
    /// A capacity of 0 is allowed. Nothing is allocated until the first
    /// push, which grows the store to a single slot.
    ///
    /// ## Example
    /// ```
    /// # use ring_deque::RingBuffer;
    /// let mut buffer = RingBuffer::new_with_capacity(0);
    /// buffer.push_back('a');
    /// assert_eq!(buffer.capacity(), 1);
    /// ```
    pub fn new_with_capacity(capacity: usize) -> Self {
        trace!("Creating ring buffer with {} slots", capacity);

        Self {
            storage: empty_slots(capacity),
            size: 0,
            head: 0,
            tail: 0,
        }
    }

    /// Creates an empty buffer from a validated [`Config`].
    ///
    /// Unlike [`new_with_capacity`](Self::new_with_capacity) this refuses a
    /// zero capacity, and any capacity whose store would not fit in memory.
    pub fn with_config(config: &Config) -> RingResult<Self> {
        if let Some(err) = config.validate_for::<T>().into_iter().next() {
            warn!("Rejecting ring buffer config: {}", err);
            return Err(RingError::Config(err));
        }

        Ok(Self::new_with_capacity(config.initial_capacity))
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the next push will grow the store.
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns the number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    // ----------------------------------------
    // INSERTION
    // ----------------------------------------

    /// Appends an element after the current back.
    ///
    /// ## Example
    /// ```
    /// # use ring_deque::RingBuffer;
    /// let mut buffer = RingBuffer::new_with_capacity(2);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3); // grows to 4 slots
    /// assert_eq!(buffer.capacity(), 4);
    /// assert_eq!(buffer.peek_back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        if self.is_empty() {
            self.head = 0;
            self.tail = 0;
        } else {
            self.tail = self.advance(self.tail);
        }

        self.storage[self.tail] = Some(value);
        self.size += 1;
    }

    /// Inserts an element before the current front.
    pub fn push_front(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }

        if self.is_empty() {
            self.head = 0;
            self.tail = 0;
        } else {
            self.head = self.retreat(self.head);
        }

        self.storage[self.head] = Some(value);
        self.size += 1;
    }

    // ----------------------------------------
    // REMOVAL
    // ----------------------------------------

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Result<T, EmptyBufferError> {
        let value = self.take_slot(self.tail, Operation::PopBack)?;
        self.size -= 1;
        self.tail = self.retreat(self.tail);
        Ok(value)
    }

    /// Removes and returns the front element.
    ///
    /// ## Example
    /// ```
    /// # use ring_deque::RingBuffer;
    /// let mut buffer: RingBuffer<u8> = [1, 2].into_iter().collect();
    /// assert_eq!(buffer.pop_front(), Ok(1));
    /// assert_eq!(buffer.pop_front(), Ok(2));
    /// assert!(buffer.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyBufferError> {
        let value = self.take_slot(self.head, Operation::PopFront)?;
        self.size -= 1;
        self.head = self.advance(self.head);
        Ok(value)
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        for offset in 0..self.size {
            let index = self.physical(offset);
            self.storage[index] = None;
        }
        self.size = 0;
        self.head = 0;
        self.tail = 0;
    }

    // ----------------------------------------
    // INSPECTION
    // ----------------------------------------

    /// Returns the front element without removing it.
    pub fn peek_front(&self) -> Result<&T, EmptyBufferError> {
        self.slot(self.head, Operation::PeekFront)
    }

    /// Returns the back element without removing it.
    pub fn peek_back(&self) -> Result<&T, EmptyBufferError> {
        self.slot(self.tail, Operation::PeekBack)
    }

    /// Mutable access to the front element.
    pub fn peek_front_mut(&mut self) -> Result<&mut T, EmptyBufferError> {
        self.slot_mut(self.head, Operation::PeekFront)
    }

    /// Mutable access to the back element.
    pub fn peek_back_mut(&mut self) -> Result<&mut T, EmptyBufferError> {
        self.slot_mut(self.tail, Operation::PeekBack)
    }

    /// Returns the element `offset` places behind the front (0 is the front).
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.size {
            return None;
        }
        self.storage[self.physical(offset)].as_ref()
    }

    /// Mutable version of [`get`](Self::get).
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        if offset >= self.size {
            return None;
        }
        let index = self.physical(offset);
        self.storage[index].as_mut()
    }

    /// Returns an iterator over all elements (front to back).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    // ----------------------------------------
    // CURSOR ARITHMETIC
    // Only valid while capacity > 0
    // ----------------------------------------

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn retreat(&self, index: usize) -> usize {
        let capacity = self.capacity();
        (index + capacity - 1) % capacity
    }

    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    fn slot(&self, index: usize, operation: Operation) -> Result<&T, EmptyBufferError> {
        if self.is_empty() {
            return Err(EmptyBufferError::new(operation));
        }
        self.storage[index]
            .as_ref()
            .ok_or(EmptyBufferError::new(operation))
    }

    fn slot_mut(&mut self, index: usize, operation: Operation) -> Result<&mut T, EmptyBufferError> {
        if self.is_empty() {
            return Err(EmptyBufferError::new(operation));
        }
        self.storage[index]
            .as_mut()
            .ok_or(EmptyBufferError::new(operation))
    }

    fn take_slot(&mut self, index: usize, operation: Operation) -> Result<T, EmptyBufferError> {
        if self.is_empty() {
            return Err(EmptyBufferError::new(operation));
        }
        self.storage[index]
            .take()
            .ok_or(EmptyBufferError::new(operation))
    }

    // ----------------------------------------
    // GROWTH
    // ----------------------------------------

    /// Doubles the store, moving the elements to slots `0..size` in order.
    ///
    /// ## What Happens (Plain English)
    ///
    /// 1. Build a new, empty store twice as long (at least one slot)
    /// 2. Walk the old store from the front, wrapping around if needed,
    ///    and move each element into the next slot of the new one
    /// 3. The front now lives in slot 0 and the back in slot `size - 1`
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2).max(1);

        debug!(
            "Growing ring buffer: {} -> {} slots ({} elements)",
            old_capacity, new_capacity, self.size
        );

        let mut storage = Vec::with_capacity(new_capacity);
        for offset in 0..self.size {
            let index = self.physical(offset);
            storage.push(self.storage[index].take());
        }
        storage.resize_with(new_capacity, || None);

        self.storage = storage;
        self.head = 0;
        self.tail = self.size.saturating_sub(1);
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Returns cloned copies of all elements (front to back).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

// ============================================
// TRAIT IMPLEMENTATIONS
// ============================================

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two buffers are equal when they hold the same elements in the same
/// order, whatever their capacity or cursor positions.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for RingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut buffer = Self::new_with_capacity(lower.max(1));
        buffer.extend(iter);
        buffer
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================
// TESTS
// ============================================
