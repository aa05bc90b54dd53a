//! # Buffer Module
//!
//! This module provides the growable double-ended ring buffer.
//!
//! ## Plain English Explanation
//!
//! Imagine a circular conveyor belt with a fixed number of spots. Items can
//! be placed at either end of the row of occupied spots, and taken off either
//! end. The row can start anywhere on the belt and wrap past the "first" spot.
//!
//! When every spot is occupied and one more item arrives, the belt is swapped
//! for one twice as long, with the items laid out again starting at the first
//! spot. That swap is the only slow step, and it happens rarely enough that
//! pushes stay O(1) on average.
//!
//! The buffer does no locking. Share it between threads the way you would a
//! `Vec`: behind a `Mutex`, or by keeping it on one thread.

mod iter;
mod ring_buffer;

pub use iter::{IntoIter, Iter};
pub use ring_buffer::{RingBuffer, DEFAULT_CAPACITY};
