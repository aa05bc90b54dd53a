//! # Configuration Module
//!
//! Settings for building a [`RingBuffer`](crate::RingBuffer) through the
//! validated [`RingBuffer::with_config`](crate::RingBuffer::with_config)
//! constructor.
//!
//! ## Plain English Explanation
//!
//! The only knob a ring buffer has is how many slots it starts with. A good
//! starting size avoids a few early growth steps; a bad one (zero, or more
//! memory than the machine can address) is caught here before anything is
//! allocated.

use std::mem;

use thiserror::Error;

use crate::buffer::DEFAULT_CAPACITY;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// Construction options for a ring buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How many slots the backing store starts with
    ///
    /// ## Plain English
    /// The buffer still grows past this whenever it fills up. This only
    /// decides how much memory is reserved before the first element arrives.
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Default: 32
    pub initial_capacity: usize,
}

impl Config {
    /// Creates a configuration with all default values
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates a configuration that starts with the given number of slots.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Smallest possible footprint; the buffer doubles as elements arrive.
    pub fn compact() -> Self {
        Self {
            initial_capacity: 1,
        }
    }

    /// For buffers expected to hold many elements from the start.
    pub fn bulk() -> Self {
        Self {
            initial_capacity: 1024,
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns an empty list when all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.initial_capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }

        errors
    }

    /// Like [`validate`](Self::validate), but also checks that the initial
    /// store for elements of type `T` fits in addressable memory.
    pub fn validate_for<T>(&self) -> Vec<ConfigError> {
        let mut errors = self.validate();

        let element_size = mem::size_of::<Option<T>>();
        let fits = self
            .initial_capacity
            .checked_mul(element_size)
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            errors.push(ConfigError::CapacityOverflow {
                requested: self.initial_capacity,
                element_size,
            });
        }

        errors
    }

    /// Bytes occupied by the initial backing store for elements of type `T`
    ///
    /// Saturates at `usize::MAX` when the product overflows.
    pub fn estimated_memory_bytes<T>(&self) -> usize {
        self.initial_capacity
            .saturating_mul(mem::size_of::<Option<T>>())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The buffer would start with no slots at all
    #[error("Initial capacity is zero (minimum 1)")]
    ZeroCapacity,

    /// The initial store would not fit in addressable memory
    #[error("Initial capacity {requested} with {element_size}-byte slots exceeds addressable memory")]
    CapacityOverflow {
        requested: usize,
        element_size: usize,
    },
}

// ============================================
// TESTS
// ============================================
