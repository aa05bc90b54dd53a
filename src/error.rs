//! # Error Types Module
//!
//! This module defines the error types used throughout the crate.
//!
//! ## Plain English Explanation
//!
//! There is really only one thing that can go wrong while using a ring
//! buffer: asking for an element when there are none. Everything else
//! (pushing, growing) always succeeds.
//!
//! The second family of errors comes from building a buffer out of a
//! [`Config`](crate::config::Config) that doesn't make sense, like asking
//! for zero slots up front.

use std::fmt;

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN CRATE ERROR
// ============================================

/// The main error type for this crate
///
/// ## Plain English
///
/// This is the "parent" error that can hold any of the more specific
/// errors. Use it when you mix buffer operations and configuration in
/// the same function and want a single `?`-friendly type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// An element was requested from an empty buffer
    #[error(transparent)]
    Empty(#[from] EmptyBufferError),

    /// The buffer configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// ============================================
// EMPTY BUFFER ERROR
// ============================================

/// Which read operation hit the empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    PopFront,
    PopBack,
    PeekFront,
    PeekBack,
}

impl Operation {
    /// The method name, as it appears in the public API.
    pub fn name(self) -> &'static str {
        match self {
            Self::PopFront => "pop_front",
            Self::PopBack => "pop_back",
            Self::PeekFront => "peek_front",
            Self::PeekBack => "peek_back",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by pops and peeks when the buffer holds no elements.
///
/// The buffer is left exactly as it was, so the caller can keep using it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} on an empty ring buffer")]
pub struct EmptyBufferError {
    operation: Operation,
}

impl EmptyBufferError {
    pub(crate) fn new(operation: Operation) -> Self {
        Self { operation }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses RingError
pub type RingResult<T> = Result<T, RingError>;

// ============================================
// TESTS
// ============================================
