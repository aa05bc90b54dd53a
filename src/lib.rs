//! # Ring Deque
//!
//! A generic double-ended circular buffer that grows on demand. Push and pop
//! at either end are O(1) amortized; the backing store doubles whenever a
//! push finds it full.
//!
//! ## Architecture Overview
//!
//! - `buffer`: The ring buffer, its cursor arithmetic and iterators
//! - `config`: Validated construction settings
//! - `error`: Error types
//!
//! ## Example
//! ```
//! use ring_deque::RingBuffer;
//!
//! let mut queue = RingBuffer::new_with_capacity(2);
//! queue.push_back("b");
//! queue.push_back("c");
//! queue.push_front("a"); // full, so the store doubles first
//!
//! assert_eq!(queue.capacity(), 4);
//! assert_eq!(queue.pop_front(), Ok("a"));
//! assert_eq!(queue.pop_back(), Ok("c"));
//! assert_eq!(queue.peek_front(), Ok(&"b"));
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};
pub use config::{Config, ConfigError};
pub use error::{EmptyBufferError, Operation, RingError, RingResult};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for binaries and demos.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

// ============================================
// TESTS
// ============================================
