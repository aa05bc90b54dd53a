//! # Ring Deque Walkthrough
//!
//! Shows the buffer wrapping around, growing, and reporting empty-buffer
//! errors.
//!
//! Run with: `RUST_LOG=debug cargo run --example walkthrough`

use anyhow::{Context, Result};

use ring_deque::{Config, RingBuffer};

fn main() -> Result<()> {
    // Initialize logging so growth steps show up at debug level
    ring_deque::init_logging();

    let mut queue = RingBuffer::with_config(&Config::with_initial_capacity(4))
        .context("building the demo buffer")?;

    println!("Starting capacity: {}", queue.capacity());

    // Fill, drain half, and refill so the window wraps past slot 0
    queue.extend(1..=4);
    for _ in 0..2 {
        let value = queue.pop_front()?;
        println!("   served {}", value);
    }
    queue.extend(5..=6);
    println!("After wrapping: {:?} (capacity {})", queue, queue.capacity());

    // One more push while full doubles the store
    queue.push_back(7);
    queue.push_front(0);
    println!("After growing:  {:?} (capacity {})", queue, queue.capacity());

    println!("Front: {}, back: {}", queue.peek_front()?, queue.peek_back()?);

    // Drain from the back to show LIFO order
    let mut from_back = Vec::new();
    while let Ok(value) = queue.pop_back() {
        from_back.push(value);
    }
    println!("Drained from back: {:?}", from_back);

    match queue.pop_front() {
        Ok(value) => println!("Unexpected value {}", value),
        Err(err) => println!("Empty buffer says: {}", err),
    }

    Ok(())
}
