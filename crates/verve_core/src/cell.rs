//! Single-writer, multi-reader scalar cells
//!
//! A [`ScalarCell`] holds one f32 that gesture handlers write and the render
//! pipeline reads every frame. Splitting the cell yields exactly one
//! [`ScalarWriter`] (not `Clone`) and a cloneable [`ScalarReader`], so the
//! single-writer invariant is enforced at the type level: the rendering side
//! only ever holds read-only views.
//!
//! Writes are release stores and reads are acquire loads on the f32 bit
//! pattern, so the cell needs no lock even when the writer sits on an
//! input-processing thread and readers sit on the UI thread.
//!
//! # Example
//!
//! ```
//! use verve_core::ScalarCell;
//!
//! let (writer, reader) = ScalarCell::new(1.0).split();
//! writer.set(0.96);
//! assert_eq!(reader.get(), 0.96);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A shared scalar cell, created with an initial value and then split into
/// its writer and reader halves
pub struct ScalarCell {
    bits: Arc<AtomicU32>,
}

impl ScalarCell {
    /// Create a cell holding `initial`
    pub fn new(initial: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(initial.to_bits())),
        }
    }

    /// Split into the single writer and the first reader
    ///
    /// Further readers come from [`ScalarReader::clone`] or
    /// [`ScalarWriter::reader`].
    pub fn split(self) -> (ScalarWriter, ScalarReader) {
        let reader = ScalarReader {
            bits: self.bits.clone(),
        };
        (ScalarWriter { bits: self.bits }, reader)
    }
}

/// The writing half of a [`ScalarCell`]
///
/// There is exactly one writer per cell. `set` takes `&self` because the
/// store is atomic; a gesture's lifecycle closures may therefore share the
/// writer through an `Arc` as long as the gesture runtime serializes them,
/// which keeps the cell single-writer in practice.
pub struct ScalarWriter {
    bits: Arc<AtomicU32>,
}

impl ScalarWriter {
    /// Store a new value
    pub fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    /// Read the value back (writer-side convenience)
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Create an additional read-only view of this cell
    pub fn reader(&self) -> ScalarReader {
        ScalarReader {
            bits: self.bits.clone(),
        }
    }
}

/// A read-only view of a [`ScalarCell`]
#[derive(Clone)]
pub struct ScalarReader {
    bits: Arc<AtomicU32>,
}

impl ScalarReader {
    /// Read the current value
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_round_trip() {
        let (writer, reader) = ScalarCell::new(0.5).split();
        assert_eq!(reader.get(), 0.5);

        writer.set(42.0);
        assert_eq!(reader.get(), 42.0);
        assert_eq!(writer.get(), 42.0);
    }

    #[test]
    fn test_cloned_readers_observe_writes() {
        let (writer, reader) = ScalarCell::new(0.0).split();
        let second = reader.clone();
        let third = writer.reader();

        writer.set(-2.5);
        assert_eq!(reader.get(), -2.5);
        assert_eq!(second.get(), -2.5);
        assert_eq!(third.get(), -2.5);
    }

    #[test]
    fn test_cross_thread_visibility() {
        let (writer, reader) = ScalarCell::new(0.0).split();

        let handle = std::thread::spawn(move || {
            writer.set(7.0);
        });
        handle.join().unwrap();

        assert_eq!(reader.get(), 7.0);
    }
}
