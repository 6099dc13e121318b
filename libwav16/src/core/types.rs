//! common types and fixed constants for the wav16 codec

use thiserror::Error;

// probability fixed point

/// Fractional bits of the fixed-point bit probabilities.
pub const PROB_BITS: u32 = 12;

/// One in probability units: 4096.
pub const PROB_MAX: i32 = 1 << PROB_BITS;

/// Shift applied when moving a probability toward an observed bit.
pub const LEARN_RATE: u32 = 9;

// residual bit split
//
// The three values below plus PROB_BITS form a single compatibility tuple:
// changing any of them changes every coded stream.

/// Low residual bits coded directly at probability one half.
pub const NOISE_BITS: u32 = 3;

/// High residual bits walked through the adaptive context tree.
pub const MODELED_BITS: u32 = 16 - NOISE_BITS;

/// Outer-context width baked into the model table size. The outer context is
/// always zero for now; the table keeps room for it anyway.
pub const CONTEXT_BITS: u32 = 2;

// errors

/// Errors produced by the codec and its ring primitives.
#[derive(Error, Debug)]
pub enum Wav16Error {
    /// Ring buffers only accept power-of-two capacities.
    #[error("ring capacity must be a power of two, got {0}")]
    BadConfiguration(usize),

    /// An underlying read, write or seek failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// result type for wav16 stuff
pub type Wav16Result<T> = std::result::Result<T, Wav16Error>;
