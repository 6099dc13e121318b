//! Lossless compressor for 16-bit stereo PCM audio samples.
//!
//! The stream format is a bare range-coded bit sequence: per frame, two
//! 16-bit little-endian samples are predicted from per-channel history, and
//! the residuals are coded one bit at a time through an adaptive model, with
//! the lowest noise bits passed through raw. There is no header; the caller
//! carries the uncompressed octet count out of band.
//!
//! # Example
//!
//! ```
//! let pcm: Vec<u8> = vec![0x34, 0x12, 0x78, 0x56].repeat(64);
//! let packed = libwav16_audio::compress(&pcm).unwrap();
//! let unpacked = libwav16_audio::decompress(&packed, pcm.len()).unwrap();
//! assert_eq!(unpacked, pcm);
//! ```

pub mod core;
pub mod lossless;

mod reader;
mod writer;

pub use crate::core::{
    BitModel, ByteSink, ByteSource, CyclicBuffer, CyclicDeque, RangeDecoder, RangeEncoder,
    Wav16Error, Wav16Result,
};
pub use lossless::{DecodeSummary, Decoder, EncodeSummary, Encoder, Predictor, FRAME_OCTETS};
pub use reader::ByteReader;
pub use writer::ByteWriter;

// api functions

/// compress a pcm byte buffer with default settings
pub fn compress(data: &[u8]) -> Wav16Result<Vec<u8>> {
    Encoder::new().compress_bytes(data)
}

/// decompress back into `byte_count` pcm octets
pub fn decompress(data: &[u8], byte_count: usize) -> Wav16Result<Vec<u8>> {
    Decoder::new().decompress_bytes(data, byte_count)
}

/// get lib version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// tests
