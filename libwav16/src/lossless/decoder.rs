//! wav16 decoder

use std::io::{Read, Seek, Write};

use crate::core::range::{ByteSink, RangeDecoder};
use crate::core::types::Wav16Result;
use crate::reader::ByteReader;
use crate::writer::ByteWriter;

use super::{decode_residual, ModelTable, Predictor};

/// What a finished decompress pass did.
#[derive(Debug, Clone, Copy)]
pub struct DecodeSummary {
    /// Octets the range coder consumed from the source, readahead excluded.
    pub octets_in: u64,
    /// Octets reconstructed into the destination.
    pub octets_out: u64,
}

/// audio decoder for the wav16 stream format
pub struct Decoder {
    opt_var: u32,
}

impl Decoder {
    pub fn new() -> Self {
        Decoder { opt_var: 0 }
    }

    /// Accepted for symmetry with the encoder; must not change the output.
    pub fn with_opt_var(mut self, opt_var: u32) -> Self {
        self.opt_var = opt_var;
        self
    }

    pub fn opt_var(&self) -> u32 {
        self.opt_var
    }

    /// Reconstruct exactly `byte_count` octets from `input` into `output`.
    ///
    /// The stream is headerless, so `byte_count` must come from the caller.
    /// Counts that are not a multiple of four stop mid-frame: the frame is
    /// still decoded in full, only the octets within the budget are emitted.
    /// On return the source is repositioned right after the last octet the
    /// coder needed, so further streams can be decoded from the same source.
    ///
    /// A truncated source does not fail; it yields arbitrary octets.
    pub fn decompress<R: Read + Seek, W: Write>(
        &self,
        input: R,
        output: W,
        byte_count: u64,
    ) -> Wav16Result<DecodeSummary> {
        let mut sin = ByteReader::new(input);
        let mut sout = ByteWriter::new(output);
        let mut models = ModelTable::new();
        let mut rc = RangeDecoder::new(&mut sin)?;
        let mut predictor = Predictor::new();
        let mut remaining = byte_count;

        while remaining > 0 {
            let (pred_a, pred_b) = predictor.predict();
            let a = pred_a.wrapping_add(decode_residual(&mut rc, &mut sin, &mut models, 0)?);
            let b = pred_b.wrapping_add(decode_residual(&mut rc, &mut sin, &mut models, 1)?);
            for octet in [a as u8, (a >> 8) as u8, b as u8, (b >> 8) as u8] {
                if remaining == 0 {
                    break;
                }
                sout.put(octet)?;
                remaining -= 1;
            }
            predictor.update(a, b);
        }

        sout.flush()?;
        sin.rewind_unread()?;

        let summary = DecodeSummary {
            octets_in: sin.octets_read(),
            octets_out: byte_count,
        };
        tracing::debug!(
            octets_in = summary.octets_in,
            octets_out = summary.octets_out,
            "stream decompressed"
        );
        Ok(summary)
    }

    /// decompress a byte slice into a fresh buffer of `byte_count` octets
    pub fn decompress_bytes(&self, data: &[u8], byte_count: usize) -> Wav16Result<Vec<u8>> {
        let mut out = Vec::with_capacity(byte_count);
        self.decompress(std::io::Cursor::new(data), &mut out, byte_count as u64)?;
        Ok(out)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
