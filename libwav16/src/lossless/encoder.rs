//! wav16 encoder

use std::io::{Read, Write};

use crate::core::range::{ByteSource, RangeEncoder};
use crate::core::types::Wav16Result;
use crate::reader::ByteReader;
use crate::writer::ByteWriter;

use super::{encode_residual, ModelTable, Predictor, FRAME_OCTETS};

/// What a finished compress pass did.
#[derive(Debug, Clone, Copy)]
pub struct EncodeSummary {
    /// Octets consumed from the source.
    pub octets_in: u64,
    /// Octets emitted, flush tail included.
    pub octets_out: u64,
    /// Sum of absolute prediction errors across both channels, a cheap
    /// proxy for how well the signal fit the predictor.
    pub prediction_error: u64,
}

/// audio encoder for the wav16 stream format
pub struct Encoder {
    opt_var: u32,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder { opt_var: 0 }
    }

    /// Set the reserved tuning variable. Accepted and recorded for offline
    /// experiments; must not change the coded stream.
    pub fn with_opt_var(mut self, opt_var: u32) -> Self {
        self.opt_var = opt_var;
        self
    }

    pub fn opt_var(&self) -> u32 {
        self.opt_var
    }

    /// Compress up to `max_count` octets from `input` into `output`.
    ///
    /// Input is consumed as four-octet frames. A trailing short frame is
    /// padded with 0xFF octets and still coded in full; the decoder's octet
    /// budget trims the padding back off. The compressed stream carries no
    /// header or length, the caller keeps `max_count` out of band.
    pub fn compress<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        max_count: u64,
    ) -> Wav16Result<EncodeSummary> {
        let mut sin = ByteReader::new(input);
        let mut sout = ByteWriter::new(output);
        let mut models = ModelTable::new();
        let mut rc = RangeEncoder::new();
        let mut predictor = Predictor::new();
        let mut prediction_error: u64 = 0;
        let mut octets_in: u64 = 0;

        while octets_in < max_count {
            let budget = (max_count - octets_in).min(FRAME_OCTETS as u64) as usize;
            let mut frame = [0xFFu8; FRAME_OCTETS];
            let mut got = 0;
            while got < budget {
                match sin.get()? {
                    Some(octet) => {
                        frame[got] = octet;
                        got += 1;
                    }
                    None => break,
                }
            }
            if got == 0 {
                break;
            }
            octets_in += got as u64;

            let a = u16::from_le_bytes([frame[0], frame[1]]);
            let b = u16::from_le_bytes([frame[2], frame[3]]);
            let (pred_a, pred_b) = predictor.predict();
            prediction_error += u64::from((i32::from(a) - i32::from(pred_a)).unsigned_abs());
            prediction_error += u64::from((i32::from(b) - i32::from(pred_b)).unsigned_abs());

            encode_residual(&mut rc, &mut sout, &mut models, 0, a.wrapping_sub(pred_a))?;
            encode_residual(&mut rc, &mut sout, &mut models, 1, b.wrapping_sub(pred_b))?;
            predictor.update(a, b);

            if got < FRAME_OCTETS {
                break;
            }
        }

        rc.flush(&mut sout)?;
        sout.flush()?;

        let summary = EncodeSummary {
            octets_in,
            octets_out: sout.octets_written(),
            prediction_error,
        };
        tracing::debug!(
            octets_in = summary.octets_in,
            octets_out = summary.octets_out,
            prediction_error = summary.prediction_error,
            "stream compressed"
        );
        Ok(summary)
    }

    /// compress a byte slice into a fresh buffer
    pub fn compress_bytes(&self, data: &[u8]) -> Wav16Result<Vec<u8>> {
        let mut out = Vec::new();
        self.compress(data, &mut out, data.len() as u64)?;
        Ok(out)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
