//! Binary range coder over an octet stream.
//!
//! Carry-propagating arithmetic coder with a 32-bit window. The encoder holds
//! the last settled octet in `cache` and counts a run of pending 0xFF octets
//! so that a late carry can ripple through them before anything is written.
//! The decoder mirrors normalization exactly, pulling one octet per eight-bit
//! shift, which keeps its read count equal to the encoder's write count.

use std::io;

use crate::core::types::PROB_BITS;

/// Renormalize once `range` drops below this bound.
const TOP: u32 = 1 << 24;

/// Destination for coded octets.
pub trait ByteSink {
    fn put(&mut self, octet: u8) -> io::Result<()>;
}

/// Source of coded octets; `None` signals end of input.
pub trait ByteSource {
    fn get(&mut self) -> io::Result<Option<u8>>;
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, octet: u8) -> io::Result<()> {
        self.push(octet);
        Ok(())
    }
}

impl ByteSource for &[u8] {
    fn get(&mut self) -> io::Result<Option<u8>> {
        match self.split_first() {
            Some((&octet, rest)) => {
                *self = rest;
                Ok(Some(octet))
            }
            None => Ok(None),
        }
    }
}

/// Encoding half of the range coder.
pub struct RangeEncoder {
    /// Low edge of the window; bit 32 holds a carry until the next shift.
    low: u64,
    range: u32,
    /// Last settled octet, held back one shift in case a carry lands on it.
    cache: Option<u8>,
    /// Octets equal to 0xFF between `cache` and the live window; a carry
    /// turns the whole run into 0x00.
    pending_ff: u64,
}

impl RangeEncoder {
    pub fn new() -> Self {
        RangeEncoder {
            low: 0,
            range: u32::MAX,
            cache: None,
            pending_ff: 0,
        }
    }

    /// Code one bit whose probability of being zero is `p`/4096. `p` must
    /// stay in [1, 4095] so neither partition empties.
    pub fn encode<S: ByteSink>(&mut self, sink: &mut S, bit: u32, p: i32) -> io::Result<()> {
        let mid = (self.range >> PROB_BITS) * p as u32;
        if bit == 0 {
            self.range = mid;
        } else {
            self.low += u64::from(mid);
            self.range -= mid;
        }
        self.normalize(sink)
    }

    /// Code one bit at probability one half, bypassing any model.
    pub fn encode_direct<S: ByteSink>(&mut self, sink: &mut S, bit: u32) -> io::Result<()> {
        self.range >>= 1;
        if bit != 0 {
            self.low += u64::from(self.range);
        }
        self.normalize(sink)
    }

    /// Push out the remaining window so the decoder can finish. Call once
    /// after the last coded bit; the encoder is spent afterwards.
    pub fn flush<S: ByteSink>(&mut self, sink: &mut S) -> io::Result<()> {
        for _ in 0..5 {
            self.shift_low(sink)?;
        }
        Ok(())
    }

    fn normalize<S: ByteSink>(&mut self, sink: &mut S) -> io::Result<()> {
        while self.range < TOP {
            self.shift_low(sink)?;
            self.range <<= 8;
        }
        Ok(())
    }

    fn shift_low<S: ByteSink>(&mut self, sink: &mut S) -> io::Result<()> {
        let low32 = self.low as u32;
        let carry = (self.low >> 32) as u8;
        if low32 < 0xFF00_0000 || carry != 0 {
            if let Some(octet) = self.cache {
                sink.put(octet.wrapping_add(carry))?;
            }
            while self.pending_ff > 0 {
                sink.put(0xFFu8.wrapping_add(carry))?;
                self.pending_ff -= 1;
            }
            self.cache = Some((low32 >> 24) as u8);
        } else {
            // Top octet is 0xFF and no carry has landed yet; hold it.
            self.pending_ff += 1;
        }
        self.low = u64::from(low32 << 8);
        Ok(())
    }
}

impl Default for RangeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoding half of the range coder.
pub struct RangeDecoder {
    range: u32,
    /// Offset of the coded value inside the current window.
    code: u32,
}

impl RangeDecoder {
    /// Build a decoder, preloading the code register from the first four
    /// input octets.
    pub fn new<S: ByteSource>(src: &mut S) -> io::Result<Self> {
        let mut code = 0u32;
        for _ in 0..4 {
            code = (code << 8) | u32::from(next_octet(src)?);
        }
        Ok(RangeDecoder {
            range: u32::MAX,
            code,
        })
    }

    /// Decode one bit coded with probability `p`/4096 of being zero.
    pub fn decode<S: ByteSource>(&mut self, src: &mut S, p: i32) -> io::Result<u32> {
        let mid = (self.range >> PROB_BITS) * p as u32;
        let bit = if self.code < mid {
            self.range = mid;
            0
        } else {
            self.code -= mid;
            self.range -= mid;
            1
        };
        self.normalize(src)?;
        Ok(bit)
    }

    /// Decode one unmodelled half-probability bit.
    pub fn decode_direct<S: ByteSource>(&mut self, src: &mut S) -> io::Result<u32> {
        self.range >>= 1;
        let bit = if self.code < self.range {
            0
        } else {
            self.code -= self.range;
            1
        };
        self.normalize(src)?;
        Ok(bit)
    }

    fn normalize<S: ByteSource>(&mut self, src: &mut S) -> io::Result<()> {
        while self.range < TOP {
            self.code = (self.code << 8) | u32::from(next_octet(src)?);
            self.range <<= 8;
        }
        Ok(())
    }
}

/// Octets past the end of a truncated stream read back as 0xFF; the decoded
/// output is arbitrary from that point on but decoding never fails.
fn next_octet<S: ByteSource>(src: &mut S) -> io::Result<u8> {
    Ok(src.get()?.unwrap_or(0xFF))
}
