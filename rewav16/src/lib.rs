//! rewav16 - file packer around the wav16 codec
//!
//! The raw wav16 stream is headerless; the codec leaves length framing to its
//! caller. This crate is that caller: it writes a small header (magic plus
//! little-endian u64 payload length) in front of the coded stream, and reads
//! it back before decompressing.

pub mod pcm;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

use anyhow::{bail, Context, Result};

/// Magic at the start of a packed file.
pub const MAGIC: [u8; 4] = *b"WV16";

/// Header size: magic plus the payload length.
pub const HEADER_LEN: usize = 12;

/// What the header of a packed file says.
#[derive(Debug, Clone, Copy)]
pub struct PackedInfo {
    /// Uncompressed payload length in octets.
    pub payload_len: u64,
    /// Whole file length, header included.
    pub packed_len: usize,
}

impl PackedInfo {
    /// original size over packed size
    pub fn ratio(&self) -> f64 {
        if self.packed_len == 0 {
            return 0.0;
        }
        self.payload_len as f64 / self.packed_len as f64
    }
}

/// Pack raw PCM octets into a framed wav16 file.
pub fn pack_bytes(data: &[u8], opt_var: u32) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(HEADER_LEN + data.len() / 2);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&(data.len() as u64).to_le_bytes());
    libwav16_audio::Encoder::new()
        .with_opt_var(opt_var)
        .compress(data, &mut out, data.len() as u64)
        .context("Failed to compress payload")?;
    Ok(out)
}

/// Unpack a framed wav16 file back to raw PCM octets.
pub fn unpack_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let info = parse_header(data)?;
    let payload_len =
        usize::try_from(info.payload_len).context("Payload does not fit this platform")?;
    libwav16_audio::Decoder::new()
        .decompress_bytes(&data[HEADER_LEN..], payload_len)
        .context("Failed to decompress payload")
}

/// Read and validate the header of a packed file.
pub fn parse_header(data: &[u8]) -> Result<PackedInfo> {
    if data.len() < HEADER_LEN {
        bail!("File too small to be a wav16 file");
    }
    if data[..4] != MAGIC {
        bail!("Invalid wav16 file: bad magic");
    }
    let payload_len = u64::from_le_bytes(data[4..HEADER_LEN].try_into().unwrap_or([0; 8]));
    Ok(PackedInfo {
        payload_len,
        packed_len: data.len(),
    })
}
