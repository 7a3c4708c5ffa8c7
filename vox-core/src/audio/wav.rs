//! Minimal RIFF/WAVE container framing
//!
//! Explicit fixed-width little-endian writes at fixed offsets; compatibility
//! is bit-exact so no abstraction hides byte order or field width.

/// Canonical header: 12-byte RIFF chunk + 24-byte fmt chunk + 8-byte data
/// chunk header, no extension chunks.
pub const HEADER_LEN: usize = 44;

/// PCM audio format code in the fmt chunk.
const FORMAT_PCM: u16 = 1;

/// Wrap raw PCM samples in a self-describing WAVE file. Every derived field
/// is computed from the parameters; the encoder assumes nothing about rate,
/// channel count, or bit depth. Output length is exactly `44 + pcm.len()`.
pub fn encode(pcm: &[u8], sample_rate: u32, channels: u16, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_len = pcm.len() as u32;

    let mut out = Vec::with_capacity(HEADER_LEN + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);

    out
}
