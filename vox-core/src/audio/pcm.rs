use crate::speech::types::AudioSegment;

/// Merge ordered audio segments into one contiguous PCM buffer. Byte-identical
/// concatenation: no resampling, no gain adjustment, no cross-fade.
pub fn concatenate(segments: &[AudioSegment]) -> Vec<u8> {
    let total: usize = segments.iter().map(|s| s.pcm.len()).sum();

    let mut buffer = Vec::with_capacity(total);
    for segment in segments {
        buffer.extend_from_slice(&segment.pcm);
    }

    debug_assert_eq!(buffer.len(), total);
    buffer
}
