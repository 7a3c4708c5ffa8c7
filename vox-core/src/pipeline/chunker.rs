//! Boundary-seeking text splitter
//!
//! Splits long input into bounded chunks ahead of per-chunk synthesis,
//! preferring paragraph breaks, then sentence ends, then spaces, before
//! forcing a mid-word split.

use crate::speech::types::TextChunk;

/// Split `text` into ordered chunks of at most `max_len` bytes.
///
/// Concatenating the chunks in order reconstructs `text` exactly. Empty input
/// yields zero chunks so the caller never spends a remote call on nothing.
/// Every recognized boundary is a single-byte character, so splits land on
/// char boundaries; the forced fallback floors to one. The only chunk that
/// can exceed `max_len` is the fallback for a window smaller than one code
/// point, which must still advance.
pub fn chunk(text: &str, max_len: usize) -> Vec<TextChunk> {
    assert!(max_len > 0, "chunk budget must be non-zero");

    if text.is_empty() {
        return Vec::new();
    }

    if text.len() <= max_len {
        return vec![TextChunk {
            content: text.to_string(),
            index: 0,
        }];
    }

    let mut chunks = Vec::new();
    let mut cursor = 0usize;

    while cursor < text.len() {
        // The rest fits in one chunk.
        if text.len() - cursor <= max_len {
            chunks.push(TextChunk {
                content: text[cursor..].to_string(),
                index: chunks.len(),
            });
            break;
        }

        let window_end = floor_char_boundary(text, cursor + max_len);
        let window = &text[cursor..window_end];

        let mut split = match find_split(window, max_len) {
            Some(offset) => cursor + offset,
            None => window_end,
        };

        // A window smaller than one code point must still advance.
        if split <= cursor {
            split = next_char_boundary(text, cursor);
        }

        chunks.push(TextChunk {
            content: text[cursor..split].to_string(),
            index: chunks.len(),
        });
        cursor = split;
    }

    chunks
}

/// Offset just past the best boundary in the window, or `None` to force a
/// split at the window edge.
fn find_split(window: &str, max_len: usize) -> Option<usize> {
    // Paragraph break first, to avoid breaking flow.
    if let Some(offset) = window.rfind("\n\n") {
        if offset > max_len / 2 {
            return Some(offset + 2);
        }
    }

    let sentence_end = [". ", "? ", "! "]
        .iter()
        .filter_map(|pattern| window.rfind(pattern))
        .max();
    if let Some(offset) = sentence_end {
        if offset > max_len / 2 {
            return Some(offset + 2);
        }
    }

    window.rfind(' ').map(|offset| offset + 1)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}
