//! Splits extracted document text into bounded pieces for the completion
//! endpoint, preferring to cut at sentence, paragraph or word boundaries.
//!
//! Sizes and offsets count characters, not bytes, so multi-byte text is never
//! cut inside a code point.

use crate::config::DEFAULT_CHUNK_SIZE;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// One piece of the source document. `index` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits `text` using the default 30,000 character window.
pub fn chunk_with_default_size(text: &str) -> Vec<String> {
    chunk_text(text, DEFAULT_CHUNK_SIZE)
}

pub fn chunk_document(text: &str, max_chunk_size: usize) -> Vec<Chunk> {
    chunk_text(text, max_chunk_size)
        .into_iter()
        .enumerate()
        .map(|(i, text)| Chunk { index: i + 1, text })
        .collect()
}

/// Every returned chunk is trimmed and non-empty. The next window always
/// starts at the untrimmed cut point.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<String> {
    let max = max_chunk_size.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let proposed_end = start + max;
        let end = if proposed_end < chars.len() {
            start + boundary_offset(&chars[start..proposed_end], max)
        } else {
            chars.len()
        };

        let candidate: String = chars[start..end].iter().collect();
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        start = end;
    }

    chunks
}

/// Picks where a full window should end, relative to the window start.
fn boundary_offset(window: &[char], max: usize) -> usize {
    let last_sentence_end = last_pair_position(window, |a, b| {
        SENTENCE_TERMINATORS.contains(&a) && b == ' '
    });
    if let Some(pos) = last_sentence_end.filter(|&pos| beyond_fraction(pos, max, 7, 10)) {
        return pos + 2;
    }

    let last_paragraph = last_pair_position(window, |a, b| a == '\n' && b == '\n');
    if let Some(pos) = last_paragraph.filter(|&pos| beyond_fraction(pos, max, 1, 2)) {
        return pos + 2;
    }

    let last_space = window.iter().rposition(|&c| c == ' ');
    if let Some(pos) = last_space.filter(|&pos| beyond_fraction(pos, max, 1, 2)) {
        return pos + 1;
    }

    max
}

fn last_pair_position(window: &[char], matches: impl Fn(char, char) -> bool) -> Option<usize> {
    window.windows(2).rposition(|pair| matches(pair[0], pair[1]))
}

/// `pos > max * num / den` without floating point.
fn beyond_fraction(pos: usize, max: usize, num: usize, den: usize) -> bool {
    pos * den > max * num
}
