//! Longest-match search over the sliding window.
//!
//! The greedy rule is: the longest match of at least [`MIN_MATCH`] bytes
//! starting within `window_size` bytes before the cursor, with ties going to
//! the smallest distance. Matches may run past the cursor (distance smaller
//! than length).
//!
//! [`MatchFinder`] answers this with hash chains over 3-byte prefixes. Every
//! position in the window is linked and chains are walked to the window edge
//! without a depth limit, in order of increasing distance, so the result is
//! identical to the exhaustive scan in [`find_longest_match_brute_force`].

use crate::config::MIN_MATCH;

/// Size of the hash table (power of 2).
const HASH_SIZE: usize = 1 << 15;

/// Hash mask.
const HASH_MASK: usize = HASH_SIZE - 1;

/// Empty chain marker.
const NIL: usize = usize::MAX;

/// A back-reference candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Bytes back from the cursor (>= 1).
    pub distance: usize,
    /// Matched length (>= `MIN_MATCH`).
    pub length: usize,
}

/// Hash-chain match finder over one input buffer.
#[derive(Debug)]
pub struct MatchFinder<'a> {
    data: &'a [u8],
    window_size: usize,
    /// Most recent position for each hash.
    head: Vec<usize>,
    /// Previous position with the same hash, per position.
    prev: Vec<usize>,
    /// Positions below this are linked into the chains.
    inserted: usize,
}

impl<'a> MatchFinder<'a> {
    /// Create a finder for `data` with the given window.
    pub fn new(data: &'a [u8], window_size: usize) -> Self {
        Self {
            data,
            window_size,
            head: vec![NIL; HASH_SIZE],
            prev: vec![NIL; data.len()],
            inserted: 0,
        }
    }

    #[inline(always)]
    fn hash(b0: u8, b1: u8, b2: u8) -> usize {
        let h = ((b0 as usize).wrapping_mul(506832829))
            ^ ((b1 as usize).wrapping_mul(2654435761) << 8)
            ^ ((b2 as usize).wrapping_mul(374761393) << 16);
        (h ^ (h >> 15)) & HASH_MASK
    }

    #[inline]
    fn hash_at(&self, pos: usize) -> Option<usize> {
        let bytes = self.data.get(pos..pos + MIN_MATCH)?;
        Some(Self::hash(bytes[0], bytes[1], bytes[2]))
    }

    /// Link every position before `end` into the hash chains.
    pub fn insert_up_to(&mut self, end: usize) {
        let end = end.min(self.data.len());
        while self.inserted < end {
            let pos = self.inserted;
            if let Some(h) = self.hash_at(pos) {
                self.prev[pos] = self.head[h];
                self.head[h] = pos;
            }
            self.inserted += 1;
        }
    }

    /// Find the best match for the bytes at `pos`, at most `max_len` long.
    ///
    /// All positions before `pos` are linked first.
    pub fn find(&mut self, pos: usize, max_len: usize) -> Option<Match> {
        self.insert_up_to(pos);
        if max_len < MIN_MATCH || pos + max_len > self.data.len() {
            return None;
        }

        let h = self.hash_at(pos)?;
        let min_pos = pos.saturating_sub(self.window_size);
        let mut candidate = self.head[h];
        let mut best: Option<Match> = None;

        while candidate != NIL && candidate >= min_pos {
            let length = match_length(self.data, candidate, pos, max_len);
            if length > best.map_or(MIN_MATCH - 1, |m| m.length) {
                best = Some(Match {
                    distance: pos - candidate,
                    length,
                });
                if length == max_len {
                    break;
                }
            }
            candidate = self.prev[candidate];
        }

        best
    }
}

/// Length of the common run at `candidate` and `pos`, capped at `max_len`.
///
/// `candidate < pos`; the run may extend past `pos`.
#[inline]
fn match_length(data: &[u8], candidate: usize, pos: usize, max_len: usize) -> usize {
    data[pos..pos + max_len]
        .iter()
        .zip(&data[candidate..])
        .take_while(|(a, b)| a == b)
        .count()
}

/// Exhaustive scan of every window offset, nearest first.
///
/// Reference implementation of the greedy rule; [`MatchFinder`] must agree
/// with it everywhere.
pub fn find_longest_match_brute_force(
    data: &[u8],
    pos: usize,
    window_size: usize,
    max_len: usize,
) -> Option<Match> {
    if max_len < MIN_MATCH || pos + max_len > data.len() {
        return None;
    }

    let mut best: Option<Match> = None;
    for distance in 1..=pos.min(window_size) {
        let length = match_length(data, pos - distance, pos, max_len);
        if length > best.map_or(MIN_MATCH - 1, |m| m.length) {
            best = Some(Match { distance, length });
            if length == max_len {
                break;
            }
        }
    }
    best
}
