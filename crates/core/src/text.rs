//! Text normalization and the similarity ratio used for grading.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

/// `b` lengths from which very frequent chars stop seeding matches.
const POPULAR_MIN_LEN: usize = 200;

/// Reduce `text` to a comparison form.
///
/// Accents are decomposed and dropped (`é` → `e`), everything is lower-cased,
/// and any char that is not an ASCII letter, digit or whitespace is removed.
/// The result is only used for comparison and is never stored.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Similarity ratio in `[0.0, 1.0]`: `2 * M / T`.
///
/// `T` is the combined char length of both strings and `M` the number of chars
/// covered by matching blocks, found by taking the longest common block and
/// recursing into the unmatched text on either side of it. Two empty strings
/// are identical (`1.0`).
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = BlockMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    // Positions of each char in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Total size of all matching blocks.
    fn matched_len(&self) -> usize {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut matched = 0;

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, size) = self.longest_match(alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            matched += size;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }

        matched
    }

    /// Longest block with `a[i..i+size] == b[j..j+size]` inside the given
    /// windows. Ties resolve to the smallest `i`, then the smallest `j`.
    fn longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = j
                        .checked_sub(1)
                        .and_then(|p| j2len.get(&p))
                        .copied()
                        .unwrap_or(0);
                    let size = prev + 1;
                    next_j2len.insert(j, size);
                    if size > best_size {
                        best_i = i + 1 - size;
                        best_j = j + 1 - size;
                        best_size = size;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular chars never seed a match but may still extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn normalize_strips_accents_case_and_punctuation() {
        assert_eq!(normalize("Válvulas!!"), "valvulas");
        assert_eq!(normalize("ENIAC, 1945."), "eniac 1945");
        assert_eq!(normalize("Ação & Reação"), "acao  reacao");
        assert_eq!(normalize("日本 ok"), " ok");
    }

    #[test]
    fn normalize_output_is_restricted_and_idempotent() {
        let samples = [
            "Hello, World!",
            "Crème brûlée — 42%",
            "\tTabs\nand newlines\r",
            "Ünïcödé ßtraße",
            "",
            "@#$%^&*()",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert!(
                once.chars().all(|c| c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || c.is_ascii_whitespace()
                    || c == '\x0b'),
                "unexpected char in {once:?}"
            );
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn identical_strings_are_fully_similar() {
        assert_close(similarity("eniac", "eniac"), 1.0);
        assert_close(similarity("charles babbage", "charles babbage"), 1.0);
    }

    #[test]
    fn empty_inputs() {
        assert_close(similarity("", ""), 1.0);
        assert_close(similarity("abc", ""), 0.0);
        assert_close(similarity("", "abc"), 0.0);
    }

    #[test]
    fn ratio_matches_block_alignment() {
        // "abcd" vs "bcde": block "bcd" → 2 * 3 / 8
        assert_close(similarity("abcd", "bcde"), 0.75);
        // one dropped letter: 2 * 5 / 11
        assert_close(similarity("vacuum", "vacum"), 10.0 / 11.0);
        // "tube" inside "tubes": 2 * 4 / 9
        assert_close(similarity("tube", "tubes"), 8.0 / 9.0);
        assert_close(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn recursion_counts_blocks_on_both_sides() {
        // longest block "abc", then "d" to its right
        assert_close(similarity("abcxd", "abcyd"), 0.8);
        assert_close(similarity("qabxcd", "abycdf"), 2.0 * 4.0 / 12.0);
    }

    #[test]
    fn similarity_is_symmetric_for_typical_answers() {
        let pairs = [
            ("alan turing", "alan turin"),
            ("vacuum", "vacum"),
            ("charles babbage", "babbage charles"),
            ("1945", "1946"),
        ];
        for (a, b) in pairs {
            assert_close(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn long_reference_still_matches_itself() {
        let long = "the analytical engine ".repeat(12);
        assert!(long.len() >= POPULAR_MIN_LEN);
        assert_close(similarity(&long, &long), 1.0);
    }

    #[test]
    fn unrelated_text_scores_low() {
        assert!(similarity("a computer", "eniac") < 0.7);
    }
}
