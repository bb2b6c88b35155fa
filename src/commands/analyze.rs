//! Guess analysis command
//!
//! Measures how a guess splits the space of possible secrets: every secret
//! of distinct digits with the guess's length is scored, and the resulting
//! hints are tallied into a distribution.

use crate::core::code::ALPHABET_SIZE;
use crate::core::hint::score_digits;
use crate::core::{Code, GameError, Hint};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    /// Number of distinct-digit secrets of the guess's length
    pub total_secrets: usize,
    /// Secrets per hint, closest-to-solved first
    pub distribution: Vec<(Hint, usize)>,
    /// Shannon entropy of the hint distribution in bits
    pub entropy: f64,
    /// Expected number of secrets still consistent after seeing the hint
    pub expected_remaining: f64,
    /// Largest number of secrets sharing one hint
    pub max_partition: usize,
}

/// Analyze `guess` against every distinct-digit secret of the same length
///
/// Work is split by secret prefix and scored in parallel. When
/// `show_progress` is set a progress bar tracks completed prefixes.
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid code
/// - The guess is longer than 10 digits (no distinct-digit secret exists)
pub fn analyze_guess(guess: &str, show_progress: bool) -> Result<AnalysisResult, GameError> {
    let guess = Code::new(guess)?;
    let length = guess.len();

    if secret_space_size(length) == 0 {
        return Err(GameError::SecretLength {
            requested: length,
            max: ALPHABET_SIZE,
        });
    }

    let prefixes = secret_prefixes(length.min(2));
    let pb = progress_bar(prefixes.len(), show_progress);

    let counts = prefixes
        .par_iter()
        .map(|prefix| {
            let mut used = [false; ALPHABET_SIZE];
            for &d in prefix {
                used[usize::from(d)] = true;
            }

            let mut buffer = Vec::with_capacity(length);
            buffer.extend_from_slice(prefix);

            let mut local = FxHashMap::default();
            tally_hints(&mut buffer, &mut used, guess.digits(), &mut local);
            pb.inc(1);
            local
        })
        .reduce(FxHashMap::default, merge_counts);

    pb.finish_and_clear();

    let total_secrets: usize = counts.values().sum();
    debug!(
        "analyzed {guess} against {total_secrets} secrets, {} distinct hints",
        counts.len()
    );

    let mut distribution: Vec<(Hint, usize)> = counts.into_iter().collect();
    distribution.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let total = total_secrets as f64;
    let entropy: f64 = distribution
        .iter()
        .map(|&(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    let expected_remaining: f64 = distribution
        .iter()
        .map(|&(_, count)| count as f64 * count as f64 / total)
        .sum();
    let max_partition = distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    Ok(AnalysisResult {
        guess: guess.to_string(),
        total_secrets,
        distribution,
        entropy,
        expected_remaining,
        max_partition,
    })
}

/// Number of distinct-digit secrets of `length` digits
#[must_use]
pub fn secret_space_size(length: usize) -> usize {
    if length > ALPHABET_SIZE {
        return 0;
    }
    (ALPHABET_SIZE + 1 - length..=ALPHABET_SIZE).product()
}

/// All distinct-digit sequences of `depth` digits
fn secret_prefixes(depth: usize) -> Vec<Vec<u8>> {
    let mut prefixes = vec![Vec::new()];

    for _ in 0..depth {
        let mut next = Vec::with_capacity(prefixes.len() * ALPHABET_SIZE);
        for prefix in &prefixes {
            for d in 0..ALPHABET_SIZE as u8 {
                if !prefix.contains(&d) {
                    let mut extended = prefix.clone();
                    extended.push(d);
                    next.push(extended);
                }
            }
        }
        prefixes = next;
    }

    prefixes
}

/// Extend `buffer` to every completion with unused digits, scoring each
fn tally_hints(
    buffer: &mut Vec<u8>,
    used: &mut [bool; ALPHABET_SIZE],
    guess: &[u8],
    counts: &mut FxHashMap<Hint, usize>,
) {
    if buffer.len() == guess.len() {
        *counts.entry(score_digits(buffer, guess)).or_insert(0) += 1;
        return;
    }

    for d in 0..ALPHABET_SIZE {
        if used[d] {
            continue;
        }
        used[d] = true;
        buffer.push(d as u8);
        tally_hints(buffer, used, guess, counts);
        buffer.pop();
        used[d] = false;
    }
}

fn merge_counts(
    mut acc: FxHashMap<Hint, usize>,
    other: FxHashMap<Hint, usize>,
) -> FxHashMap<Hint, usize> {
    for (hint, count) in other {
        *acc.entry(hint).or_insert(0) += count;
    }
    acc
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}
