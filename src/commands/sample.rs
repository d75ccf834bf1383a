//! Secret distribution sampling
//!
//! Draws many secrets and tallies how often each peg lands in each position.
//! A fair generator puts every peg in every position 1/8 of the time.

use crate::core::{CODE_LENGTH, Code, PEG_COUNT};
use crate::game::CodeGenerator;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::info;

/// Secrets drawn per parallel work unit
const CHUNK_SIZE: usize = 10_000;

/// Result of a sampling run
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub total: usize,
    /// `position_counts[position][peg index]`
    pub position_counts: [[usize; PEG_COUNT]; CODE_LENGTH],
    pub distinct_codes: usize,
    /// Draws that failed code validation (always 0 for a correct generator)
    pub invalid_codes: usize,
    pub duration: Duration,
}

impl SampleReport {
    /// 8 * 7 * 6 * 5 ordered codes without repeats
    pub const POSSIBLE_CODES: usize = 1680;

    /// Largest `|observed - expected| / expected` over every position and peg
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.total as f64 / PEG_COUNT as f64;
        self.position_counts
            .iter()
            .flatten()
            .map(|&count| (count as f64 - expected).abs() / expected)
            .fold(0.0, f64::max)
    }
}

/// Partial counts from one chunk
#[derive(Default)]
struct Tally {
    drawn: usize,
    position_counts: [[usize; PEG_COUNT]; CODE_LENGTH],
    codes: FxHashSet<Code>,
    invalid: usize,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.drawn += other.drawn;
        for (mine, theirs) in self.position_counts.iter_mut().zip(&other.position_counts) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self.codes.extend(other.codes);
        self.invalid += other.invalid;
        self
    }
}

fn sample_chunk(seed: u64, count: usize) -> Tally {
    let mut generator = CodeGenerator::seeded(seed);
    let mut tally = Tally::default();

    for _ in 0..count {
        let code = generator.generate();
        if Code::new(*code.pegs()).is_err() {
            tally.invalid += 1;
        }
        for (position, peg) in code.pegs().iter().enumerate() {
            tally.position_counts[position][peg.index()] += 1;
        }
        tally.codes.insert(code);
    }

    tally.drawn = count;
    tally
}

/// Draw `count` secrets across all cores
///
/// Each chunk gets its own generator seeded from `seed` (or a random base
/// seed), so a fixed seed always yields the same report counts.
pub fn run_sample(count: usize, seed: Option<u64>, show_progress: bool) -> SampleReport {
    let base_seed = seed.unwrap_or_else(rand::random);
    let chunks = count.div_ceil(CHUNK_SIZE);
    info!(count, chunks, base_seed, "sampling secrets");

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let size = CHUNK_SIZE.min(count - chunk * CHUNK_SIZE);
            let tally = sample_chunk(base_seed.wrapping_add(chunk as u64), size);
            pb.inc(size as u64);
            tally
        })
        .reduce(Tally::default, Tally::merge);
    pb.finish_with_message("Complete!");

    SampleReport {
        total: tally.drawn,
        position_counts: tally.position_counts,
        distinct_codes: tally.codes.len(),
        invalid_codes: tally.invalid,
        duration: start.elapsed(),
    }
}
