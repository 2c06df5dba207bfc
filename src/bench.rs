use crate::error::{MatrixError, MatrixResult};
use crate::matrix::square::SquareMatrix;
use log::info;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Worker 0 logs its progression every `PROGRESS_STEP` trials.
pub const PROGRESS_STEP: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dimension of the random square matrices.
    pub size: usize,
    pub trials: u64,
    /// Worker count for [`run`]. Ignored by [`run_single_threaded`].
    pub threads: usize,
    /// Cells are integers drawn uniformly from `low..=high`.
    pub low: i32,
    pub high: i32,
    /// Fixed seed for reproducible runs; worker `w` uses `seed + w`.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> BenchConfig {
        BenchConfig {
            size: 7,
            trials: 1_000_000,
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            low: -10,
            high: 10,
            seed: None,
        }
    }
}

impl BenchConfig {
    fn validate(&self) -> MatrixResult<()> {
        if self.threads == 0 {
            return Err(MatrixError::InvalidBenchConfig("no worker threads".into()));
        }
        if self.low > self.high {
            return Err(MatrixError::InvalidBenchConfig(format!(
                "empty value range {}..={}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub trials: u64,
    pub nonsingular: u64,
    pub degenerate: u64,
    /// Time spent inside `invert` only; populating the matrices is excluded.
    pub inversion_time: Duration,
}

impl BenchReport {
    /// Mean seconds per `invert` call, 0 for an empty run.
    pub fn average_seconds(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.inversion_time.as_secs_f64() / self.trials as f64
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nonsingular: {}; degenerate: {}.",
            self.nonsingular, self.degenerate
        )?;
        writeln!(
            f,
            "Time spent in inversion functions: {} s.",
            self.inversion_time.as_secs_f64()
        )?;
        write!(
            f,
            "Average inversion time per matrix: {} s.",
            self.average_seconds()
        )
    }
}

/// Inverts `config.trials` random matrices spread over `config.threads`
/// workers, each with its own generator.
pub fn run(config: &BenchConfig) -> MatrixResult<BenchReport> {
    config.validate()?;

    let threads = config.threads;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let nonsingular = AtomicU64::new(0);
    let degenerate = AtomicU64::new(0);
    // Durations have no atomic counterpart
    let inversion_time = Mutex::new(Duration::ZERO);

    info!(
        "Inverting {} random {}x{} matrices on {} threads",
        config.trials, config.size, config.size, threads
    );

    pool.install(|| {
        (0..threads).into_par_iter().for_each(|worker| {
            let mut rng = worker_rng(config.seed, worker);
            let elapsed = time_random_matrices(
                config,
                worker_share(config.trials, threads, worker),
                worker == 0,
                &mut rng,
                |inverted| {
                    let counter = if inverted { &nonsingular } else { &degenerate };
                    counter.fetch_add(1, Ordering::Relaxed);
                },
            );

            *inversion_time
                .lock()
                .unwrap_or_else(PoisonError::into_inner) += elapsed;
        })
    });

    Ok(BenchReport {
        trials: config.trials,
        nonsingular: nonsingular.into_inner(),
        degenerate: degenerate.into_inner(),
        inversion_time: inversion_time
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner),
    })
}

/// Same workload as [`run`], on the calling thread.
pub fn run_single_threaded(config: &BenchConfig) -> MatrixResult<BenchReport> {
    config.validate()?;

    let mut nonsingular = 0;
    let mut degenerate = 0;
    let mut rng = worker_rng(config.seed, 0);

    let inversion_time =
        time_random_matrices(config, config.trials, true, &mut rng, |inverted| {
            if inverted {
                nonsingular += 1;
            } else {
                degenerate += 1;
            }
        });

    Ok(BenchReport {
        trials: config.trials,
        nonsingular,
        degenerate,
        inversion_time,
    })
}

// Populates and inverts `trials` matrices, calling `record` once per trial
// with whether the inversion succeeded. Returns the time spent in `invert`.
fn time_random_matrices(
    config: &BenchConfig,
    trials: u64,
    show_progress: bool,
    rng: &mut StdRng,
    mut record: impl FnMut(bool),
) -> Duration {
    let distribution = Uniform::new_inclusive(config.low, config.high);
    let started = Instant::now();
    let mut elapsed = Duration::ZERO;

    for trial in 0..trials {
        if show_progress {
            show_progression(trial, trials, started);
        }

        let mut matrix = SquareMatrix::from_fn(config.size, |_, _| {
            f64::from(distribution.sample(&mut *rng))
        });

        let start = Instant::now();
        let result = matrix.invert();
        elapsed += start.elapsed();

        record(result.is_ok());
    }
    elapsed
}

fn worker_rng(seed: Option<u64>, worker: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
        None => StdRng::from_entropy(),
    }
}

// The first `trials % workers` workers take one extra trial.
fn worker_share(trials: u64, workers: usize, worker: usize) -> u64 {
    let workers = workers as u64;
    let worker = worker as u64;
    trials / workers + u64::from(worker < trials % workers)
}

#[inline(always)]
fn show_progression(done: u64, total: u64, started: Instant) {
    if done == 0 || done % PROGRESS_STEP != 0 {
        return;
    }

    let elapsed = started.elapsed().as_secs_f64();
    let remaining = elapsed * (total - done) as f64 / done as f64;

    info!(
        "[ ] Progression {}% - {:.1}s - ~{:.1}s left - {} / {}",
        done * 100 / total,
        elapsed,
        remaining,
        done,
        total
    );
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
