//! PoW generation (multi-threaded CPU).

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::{seal_digest, Difficulty, WorkError, WorkNonce};

/// Nonces evaluated per batch before checking the cancellation flag.
const BATCH_SIZE: u64 = 4096;

/// Optional bounds on a single search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits<'a> {
    /// Highest nonce that may be tried (inclusive).
    pub max_nonce: Option<u64>,
    /// Checked between batches; once set, the search stops with `Cancelled`.
    pub cancel: Option<&'a AtomicBool>,
}

impl<'a> SearchLimits<'a> {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_nonce(mut self, max_nonce: Option<u64>) -> Self {
        self.max_nonce = max_nonce;
        self
    }

    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Searches for the smallest nonce whose seal digest meets a difficulty.
///
/// Nonces are scanned in ascending batches. Within a batch every core
/// participates, and `find_map_first` keeps the lowest hit, so the result is
/// identical to a sequential scan from zero.
#[derive(Default)]
pub struct WorkGenerator {
    pool: Option<ThreadPool>,
}

impl WorkGenerator {
    /// Use rayon's global thread pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Use a dedicated pool with `threads` workers (0 falls back to the global pool).
    pub fn with_threads(threads: usize) -> Result<Self, WorkError> {
        if threads == 0 {
            return Ok(Self::new());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("votechain-work-{i}"))
            .build()
            .map_err(|e| WorkError::ThreadPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }

    /// Generate a work nonce for `preimage` that meets `difficulty`.
    pub fn generate(
        &self,
        preimage: &[u8],
        difficulty: Difficulty,
        limits: SearchLimits<'_>,
    ) -> Result<WorkNonce, WorkError> {
        let last = limits.max_nonce.unwrap_or(u64::MAX);
        let mut start = 0u64;

        loop {
            if limits.is_cancelled() {
                return Err(WorkError::Cancelled);
            }

            let end = start.saturating_add(BATCH_SIZE - 1).min(last);
            let found = self.install(|| {
                (start..=end).into_par_iter().find_map_first(|nonce| {
                    let hash = seal_digest(preimage, nonce);
                    difficulty
                        .is_met_by(&hash)
                        .then_some(WorkNonce { nonce, hash })
                })
            });

            if let Some(work) = found {
                return Ok(work);
            }
            if end == last {
                return Err(WorkError::Exhausted { max_nonce: last });
            }
            start = end + 1;
        }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_work;

    /// Reference linear scan used to check the parallel search.
    fn sequential_scan(preimage: &[u8], difficulty: Difficulty) -> u64 {
        (0..)
            .find(|nonce| validate_work(preimage, *nonce, difficulty))
            .unwrap()
    }

    #[test]
    fn test_generate_work() {
        let generator = WorkGenerator::new();
        let difficulty = Difficulty::new(2);

        let work = generator
            .generate(b"block-42", difficulty, SearchLimits::unbounded())
            .unwrap();

        assert!(validate_work(b"block-42", work.nonce, difficulty));
        assert_eq!(work.hash, seal_digest(b"block-42", work.nonce));
    }

    #[test]
    fn finds_the_smallest_nonce() {
        let difficulty = Difficulty::new(3);
        let generator = WorkGenerator::with_threads(4).unwrap();

        for preimage in [&b"a"[..], b"vote", b"0genesis"] {
            let work = generator
                .generate(preimage, difficulty, SearchLimits::unbounded())
                .unwrap();
            assert_eq!(work.nonce, sequential_scan(preimage, difficulty));
        }
    }

    #[test]
    fn test_zero_difficulty() {
        let generator = WorkGenerator::new();
        let work = generator
            .generate(b"x", Difficulty::new(0), SearchLimits::unbounded())
            .unwrap();
        assert_eq!(work.nonce, 0);
    }

    #[test]
    fn exhausts_when_bound_is_too_low() {
        let generator = WorkGenerator::new();
        let limits = SearchLimits::unbounded().with_max_nonce(Some(10));
        let err = generator
            .generate(b"x", Difficulty::new(16), limits)
            .unwrap_err();
        assert!(matches!(err, WorkError::Exhausted { max_nonce: 10 }));
    }

    #[test]
    fn cancelled_flag_stops_search() {
        let generator = WorkGenerator::new();
        let cancel = AtomicBool::new(true);
        let limits = SearchLimits::unbounded().with_cancel(&cancel);
        let err = generator
            .generate(b"x", Difficulty::new(16), limits)
            .unwrap_err();
        assert!(matches!(err, WorkError::Cancelled));
    }
}
