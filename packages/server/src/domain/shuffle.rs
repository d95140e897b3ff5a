//! Shuffle utility backed by a seedable RNG.

use std::sync::{Mutex, PoisonError};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Produces uniformly random permutations.
///
/// The RNG lives behind a `Mutex` so a single `Shuffler` can be shared (`Arc<Shuffler>`)
/// between use cases that only hold `&self`.
pub struct Shuffler {
    rng: Mutex<StdRng>,
}

impl Shuffler {
    /// Create a new `Shuffler`.
    ///
    /// * `Some(seed)` - reproducible sequence of permutations (tests, `--seed`)
    /// * `None` - seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Return a shuffled copy of `items`, leaving the input untouched.
    pub fn shuffled<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        // The RNG state stays usable even if a holder panicked mid-shuffle.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        copy.shuffle(&mut *rng);
        copy
    }
}

impl std::fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}
