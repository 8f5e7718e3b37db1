//! Random source for choosing between equivalent reply variants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Chooses an index in `0..len` (`len` is always at least 1).
pub trait VariantPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Unseeded uniform choice from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl VariantPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Reproducible choice from a seeded RNG.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl VariantPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len.max(1)),
            Err(_) => 0,
        }
    }
}

/// Always the same index (clamped to the available variants).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick(4) < 4);
        }
    }

    #[test]
    fn seeded_pickers_agree() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let xs: Vec<usize> = (0..20).map(|_| a.pick(8)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick(8)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn fixed_picker_clamps() {
        assert_eq!(FixedPicker(2).pick(4), 2);
        assert_eq!(FixedPicker(9).pick(4), 3);
    }
}
