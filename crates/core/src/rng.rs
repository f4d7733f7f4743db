//! RNG module - deterministic piece generation
//!
//! Two randomizers are supported:
//!
//! - **Uniform**: every draw picks one of the seven kinds with equal odds.
//! - **Bag**: the "7-bag" used by modern Tetris. Each bag holds one of each
//!   piece, shuffled, and is drawn empty before the next bag is generated.
//!
//! Both are driven by a simple LCG so a seed fully determines a game.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How the next piece kind is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag,
}

impl Randomizer {
    /// Parse from string (case-insensitive): "uniform" or "bag"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

/// Deterministic source of piece kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceQueue {
    randomizer: Randomizer,
    /// Current bag of pieces (bag mode only)
    bag: [PieceKind; 7],
    /// Index into current bag; 7 means exhausted
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32, randomizer: Randomizer) -> Self {
        let mut queue = Self {
            randomizer,
            bag: PieceKind::ALL,
            bag_index: 7,
            rng: SimpleRng::new(seed),
        };
        if randomizer == Randomizer::Bag {
            queue.refill_bag();
        }
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[i]
            }
            Randomizer::Bag => {
                if self.bag_index >= 7 {
                    self.refill_bag();
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    /// Get the current bag for testing/debugging (empty in uniform mode)
    #[cfg(test)]
    pub fn current_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index.min(7)..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1, Randomizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut queue = PieceQueue::new(1, Randomizer::Bag);
        assert_eq!(queue.current_bag().len(), 7);

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(queue.draw());
        }
        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert!(queue.current_bag().is_empty());

        // Eighth draw comes from a fresh bag.
        let _ = queue.draw();
        assert_eq!(queue.current_bag().len(), 6);
    }

    #[test]
    fn test_uniform_eventually_yields_every_kind() {
        let mut queue = PieceQueue::new(7, Randomizer::Uniform);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(queue.draw());
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_randomizer_parse() {
        assert_eq!(Randomizer::from_str("Bag"), Some(Randomizer::Bag));
        assert_eq!(Randomizer::from_str(" uniform "), Some(Randomizer::Uniform));
        assert_eq!(Randomizer::from_str("srs"), None);
    }
}
