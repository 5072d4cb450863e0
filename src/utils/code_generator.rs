//! Random shortcode generation.
//!
//! Codes are short alphanumeric identifiers. The generator wraps an explicit
//! seedable PRNG so tests can pin the sequence while production draws its
//! seed from the operating system.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of generated shortcodes.
///
/// Matches the shortcode validation window of 3-20 characters.
pub const CODE_LENGTH: usize = 6;

/// Seedable generator for random alphanumeric shortcodes.
#[derive(Debug)]
pub struct CodeGenerator {
    rng: StdRng,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed for deterministic output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the next shortcode: [`CODE_LENGTH`] alphanumeric characters.
    pub fn generate(&mut self) -> String {
        (0..CODE_LENGTH)
            .map(|_| char::from(self.rng.sample(Alphanumeric)))
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_expected_length() {
        let mut generator = CodeGenerator::new();
        assert_eq!(generator.generate().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_is_alphanumeric() {
        let mut generator = CodeGenerator::new();
        let code = generator.generate();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = CodeGenerator::seeded(42);
        let mut b = CodeGenerator::seeded(42);

        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = CodeGenerator::seeded(1);
        let mut b = CodeGenerator::seeded(2);
        assert_ne!(a.generate(), b.generate());
    }

    #[test]
    fn test_generate_produces_varied_codes() {
        let mut generator = CodeGenerator::seeded(7);
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(codes.len(), 1000);
    }
}
