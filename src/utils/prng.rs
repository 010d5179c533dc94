use crate::core::PieceId;

/// Xorshift generator behind piece identity tokens.
///
/// Deterministic for a given seed so that two boards built the same way hand out the
/// same ids, which keeps test output and rendering keys reproducible.
#[derive(Debug, Clone)]
pub struct PRNG {
    s: (u64, u64, u64, u64),
}

impl PRNG {
    pub const fn new(seed: u64) -> Self {
        let s0 = seed;
        let s1 = seed.wrapping_mul(2);
        let s2 = seed.wrapping_div(5);
        let s3 = seed.wrapping_add(seed.wrapping_div(2));

        PRNG {
            s: (s0, s1, s2, s3),
        }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let t = self.s.1 << 17;
        self.s.2 ^= self.s.0;
        self.s.3 ^= self.s.1;
        self.s.1 ^= self.s.2;
        self.s.0 ^= self.s.3;
        self.s.2 ^= t;
        self.s.3 = self.s.3.rotate_left(45);

        self.s.0
    }

    /// Draws a fresh piece identity
    #[inline]
    pub fn next_id(&mut self) -> PieceId {
        PieceId(self.random_u64())
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(0x6B51FF299F6A3AEE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prng_sequence() {
        let mut prng = PRNG::new(12345);
        let first_sequence = (0..5).map(|_| prng.random_u64()).collect::<Vec<_>>();

        let mut prng = PRNG::new(12345);
        let second_sequence = (0..5).map(|_| prng.random_u64()).collect::<Vec<_>>();

        assert_eq!(first_sequence, second_sequence);
    }

    #[test]
    fn test_default_seed() {
        let mut prng1 = PRNG::default();
        let mut prng2 = PRNG::default();

        assert_eq!(prng1.next_id(), prng2.next_id());
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let mut prng = PRNG::default();
        let ids: HashSet<PieceId> = (0..1000).map(|_| prng.next_id()).collect();

        assert_eq!(ids.len(), 1000);
    }
}
