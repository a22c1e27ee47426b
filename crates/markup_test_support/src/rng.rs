pub const SEED_MIX: u64 = 0x9e3779b97f4a7c15;

/// Small deterministic generator so seeded runs reproduce without extra crates.
#[derive(Clone, Debug)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { SEED_MIX } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    pub fn gen_range_usize(&mut self, start: usize, end: usize) -> usize {
        assert!(start < end, "invalid range: {start}..{end}");
        let span = (end - start) as u64;
        // High bits of an LCG are the well-mixed ones.
        ((self.next_u64() >> 33) % span) as usize + start
    }

    /// True with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.gen_range_usize(0, 100) < percent as usize
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.gen_range_usize(0, items.len())]
    }
}

/// Seed for iteration `iter` of a case, mixed so neighbouring cases do not overlap.
pub fn iteration_seed(base: u64, iter: usize) -> u64 {
    base ^ (iter as u64).wrapping_mul(SEED_MIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = LcgRng::new(7);
        let mut b = LcgRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = LcgRng::new(0);
        for _ in 0..1_000 {
            let v = rng.gen_range_usize(3, 9);
            assert!((3..9).contains(&v));
        }
    }
}
