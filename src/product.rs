use rand::Rng;

pub const MIN_FACTOR: u32 = 1;
pub const MAX_FACTOR: u32 = 42;

/// Two random factors in `[MIN_FACTOR, MAX_FACTOR]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomProduct {
    pub first: u32,
    pub second: u32,
}

impl RandomProduct {
    pub fn new(first: u32, second: u32) -> Self {
        RandomProduct { first, second }
    }

    /// Samples both factors independently.
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let first = rng.random_range(MIN_FACTOR..=MAX_FACTOR);
        let second = rng.random_range(MIN_FACTOR..=MAX_FACTOR);
        RandomProduct::new(first, second)
    }

    pub fn product(&self) -> u32 {
        self.first * self.second
    }
}
