use rand::Rng;

/// Number of letters stored in each file.
pub const LETTER_COUNT: usize = 10;

/// Draws `len` lowercase ASCII letters, each one independently and uniformly.
/// Letters may repeat.
pub fn random_letters<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}
