use rand::Rng;

/// `len` independent uniform values in `[0, i32::MAX)`. A fresh thread-local
/// generator per call; successive arrays share no observable state.
pub fn generate(len: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.random_range(0..i32::MAX));
    }
    values
}
