//! Random subject names for load queries.

/// Alphabet the random label is drawn from, 62 alphanumerics. The wire
/// codec folds names to lowercase when parsing, so the uppercase half
/// only widens the draw space; it never reaches the resolver as-is.
const LABEL_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed zone every generated subject falls under, trailing dot included.
pub const QUERY_SUFFIX: &str = ".a6008.com.";

/// Draws a `length`-character random label and appends the fixed suffix.
///
/// Uniform over the alphabet, no uniqueness guarantee. The caller owns
/// the generator, so two generators with equal seeds produce identical
/// name sequences.
pub fn random_subject(rng: &mut fastrand::Rng, length: usize) -> String {
    let mut name = String::with_capacity(length + QUERY_SUFFIX.len());
    for _ in 0..length {
        name.push(LABEL_ALPHABET[rng.usize(..LABEL_ALPHABET.len())] as char);
    }
    name.push_str(QUERY_SUFFIX);
    name
}
