use rand::Rng;

use crate::chars::FILLER_CHARS;

/// Overwrite `buf` with characters drawn uniformly from [`FILLER_CHARS`].
pub fn fill_visible<R: Rng + ?Sized>(rng: &mut R, buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = FILLER_CHARS[rng.random_range(0..FILLER_CHARS.len())];
    }
}

/// A `len` character string of random filler, e.g. for padding a hand-built header.
pub fn random_visible_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut buf = vec![0u8; len];
    fill_visible(rng, &mut buf);
    buf.into_iter().map(char::from).collect()
}
