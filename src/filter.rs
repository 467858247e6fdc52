//! Chirp body checks applied before anything reaches the store.

pub const MAX_CHIRP_LENGTH: u64 = 140;
pub const MASK: &str = "****";

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Masks profane words. Words are split on single spaces, so a word with
/// punctuation attached ("Sharbert!") is left alone.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
