//! Text corruption effect applied to the current lyric line.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Combining marks mixed into glitched text.
const GLITCH_MARKS: [char; 18] = [
    '\u{0334}', '\u{0335}', '\u{0336}', '\u{0337}', '\u{0338}', '\u{0321}', '\u{0322}', '\u{0327}',
    '\u{0328}', '\u{031B}', '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031C}', '\u{031D}',
    '\u{031E}', '\u{031F}',
];

/// Chance of appending a combining mark after any given character.
const GLITCH_PROBABILITY: f64 = 0.3;

/// Derive the glitch seed for one painted frame.
///
/// The seed depends only on the elapsed time and the current line index, so
/// repainting the same frame corrupts the text identically.
#[must_use]
pub fn frame_seed(elapsed: Duration, index: usize) -> u64 {
    let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    millis ^ (index as u64).rotate_left(32)
}

/// Inject combining marks into `text`, keeping every source character.
#[must_use]
pub fn glitch(text: &str, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        out.push(ch);
        if rng.gen_bool(GLITCH_PROBABILITY) {
            out.push(GLITCH_MARKS[rng.gen_range(0..GLITCH_MARKS.len())]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_output() {
        let text = "And the stars look very different today";
        assert_eq!(glitch(text, 42), glitch(text, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        let text = "And the stars look very different today";
        assert_ne!(glitch(text, 1), glitch(text, 2));
    }

    #[test]
    fn test_base_characters_preserved_in_order() {
        let text = "Ground control to Major Tom";
        let glitched = glitch(text, 7);
        let stripped: String = glitched.chars().filter(|c| !GLITCH_MARKS.contains(c)).collect();
        assert_eq!(stripped, text);
    }

    #[test]
    fn test_only_known_marks_added() {
        let text = "abc";
        for seed in 0..20 {
            for ch in glitch(text, seed).chars() {
                assert!(text.contains(ch) || GLITCH_MARKS.contains(&ch));
            }
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(glitch("", 3), "");
    }

    #[test]
    fn test_frame_seed_varies_with_inputs() {
        let base = frame_seed(Duration::from_millis(1500), 2);
        assert_eq!(base, frame_seed(Duration::from_millis(1500), 2));
        assert_ne!(base, frame_seed(Duration::from_millis(1600), 2));
        assert_ne!(base, frame_seed(Duration::from_millis(1500), 3));
    }
}
