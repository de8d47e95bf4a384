//! Word tokenizing for the staggered text entrance

use crate::animation::RevealConfig;

/// Delay between consecutive words, in seconds
pub const WORD_STAGGER_S: f64 = 0.08;

/// A word and its place in the entrance sequence
#[derive(Clone, Debug, PartialEq)]
pub struct WordToken {
    pub index: usize,
    pub text: String,
    pub delay_s: f64,
}

impl WordToken {
    /// Spring entrance for this word
    pub fn reveal(&self) -> RevealConfig {
        RevealConfig::word(self.delay_s)
    }
}

/// Split `text` on whitespace, keeping order. Blank input yields no tokens.
pub fn tokenize(text: &str) -> Vec<WordToken> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| WordToken {
            index,
            text: word.to_string(),
            delay_s: index as f64 * WORD_STAGGER_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn splits_in_order() {
        assert_eq!(words("a b c"), ["a", "b", "c"]);
        assert_eq!(words("  Hi,  I'm\tPrince "), ["Hi,", "I'm", "Prince"]);
    }

    #[test]
    fn delays_are_staggered() {
        let tokens = tokenize("one two three");
        assert_eq!(tokens[0].delay_s, 0.0);
        assert!((tokens[1].delay_s - 0.08).abs() < 1e-12);
        assert!((tokens[2].delay_s - 0.16).abs() < 1e-12);
        assert_eq!(tokens[2].index, 2);
    }
}
