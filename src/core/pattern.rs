//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Each position contributes digit × 3^position to a single `u32`, which holds
//! up to [`MAX_WORD_LEN`] positions. The length is stored alongside the value so
//! patterns of different lengths never compare equal.

use super::word::MAX_WORD_LEN;
use super::Word;
use crate::error::EngineError;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    value: u32,
    len: u8,
}

impl Pattern {
    /// All-correct pattern of the given length
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LEN`]
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_marks(&vec![Mark::Correct; len])
    }

    /// Build a pattern from explicit marks
    ///
    /// # Panics
    /// Panics in debug mode if more than [`MAX_WORD_LEN`] marks are given
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        debug_assert!(marks.len() <= MAX_WORD_LEN, "too many marks");

        let mut value = 0u32;
        let mut multiplier = 1u32;
        for &mark in marks {
            value += mark as u32 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            value,
            len: marks.len() as u8,
        }
    }

    /// Get the raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of positions
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Mark at a position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        assert!(position < self.len(), "position {position} out of range");
        Mark::from_digit(self.value / 3u32.pow(position as u32) % 3)
    }

    /// Iterate over the marks in position order
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        let mut val = self.value;
        (0..self.len()).map(move |_| {
            let mark = Mark::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.len())
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters: a letter is never marked correct or present more
    /// often than it occurs in the answer.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position from the remaining pool
    /// 3. Encode as base-3 number
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, EngineError> {
        if guess.len() != answer.len() {
            return Err(EngineError::LengthMismatch {
                guess: guess.len(),
                target: answer.len(),
            });
        }

        let mut result = vec![Mark::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Mark::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still unaccounted for
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self::from_marks(&result))
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.marks().filter(|&m| m == Mark::Correct).count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is implemented below too
    pub fn from_str(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(Mark::Correct),
                'Y' | 'y' | '🟨' => Some(Mark::Present),
                '-' | '_' | 'X' | 'x' | '⬜' => Some(Mark::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_marks(&marks))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().map(Mark::emoji).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).unwrap()
    }

    #[test]
    fn pattern_perfect() {
        let perfect = Pattern::perfect(5);
        assert_eq!(perfect.value(), 242);
        assert!(perfect.is_perfect());
        assert_eq!(perfect.count_correct(), 5);
        assert_eq!(perfect.count_present(), 0);
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_length_mismatch() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("cranes").unwrap();
        assert_eq!(
            Pattern::calculate(&guess, &answer),
            Err(EngineError::LengthMismatch {
                guess: 5,
                target: 6
            })
        );
    }

    #[test]
    fn pattern_duplicate_letters_present() {
        // SPEED vs ERASE: S present, both E present (ERASE has two E's)
        let pattern = calc("speed", "erase");
        assert_eq!(pattern, Pattern::from_str("Y-YY-").unwrap());
        assert_eq!(pattern.value(), 37);
    }

    #[test]
    fn pattern_duplicate_letters_correct_takes_priority() {
        // ROBOT vs FLOOR: first O present, second O correct
        let pattern = calc("robot", "floor");
        assert_eq!(pattern, Pattern::from_str("YY-G-").unwrap());
        assert_eq!(pattern.count_correct(), 1);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn pattern_llama_against_allow() {
        // Only two L's in ALLOW: one correct, one present. Second A is absent.
        let pattern = calc("llama", "allow");
        assert_eq!(pattern.to_emoji(), "🟨🟩🟨⬜⬜");
    }

    #[test]
    fn pattern_crane_against_crate() {
        let pattern = calc("crane", "crate");
        assert_eq!(
            pattern.marks().collect::<Vec<_>>(),
            [
                Mark::Correct,
                Mark::Correct,
                Mark::Correct,
                Mark::Absent,
                Mark::Correct
            ]
        );
    }

    #[test]
    fn pattern_mark_at() {
        let pattern = Pattern::from_str("GY-").unwrap();
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.mark_at(0), Mark::Correct);
        assert_eq!(pattern.mark_at(1), Mark::Present);
        assert_eq!(pattern.mark_at(2), Mark::Absent);
    }

    #[test]
    fn pattern_lengths_distinguish() {
        assert_ne!(Pattern::from_str("--").unwrap(), Pattern::from_str("---").unwrap());
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gygxx").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGZY").is_none());
        assert!(Pattern::from_str("").is_none());
        assert!(Pattern::from_str(&"G".repeat(MAX_WORD_LEN + 1)).is_none());
        assert!("GQ".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_longest_word_fits() {
        let perfect = Pattern::perfect(MAX_WORD_LEN);
        assert!(perfect.is_perfect());
        assert_eq!(perfect.count_correct(), MAX_WORD_LEN);
    }

    #[test]
    fn pattern_display_is_emoji() {
        assert_eq!(Pattern::from_str("GY-").unwrap().to_string(), "🟩🟨⬜");
    }

    fn word_strategy() -> impl Strategy<Value = (String, String)> {
        (1usize..=8).prop_flat_map(|len| {
            let letters = proptest::collection::vec(proptest::char::range('a', 'e'), len);
            (letters.clone(), letters).prop_map(|(g, t)| {
                (g.into_iter().collect::<String>(), t.into_iter().collect::<String>())
            })
        })
    }

    proptest! {
        #[test]
        fn marks_never_exceed_target_multiplicity((guess, target) in word_strategy()) {
            let pattern = calc(&guess, &target);
            for letter in b'a'..=b'e' {
                let hits = guess
                    .bytes()
                    .zip(pattern.marks())
                    .filter(|&(g, m)| g == letter && m != Mark::Absent)
                    .count();
                let available = target.bytes().filter(|&t| t == letter).count();
                prop_assert!(hits <= available);
            }
        }

        #[test]
        fn self_match_is_perfect((word, _) in word_strategy()) {
            prop_assert!(calc(&word, &word).is_perfect());
        }
    }
}
