//! Letters of the alphabet and compact letter sets
//!
//! A `LetterSet` is a 26-bit mask. Iteration is always alphabetical, so anything
//! derived from it (statistics, rankings, display) has a stable order.

use super::PuzzleError;
use std::fmt;

/// A single lowercase ASCII letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLetter` if `ch` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, PuzzleError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(PuzzleError::InvalidLetter(ch))
        }
    }

    /// Create a letter from a lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = 'a')
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// Alphabet index (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << (self.0 - b'a')
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Letter {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(PuzzleError::InvalidLetterText(s.to_string())),
        }
    }
}

/// A set of letters stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1 << Letter::COUNT) - 1);

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Add a letter, returning whether it was newly inserted
    #[inline]
    pub const fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= letter.bit();
        fresh
    }

    /// Remove a letter, returning whether it was present
    #[inline]
    pub const fn remove(&mut self, letter: Letter) -> bool {
        let present = self.contains(letter);
        self.0 &= !letter.bit();
        present
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::alphabet().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(letter('A'), letter('a'));
        assert_eq!(letter('z').index(), 25);
        assert_eq!(letter('a').index(), 0);
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert_eq!(Letter::new('1'), Err(PuzzleError::InvalidLetter('1')));
        assert!(Letter::new('_').is_err());
        assert!(Letter::new('é').is_err());
    }

    #[test]
    fn letter_from_str_requires_single_char() {
        assert_eq!("e".parse::<Letter>().unwrap(), letter('e'));
        assert!("".parse::<Letter>().is_err());
        assert!("ab".parse::<Letter>().is_err());
    }

    #[test]
    fn letter_index_round_trip() {
        for (i, l) in Letter::alphabet().enumerate() {
            assert_eq!(l.index(), i);
            assert_eq!(Letter::from_index(i), Some(l));
        }
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn full_set_has_all_letters() {
        assert_eq!(LetterSet::FULL.len(), 26);
        assert!(LetterSet::EMPTY.is_empty());
        assert_eq!(LetterSet::FULL.iter().count(), 26);
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(letter('q')));
        assert!(!set.insert(letter('q')));
        assert!(set.contains(letter('q')));
        assert!(set.remove(letter('q')));
        assert!(!set.remove(letter('q')));
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_alphabetical() {
        let set: LetterSet = "zebra".chars().map(letter).collect();
        let order: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(order, "aberz");
        assert_eq!(set.to_string(), "aberz");
    }

    #[test]
    fn set_algebra() {
        let abc: LetterSet = "abc".chars().map(letter).collect();
        let bcd: LetterSet = "bcd".chars().map(letter).collect();

        assert_eq!(abc.union(bcd).to_string(), "abcd");
        assert_eq!(abc.intersection(bcd).to_string(), "bc");
        assert_eq!(abc.difference(bcd).to_string(), "a");
        assert!(!abc.is_disjoint(bcd));
        assert!(abc.difference(bcd).is_disjoint(bcd));
    }
}
