//! Compact set of ball numbers.
//!
//! Both the called-set and a player's marked-set are `NumberSet`s. Numbers
//! are stored as bits of a `u128`, so cloning is free, equality is exact and
//! iteration is always ascending regardless of insertion order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowest ball number.
pub const MIN_NUMBER: u8 = 1;

/// Highest ball number.
pub const MAX_NUMBER: u8 = 75;

/// Total balls in a game.
pub const BALL_COUNT: usize = MAX_NUMBER as usize;

/// Check whether a number is a valid ball.
#[must_use]
pub const fn is_ball(number: u8) -> bool {
    number >= MIN_NUMBER && number <= MAX_NUMBER
}

/// Set of numbers in `1..=75`.
///
/// Duplicates are tolerated on insertion. Numbers outside `1..=75` are
/// ignored, since they can never appear on a card.
///
/// ```
/// use myngo::core::NumberSet;
///
/// let marked: NumberSet = [12, 3, 12, 99].into_iter().collect();
/// assert_eq!(marked.len(), 2);
/// assert_eq!(marked.iter().collect::<Vec<_>>(), vec![3, 12]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumberSet {
    bits: u128,
}

impl NumberSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set containing every ball `1..=75`.
    #[must_use]
    pub fn full() -> Self {
        (MIN_NUMBER..=MAX_NUMBER).collect()
    }

    /// Insert a number. Returns `true` if it was newly added.
    pub fn insert(&mut self, number: u8) -> bool {
        if !is_ball(number) {
            return false;
        }
        let added = !self.contains(number);
        self.bits |= 1u128 << number;
        added
    }

    /// Remove a number. Returns `true` if it was present.
    pub fn remove(&mut self, number: u8) -> bool {
        if !self.contains(number) {
            return false;
        }
        self.bits &= !(1u128 << number);
        true
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(&self, number: u8) -> bool {
        is_ball(number) && self.bits & (1u128 << number) != 0
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Members present in both sets.
    #[must_use]
    pub const fn intersection(&self, other: &NumberSet) -> NumberSet {
        NumberSet { bits: self.bits & other.bits }
    }

    /// Members present in either set.
    #[must_use]
    pub const fn union(&self, other: &NumberSet) -> NumberSet {
        NumberSet { bits: self.bits | other.bits }
    }

    /// Check if every member of `self` is in `other`.
    #[must_use]
    pub const fn is_subset(&self, other: &NumberSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (MIN_NUMBER..=MAX_NUMBER).filter(move |&n| self.contains(n))
    }
}

impl FromIterator<u8> for NumberSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = NumberSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for NumberSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for number in iter {
            self.insert(number);
        }
    }
}

impl From<&[u8]> for NumberSet {
    fn from(numbers: &[u8]) -> Self {
        numbers.iter().copied().collect()
    }
}

// Serialized as a sorted list so stored game state stays readable.
impl Serialize for NumberSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for NumberSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let numbers = Vec::<u8>::deserialize(deserializer)?;
        Ok(numbers.into_iter().collect())
    }
}
