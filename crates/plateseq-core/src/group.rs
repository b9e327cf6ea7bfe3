//! Groups: contiguous index ranges sharing one digit/letter split.
//!
//! The plate sequence is the concatenation of seven groups, ordered by
//! ascending letter count. Group `k` holds every plate with `6 - k` digits
//! followed by `k` letters, so it spans `10^(6-k) * 26^k` consecutive
//! indices. Group 0 is the pure-numeric block `"000000"..="999999"`; group 6
//! is the pure-letter block ending at `"ZZZZZZ"`.

use crate::charset::Charset;

/// The fixed length of every plate, in symbols.
pub const PLATE_LEN: usize = 6;

/// The total number of plates in the sequence, i.e. the sum of all group
/// sizes. Valid indices are `0..SEQUENCE_LEN`.
pub const SEQUENCE_LEN: u64 = {
    let mut total = 0;
    let mut k = 0;
    while k < Group::ALL.len() {
        total += Group::ALL[k].size();
        k += 1;
    }
    total
};

/// A contiguous run of sequence indices sharing a fixed split between
/// numeric-prefix length and letter-suffix length.
///
/// # Examples
///
/// ```
/// use plateseq_core::Group;
///
/// let group = Group::new(1);
/// assert_eq!(group.numeric_len(), 5);
/// assert_eq!(group.size(), 2_600_000);
/// assert_eq!(group.start(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    letters: u8,
}

impl Group {
    /// All seven groups, ordered by ascending letter count (0 to 6). The
    /// order is the sequence order: each group starts where the previous
    /// one ends.
    pub const ALL: [Self; PLATE_LEN + 1] = {
        let mut all = [Self { letters: 0 }; PLATE_LEN + 1];
        let mut k = 0;
        #[expect(clippy::cast_possible_truncation)]
        while k < all.len() {
            all[k] = Self { letters: k as u8 };
            k += 1;
        }
        all
    };

    /// Creates the group with the given letter count.
    ///
    /// # Panics
    ///
    /// Panics if `letters` is greater than 6.
    #[must_use]
    pub const fn new(letters: u8) -> Self {
        assert!(
            letters as usize <= PLATE_LEN,
            "letter count must be at most the plate length"
        );
        Self { letters }
    }

    /// Returns the length of the letter suffix (0-6).
    #[must_use]
    #[inline]
    pub const fn letter_len(self) -> usize {
        self.letters as usize
    }

    /// Returns the length of the numeric prefix (0-6).
    #[must_use]
    #[inline]
    pub const fn numeric_len(self) -> usize {
        PLATE_LEN - self.letter_len()
    }

    /// Returns the number of distinct numeric prefixes, `10^(6-k)`.
    #[must_use]
    #[inline]
    pub const fn numeric_combos(self) -> u64 {
        Charset::DIGITS.span(self.numeric_len())
    }

    /// Returns the number of distinct letter suffixes, `26^k`. This is the
    /// letter sub-radix used to decompose an in-group offset.
    #[must_use]
    #[inline]
    pub const fn letter_combos(self) -> u64 {
        Charset::LETTERS.span(self.letter_len())
    }

    /// Returns the number of indices this group spans, `10^(6-k) * 26^k`.
    #[must_use]
    #[inline]
    pub const fn size(self) -> u64 {
        self.numeric_combos() * self.letter_combos()
    }

    /// Returns the sequence index of this group's first plate.
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::Group;
    ///
    /// assert_eq!(Group::new(0).start(), 0);
    /// assert_eq!(Group::new(1).start(), 1_000_000);
    /// assert_eq!(Group::new(2).start(), 3_600_000);
    /// ```
    #[must_use]
    pub const fn start(self) -> u64 {
        let mut start = 0;
        let mut k = 0;
        while k < self.letter_len() {
            start += Self::ALL[k].size();
            k += 1;
        }
        start
    }

    /// Locates the group containing sequence index `n` and returns it with
    /// the offset of `n` within the group.
    ///
    /// The scan walks the groups in sequence order and is bounded by the
    /// seven-entry group table.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not less than [`SEQUENCE_LEN`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::Group;
    ///
    /// let (group, offset) = Group::locate(1_000_000);
    /// assert_eq!(group, Group::new(1));
    /// assert_eq!(offset, 0);
    /// ```
    #[must_use]
    pub fn locate(n: u64) -> (Self, u64) {
        assert!(n < SEQUENCE_LEN, "index {n} is past the end of the sequence");
        let mut remaining = n;
        for group in Self::ALL {
            if remaining < group.size() {
                return (group, remaining);
            }
            remaining -= group.size();
        }
        unreachable!("group sizes sum to SEQUENCE_LEN");
    }
}
