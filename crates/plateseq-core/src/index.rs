//! Validated sequence indices and the checked lookup entry point.

use std::{fmt, str::FromStr};

use crate::{
    error::PlateError,
    group::SEQUENCE_LEN,
    plate::Plate,
};

/// A sequence index known to be within the enumeration, `0..SEQUENCE_LEN`.
///
/// Construction is the single validation point: once a `PlateIndex` exists,
/// [`Plate::at`] cannot fail. Parse user input with [`FromStr`], which maps
/// negative, fractional, or non-numeric text to
/// [`PlateError::InvalidIndex`].
///
/// # Examples
///
/// ```
/// use plateseq_core::{PlateError, PlateIndex};
///
/// let index = PlateIndex::new(1_000_000)?;
/// assert_eq!(index.get(), 1_000_000);
///
/// let err = PlateIndex::new(501_363_136).unwrap_err();
/// assert_eq!(err, PlateError::OutOfRange { max: 501_363_135 });
/// # Ok::<(), plateseq_core::PlateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlateIndex(u64);

impl PlateIndex {
    /// The first index, `"000000"`.
    pub const MIN: Self = Self(0);

    /// The last valid index, `"ZZZZZZ"`.
    pub const MAX: Self = Self(SEQUENCE_LEN - 1);

    /// Validates `index` against the sequence bound.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::OutOfRange`] (carrying the maximum valid
    /// index) if `index >= SEQUENCE_LEN`.
    pub const fn new(index: u64) -> Result<Self, PlateError> {
        if index < SEQUENCE_LEN {
            Ok(Self(index))
        } else {
            Err(PlateError::out_of_range())
        }
    }

    /// Returns the index value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for PlateIndex {
    type Error = PlateError;

    /// Converts a signed value, rejecting negatives as
    /// [`PlateError::InvalidIndex`] before the range check.
    fn try_from(index: i64) -> Result<Self, PlateError> {
        let index = u64::try_from(index).map_err(|_| PlateError::InvalidIndex)?;
        Self::new(index)
    }
}

impl FromStr for PlateIndex {
    type Err = PlateError;

    /// Parses decimal text into a validated index.
    ///
    /// Non-integer text (`"3.5"`, `"-1"`, `"abc"`) is
    /// [`PlateError::InvalidIndex`]; integers past the end of the sequence,
    /// however large, are [`PlateError::OutOfRange`].
    fn from_str(s: &str) -> Result<Self, PlateError> {
        let value: u128 = s.parse().map_err(|_| PlateError::InvalidIndex)?;
        let value = u64::try_from(value).map_err(|_| PlateError::out_of_range())?;
        Self::new(value)
    }
}

impl fmt::Display for PlateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Computes the plate at sequence index `n`.
///
/// This is the checked entry point, pure and safe to call concurrently; it
/// validates `n` and unranks it via [`Plate::at`] without generating any
/// preceding plate.
///
/// # Errors
///
/// Returns [`PlateError::OutOfRange`], carrying the maximum valid index, if
/// `n` is past the end of the sequence.
///
/// # Examples
///
/// ```
/// use plateseq_core::plate_at_index;
///
/// assert_eq!(plate_at_index(0)?.as_str(), "000000");
/// assert_eq!(plate_at_index(999_999)?.as_str(), "999999");
/// assert_eq!(plate_at_index(1_000_000)?.as_str(), "00000A");
/// # Ok::<(), plateseq_core::PlateError>(())
/// ```
pub fn plate_at_index(n: u64) -> Result<Plate, PlateError> {
    Ok(Plate::at(PlateIndex::new(n)?))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::group::Group;

    #[test]
    fn test_new_bounds() {
        assert!(PlateIndex::new(0).is_ok());
        assert!(PlateIndex::new(SEQUENCE_LEN - 1).is_ok());
        assert_eq!(
            PlateIndex::new(SEQUENCE_LEN),
            Err(PlateError::OutOfRange {
                max: SEQUENCE_LEN - 1
            })
        );
        assert_eq!(PlateIndex::MAX.get(), SEQUENCE_LEN - 1);
        assert_eq!(PlateIndex::MIN.get(), 0);
    }

    #[test]
    fn test_try_from_signed() {
        assert_eq!(PlateIndex::try_from(7_i64).unwrap().get(), 7);
        assert_eq!(PlateIndex::try_from(-1_i64), Err(PlateError::InvalidIndex));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0".parse::<PlateIndex>().unwrap().get(), 0);
        assert_eq!("1000000".parse::<PlateIndex>().unwrap().get(), 1_000_000);

        assert_eq!("-1".parse::<PlateIndex>(), Err(PlateError::InvalidIndex));
        assert_eq!("3.5".parse::<PlateIndex>(), Err(PlateError::InvalidIndex));
        assert_eq!("abc".parse::<PlateIndex>(), Err(PlateError::InvalidIndex));
        assert_eq!("".parse::<PlateIndex>(), Err(PlateError::InvalidIndex));

        assert_eq!(
            "501363136".parse::<PlateIndex>(),
            Err(PlateError::OutOfRange { max: 501_363_135 })
        );
        // Values past u64 are still a range problem, not a syntax problem.
        assert_eq!(
            "99999999999999999999999".parse::<PlateIndex>(),
            Err(PlateError::OutOfRange { max: 501_363_135 })
        );
    }

    #[test]
    fn test_plate_at_index_out_of_range_reports_max() {
        let err = plate_at_index(SEQUENCE_LEN).unwrap_err();
        assert_eq!(err, PlateError::OutOfRange { max: 501_363_135 });
    }

    /// Test-only inverse of [`Plate::at`]: the rank of a plate in the
    /// sequence, recovered from its symbols.
    fn rank(plate: &Plate) -> u64 {
        let symbols = plate.symbols();
        let letter_len = symbols
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_uppercase())
            .count();
        let group = Group::new(u8::try_from(letter_len).unwrap());
        let numeric = symbols[..group.numeric_len()]
            .iter()
            .fold(0, |acc, &b| acc * 10 + u64::from(b - b'0'));
        let letters = symbols[group.numeric_len()..]
            .iter()
            .fold(0, |acc, &b| acc * 26 + u64::from(b - b'A'));
        group.start() + numeric * group.letter_combos() + letters
    }

    proptest! {
        #[test]
        fn prop_plates_are_digits_then_letters(n in 0..SEQUENCE_LEN) {
            let plate = Plate::at(PlateIndex::new(n).unwrap());
            let symbols = plate.symbols();
            prop_assert_eq!(symbols.len(), 6);
            let letter_start = symbols
                .iter()
                .position(u8::is_ascii_uppercase)
                .unwrap_or(symbols.len());
            prop_assert!(symbols[..letter_start].iter().all(u8::is_ascii_digit));
            prop_assert!(symbols[letter_start..].iter().all(u8::is_ascii_uppercase));
        }

        // Round-tripping through the inverse proves injectivity: two
        // indices mapping to one plate would have to share its rank.
        #[test]
        fn prop_rank_inverts_unranking(n in 0..SEQUENCE_LEN) {
            let plate = Plate::at(PlateIndex::new(n).unwrap());
            prop_assert_eq!(rank(&plate), n);
        }

        #[test]
        fn prop_adjacent_indices_differ(n in 0..SEQUENCE_LEN - 1) {
            let a = Plate::at(PlateIndex::new(n).unwrap());
            let b = Plate::at(PlateIndex::new(n + 1).unwrap());
            prop_assert_ne!(a, b);
        }
    }
}
