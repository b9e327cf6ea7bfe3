//! The plate value type and its unranking construction.

use std::fmt::{self, Display};

use crate::{
    charset::Charset,
    group::{Group, PLATE_LEN},
    index::PlateIndex,
};

/// A 6-symbol license plate: a numeric prefix followed by a letter suffix.
///
/// Plates are plain ASCII values with no identity beyond their symbols; they
/// are computed fresh from an index and never mutated. The derived ordering
/// is byte-lexicographic, which matches sequence order only within a single
/// group (the pure-numeric block sorts after `"00000A"` byte-wise but comes
/// first in the sequence).
///
/// # Examples
///
/// ```
/// use plateseq_core::{Plate, PlateIndex};
///
/// let plate = Plate::at(PlateIndex::new(1_000_000)?);
/// assert_eq!(plate.as_str(), "00000A");
/// # Ok::<(), plateseq_core::PlateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plate {
    symbols: [u8; PLATE_LEN],
}

impl Plate {
    /// Computes the plate at the given sequence index (unranking).
    ///
    /// No preceding plate is generated: the index's group determines the
    /// digit/letter split, and the in-group offset decomposes into the
    /// numeric and letter parts via the `26^k` letter sub-radix. The letter
    /// part is the fast axis, so `"00000A"` is followed by `"00000B"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::{Plate, PlateIndex};
    ///
    /// assert_eq!(Plate::at(PlateIndex::new(0)?).as_str(), "000000");
    /// assert_eq!(Plate::at(PlateIndex::MAX).as_str(), "ZZZZZZ");
    /// # Ok::<(), plateseq_core::PlateError>(())
    /// ```
    #[must_use]
    pub fn at(index: PlateIndex) -> Self {
        let (group, offset) = Group::locate(index.get());
        let numeric_part = offset / group.letter_combos();
        let letter_part = offset % group.letter_combos();

        let mut symbols = [0u8; PLATE_LEN];
        let (numeric, letters) = symbols.split_at_mut(group.numeric_len());
        Charset::DIGITS.encode_into(numeric_part, numeric);
        Charset::LETTERS.encode_into(letter_part, letters);
        Self { symbols }
    }

    /// Returns the plate as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.symbols).expect("plate symbols are ASCII")
    }

    /// Returns the plate's raw ASCII symbols.
    #[must_use]
    #[inline]
    pub const fn symbols(&self) -> &[u8; PLATE_LEN] {
        &self.symbols
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
