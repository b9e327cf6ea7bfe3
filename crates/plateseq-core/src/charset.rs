//! Ordered symbol tables used as plate section radixes.
//!
//! A plate is a mixed-radix numeral: its numeric section counts in base 10
//! and its letter section counts in base 26. [`Charset`] captures one such
//! base as an ordered, immutable ASCII symbol table where a symbol's position
//! defines its numeral value (`'0'` and `'A'` both have value 0).

/// An ordered, immutable table of ASCII symbols acting as one section's radix.
///
/// Two process-wide tables exist: [`Charset::DIGITS`] (base 10) and
/// [`Charset::LETTERS`] (base 26). The tables are never modified; every
/// operation reads them by value.
///
/// # Examples
///
/// ```
/// use plateseq_core::Charset;
///
/// assert_eq!(Charset::DIGITS.radix(), 10);
/// assert_eq!(Charset::LETTERS.radix(), 26);
/// assert_eq!(Charset::LETTERS.symbol(0), b'A');
/// assert_eq!(Charset::LETTERS.symbol(25), b'Z');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    symbols: &'static [u8],
}

impl Charset {
    /// The ASCII digits `'0'..='9'`, in numeral value order.
    pub const DIGITS: Self = Self {
        symbols: b"0123456789",
    };

    /// The ASCII uppercase letters `'A'..='Z'`, in numeral value order.
    pub const LETTERS: Self = Self {
        symbols: b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    };

    /// Returns the radix of this charset (the number of symbols).
    #[must_use]
    #[inline]
    pub const fn radix(self) -> u64 {
        self.symbols.len() as u64
    }

    /// Returns the symbol with the given numeral value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not less than [`radix`](Self::radix).
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::Charset;
    ///
    /// assert_eq!(Charset::DIGITS.symbol(7), b'7');
    /// assert_eq!(Charset::LETTERS.symbol(1), b'B');
    /// ```
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn symbol(self, value: u64) -> u8 {
        assert!(
            value < self.radix(),
            "symbol value must be less than the radix"
        );
        self.symbols[value as usize]
    }

    /// Returns the number of distinct numerals of exactly `width` symbols,
    /// i.e. `radix^width`. A width of zero spans a single (empty) numeral.
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::Charset;
    ///
    /// assert_eq!(Charset::DIGITS.span(6), 1_000_000);
    /// assert_eq!(Charset::LETTERS.span(2), 676);
    /// assert_eq!(Charset::LETTERS.span(0), 1);
    /// ```
    #[must_use]
    pub const fn span(self, width: usize) -> u64 {
        let mut span = 1u64;
        let mut i = 0;
        while i < width {
            span *= self.radix();
            i += 1;
        }
        span
    }

    /// Encodes `value` into `out` as a fixed-width numeral in this charset,
    /// left-padded with the zero symbol (`symbol(0)`).
    ///
    /// The width is `out.len()`; an empty slice encodes only the value 0 (as
    /// the empty numeral). The least significant symbol lands in the last
    /// byte of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in `out.len()` symbols, i.e. if
    /// `value >= span(out.len())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plateseq_core::Charset;
    ///
    /// let mut buf = [0u8; 6];
    /// Charset::DIGITS.encode_into(42, &mut buf);
    /// assert_eq!(&buf, b"000042");
    ///
    /// let mut buf = [0u8; 3];
    /// Charset::LETTERS.encode_into(0, &mut buf);
    /// assert_eq!(&buf, b"AAA");
    /// ```
    pub fn encode_into(self, value: u64, out: &mut [u8]) {
        assert!(
            value < self.span(out.len()),
            "value {value} does not fit in {} symbols of radix {}",
            out.len(),
            self.radix()
        );
        let mut value = value;
        for slot in out.iter_mut().rev() {
            *slot = self.symbol(value % self.radix());
            value /= self.radix();
        }
    }
}
