//! Core unranking logic for the plate sequence.
//!
//! This crate computes the Nth element of the deterministic enumeration of
//! 6-symbol license plates (digits first, then uppercase letters) without
//! generating or storing any preceding plate. The sequence runs
//! `000000, 000001, ..., 999999, 00000A, 00000B, ..., ZZZZZZ`.
//!
//! # Overview
//!
//! The crate is organized around the mixed-radix structure of the sequence:
//!
//! 1. **Symbol tables** — [`charset`]: the fixed digit (base 10) and letter
//!    (base 26) tables and fixed-width numeral encoding.
//! 2. **Range partitioning** — [`group`]: the seven contiguous index ranges
//!    sharing one digit/letter split, their sizes and offsets, and the scan
//!    locating the range holding an index.
//! 3. **Lookup** — [`index`] and [`plate`]: validated sequence indices, the
//!    [`Plate`] value type, and the [`plate_at_index`] entry point.
//! 4. **Errors** — [`error`]: the two-kind taxonomy ([`PlateError`]),
//!    invalid input vs. index past the end of the sequence.
//!
//! Everything is pure: no I/O, no shared state, and every lookup is
//! independent, so calls are trivially safe from any number of threads.
//!
//! # Examples
//!
//! ```
//! use plateseq_core::{SEQUENCE_LEN, plate_at_index};
//!
//! assert_eq!(plate_at_index(0)?.as_str(), "000000");
//! assert_eq!(plate_at_index(1_000_000)?.as_str(), "00000A");
//! assert_eq!(plate_at_index(SEQUENCE_LEN - 1)?.as_str(), "ZZZZZZ");
//!
//! let err = plate_at_index(SEQUENCE_LEN).unwrap_err();
//! assert_eq!(err.to_string(), "index out of range: maximum valid index is 501363135");
//! # Ok::<(), plateseq_core::PlateError>(())
//! ```

pub mod charset;
pub mod error;
pub mod group;
pub mod index;
pub mod plate;

// Re-export commonly used types
pub use self::{
    charset::Charset,
    error::PlateError,
    group::{Group, PLATE_LEN, SEQUENCE_LEN},
    index::{PlateIndex, plate_at_index},
    plate::Plate,
};
