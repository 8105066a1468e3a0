//! Deltarow: PCL delta-row encoding in Rust.
//!
//! Encodes a raster row against a seed row of the same length, producing
//! the compact byte stream used by PCL compression method 3. Unchanged
//! bytes are skipped by offset; changed bytes are sent as literals in runs
//! of at most 8.
//!
//! # Quick Start
//!
//! ```
//! let seed = [1, 1, 0, 0, 1, 1];
//! let row = [2, 2, 0, 0, 2, 2];
//!
//! let delta = deltarow::encode(&row, &seed).unwrap();
//! assert_eq!(delta, [32, 2, 2, 34, 2, 2]);
//!
//! // Rows of different lengths are rejected.
//! assert!(deltarow::encode(&row, &seed[..4]).is_err());
//! ```

pub mod row;

pub use row::{
    EncodeError, MAX_CONTINUATION, MAX_DIFF_LENGTH, MAX_HEADER_OFFSET, encode, encode_into,
};
