// PCL delta-row format (raster compression method 3).
//
// A row is encoded against the previous row (the seed) as a sequence of
// records, each replacing up to 8 bytes after skipping a run of unchanged
// ones.
//
// # Modules
//
// - `command` — Record header byte and offset continuation bytes
// - `encoder` — Row scan and record emission

pub mod command;
pub mod encoder;

pub use command::{MAX_CONTINUATION, MAX_DIFF_LENGTH, MAX_HEADER_OFFSET};
pub use encoder::{EncodeError, encode, encode_into};
