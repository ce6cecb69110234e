//! TSPLIB coordinate file reader.
//!
//! Reads the `NODE_COORD_SECTION` subset of the TSPLIB format used by the
//! benchmark instances (`lin105`, `pr1002`, ...).

mod reader;

pub use reader::{parse, read_file, TsplibDocument};
