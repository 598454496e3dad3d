pub mod error;
pub mod literal;
pub mod table;

pub use error::Error;
pub use literal::{parse_offset, parse_size};
pub use table::{PartitionRow, resolve_offset, resolve_offset_in_file};
