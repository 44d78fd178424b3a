//! Reading and writing the cleaned table.

mod reader;
mod writer;

pub use reader::load_cleaned;
pub use writer::{format_number, record_cells, to_csv_bytes, write_cleaned};
