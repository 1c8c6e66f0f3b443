pub mod grid;
pub mod headers;
pub mod ksa;
pub mod parser;
pub mod serializer;
pub mod source;

pub use grid::SheetGrid;
pub use ksa::parse_ksa_rows;
pub use parser::parse_rows;
pub use serializer::to_rows;
pub use source::{load_records, write_back, SheetStore, TokenProvider};
