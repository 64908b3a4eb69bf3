//! Selection expressions (`1,3-5,7` or `all`) over a numbered rule list.

pub mod parser;

pub use parser::parse_selection;
