// Parsing utilities
pub mod parse_flag;

// Label utilities
pub mod pretty_name;

pub use parse_flag::{is_truthy, parse_flag};
pub use pretty_name::pretty_name;
