pub mod interface;
pub mod openapi;

pub use interface::{load_interface, parse_interface};
pub use openapi::{CheckedSpec, check_openapi, load_openapi};
