//! Small shared helpers

pub mod boolean;

pub use boolean::parse_bool;
