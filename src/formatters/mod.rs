//! Report formatters for the presentation layer.

pub mod json;

pub use json::JsonFormatter;
