//! Greeting module - the chapter's one executable example
//!
//! Reads a single name from the input stream and prints a greeting for it.

pub mod greeter;

pub use greeter::Greeter;
