//! Codeclass - Classroom Companion CLI
//!
//! A small console tool for a beginner programming course. It ships the
//! chapter handouts as static learning content and runs the chapter's one
//! executable example: ask for a name, print a greeting.
//!
//! # Architecture
//!
//! - **Core**: Configuration and error handling
//! - **Greeting**: The greeting script (read one line, write one line)
//! - **Course**: The embedded chapter handouts
//! - **CLI**: Output builders for the command-line modes
//!
//! # Usage
//!
//! ```rust
//! use codeclass::Greeter;
//!
//! let greeter = Greeter::new();
//! assert_eq!(greeter.greeting("Ada"), "Hello, Ada!");
//! ```

pub mod cli;
pub mod core;
pub mod course;
pub mod greeting;

// Re-export commonly used items
pub use crate::core::{CodeclassError, Config, Result};
pub use crate::greeting::Greeter;
