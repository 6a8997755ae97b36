//! Course module - static learning content
//!
//! Contains the chapter handout registry. Handouts are inert text for
//! students to read and annotate; nothing in this module interprets them.

pub mod handouts;

pub use handouts::{all_handouts, find_handout, Handout};
