//! CLI module - command-line interface
//!
//! Contains the output builders for the binary's non-greeting modes.

pub mod commands;
