//! Core module - shared infrastructure for Codeclass
//!
//! This module contains foundational configuration and error handling
//! used throughout the application.

pub mod config;
pub mod error;

pub use config::{Config, GreetingConfig, UiConfig};
pub use error::{CodeclassError, Result};
