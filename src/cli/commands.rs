//! CLI commands
//!
//! Builds the output for the listing, handout, and config modes. The
//! greeting itself lives in the greeting module.

use crate::core::{CodeclassError, Config, Result};
use crate::course::{all_handouts, find_handout};

/// Render the handout listing
pub fn list_handouts() -> String {
    let mut output = String::from("Chapter 1 handouts:\n\n");

    for handout in all_handouts() {
        output.push_str(&format!(
            "  {:<12} {}\n               {}\n",
            handout.id, handout.title, handout.summary
        ));
    }

    output.push_str("\nPrint one with: codeclass --handout <ID>");
    output
}

/// Get the verbatim body of a handout
pub fn show_handout(id: &str) -> Result<&'static str> {
    find_handout(id)
        .map(|h| h.body)
        .ok_or_else(|| CodeclassError::unknown_handout(id))
}

/// Write the default config file, refusing to overwrite an existing one
pub fn init_config() -> Result<String> {
    if Config::config_exists() {
        return Ok(format!(
            "Config already exists at {}",
            Config::config_file().display()
        ));
    }

    let path = Config::default().save_and_get_path()?;
    Ok(format!(
        "Wrote default config to {}\n\n{}",
        path.display(),
        Config::default_config_toml()
    ))
}
