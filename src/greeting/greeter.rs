//! The greeting script
//!
//! A single linear sequence: read one line, format it, write the greeting.
//! There is no loop and no retry; the one read blocks until a line or end
//! of input arrives.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::core::{CodeclassError, Config, Result};

/// Runs the greeting script: one read, one write.
pub struct Greeter {
    config: Config,
}

impl Greeter {
    /// Create a greeter with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a greeter with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format the greeting for a name
    ///
    /// The name is embedded exactly as given: no trimming, no escaping,
    /// no case normalization. With default configuration this produces
    /// `Hello, <name>!`.
    pub fn greeting(&self, name: &str) -> String {
        format!(
            "{}, {}{}",
            self.config.greeting.salutation, name, self.config.greeting.punctuation
        )
    }

    /// Read one line from the reader and strip its line terminator
    ///
    /// Only the trailing `\n` (or `\r\n`) is removed; interior and leading
    /// whitespace is preserved. An empty line yields an empty name. If the
    /// stream is exhausted before a line is delivered, the read fails with
    /// `EndOfInput`.
    pub fn read_name<R: BufRead>(&self, reader: &mut R) -> Result<String> {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line)?;
        if bytes == 0 {
            return Err(CodeclassError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Read one name from `input` and write the greeting line to `output`
    pub fn greet<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let name = self.read_name(input)?;
        writeln!(output, "{}", self.greeting(&name))?;
        Ok(())
    }

    /// Run the script against stdin and stdout
    ///
    /// The question prompt goes to stderr, and only when a person is
    /// actually typing at a terminal; piped input sees nothing but the
    /// greeting line on stdout.
    pub fn run(&self) -> Result<()> {
        if self.config.ui.show_prompt && io::stdin().is_terminal() {
            eprint!("{}", self.config.greeting.prompt);
            io::stderr().flush()?;
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stdout = io::stdout();
        self.greet(&mut input, &mut stdout)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new()
    }
}
