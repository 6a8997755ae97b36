//! Codeclass - Classroom Companion CLI
//!
//! Main entry point for the CLI application.

use clap::Parser;
use codeclass::cli::commands;
use codeclass::{Config, Greeter};

/// Codeclass - Classroom Companion CLI
#[derive(Parser, Debug)]
#[command(name = "codeclass")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Greet this name instead of reading one from stdin
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// Override the salutation word
    #[arg(long, short = 's')]
    salutation: Option<String>,

    /// Print a chapter handout and exit
    #[arg(long, value_name = "ID")]
    handout: Option<String>,

    /// List available handouts and exit
    #[arg(long)]
    list: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref salutation) = args.salutation {
        config.greeting.salutation = salutation.clone();
    }

    if args.init_config {
        println!("{}", commands::init_config()?);
        return Ok(());
    }

    if args.list {
        println!("{}", commands::list_handouts());
        return Ok(());
    }

    // Handout bodies carry their own trailing newline
    if let Some(ref id) = args.handout {
        print!("{}", commands::show_handout(id)?);
        return Ok(());
    }

    let greeter = Greeter::with_config(config);

    // Single name mode (non-interactive)
    if let Some(ref name) = args.name {
        println!("{}", greeter.greeting(name));
        return Ok(());
    }

    // Interactive mode: one read from stdin, one line on stdout
    greeter.run()?;

    Ok(())
}
