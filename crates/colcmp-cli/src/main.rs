//! colcmp CLI
//!
//! Command-line interface for comparing column sets across tabular files

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod header;

#[derive(Debug, Parser)]
#[command(name = "colcmp-cli")]
#[command(about = "colcmp-cli - find the columns each table has that no other table has", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the header rows of two or more delimited files
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
