/// Command-line parsing and subcommand runners
pub mod cli;
/// Generation, export and print-sheet constants
pub mod configuration;
/// Crate error type and constructors
pub mod error;
/// Terminal progress display
pub mod progress;
