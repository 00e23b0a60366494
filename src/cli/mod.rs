//! CLI module.
//!
//! The dispatcher runs early in `main()`, before any runtime or terminal
//! setup:
//!
//! ```ignore
//! use todosync::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{version_line, USAGE, VERSION};

use color_eyre::Result;

/// Run a command that needs neither the runtime nor the terminal.
///
/// Returns `None` for `RunTui` and `Serve`, which `main` handles.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Serve { .. } | CliCommand::RunTui => None,
    }
}
