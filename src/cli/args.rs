//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the backend service, optionally overriding the bind address
    Serve { addr: Option<String> },
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// ```
/// use todosync::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["todosync".to_string(), "serve".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Serve { addr: None });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut serve = false;
    let mut addr = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "serve" => serve = true,
            "--addr" if serve => addr = args.next(),
            other if serve && other.starts_with("--addr=") => {
                addr = Some(other["--addr=".len()..].to_string());
            }
            _ => {}
        }
    }

    if serve {
        CliCommand::Serve { addr }
    } else {
        CliCommand::RunTui
    }
}
