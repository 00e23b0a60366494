//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
todosync - terminal todo list with real-time sync

USAGE:
    todosync                   run the terminal client
    todosync serve [--addr A]  run the backend service
    todosync --version         print the version
    todosync --help            print this help

ENVIRONMENT:
    TODOSYNC_URL           backend endpoint (required by the client)
    TODOSYNC_THEME         light | dark (default light)
    TODOSYNC_ASSETS        directory with title.txt, banner-light.txt, banner-dark.txt
    TODOSYNC_RECONNECT_MS  live query reconnect delay (default 2000)
    TODOSYNC_LOG           client log file
    TODOSYNC_ADDR          service bind address (default 127.0.0.1:3210)
    RUST_LOG               log filter (default info)
";

pub fn version_line() -> String {
    format!("todosync {}", VERSION)
}
