pub mod cli;

pub use cli::{build_cli_command, Cli, Commands};
