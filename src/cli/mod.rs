// src/cli/mod.rs
// Command line options for the copier window

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,bevy_tokio_tasks=warn";

#[derive(Parser, Debug)]
#[command(name = "oneclick-copier")]
#[command(about = "OneClick Copier - a grid of buttons that copy text to the clipboard", long_about = None)]
pub struct Cli {
    /// Button dictionary (.json) to open at startup
    pub dict: Option<PathBuf>,

    /// Log filter passed to the logger (tracing env-filter syntax)
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::parse_from(["oneclick-copier"]);
        assert!(cli.dict.is_none());
        assert_eq!(cli.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn dict_path_and_filter_are_parsed() {
        let cli = Cli::parse_from(["oneclick-copier", "buttons.json", "--log-filter", "debug"]);
        assert_eq!(cli.dict, Some(PathBuf::from("buttons.json")));
        assert_eq!(cli.log_filter, "debug");
    }
}
