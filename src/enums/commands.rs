use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_HISTORY_LIMIT;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the loaded configuration
    Validate,
    /// Classify a local image file
    Analyze {
        path: PathBuf,
        #[clap(long)]
        no_save: bool,
    },
    /// Show the most recent analyses
    History {
        #[clap(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },
    /// Show a stored analysis
    Show {
        id: String,
    },
}
