use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "defect-detective")]
#[clap(about = "Vision-model defect classification service", long_about = None)]
pub struct Cli {
    /// Configuration file; defaults to ~/defect-detective/config.toml when present
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
