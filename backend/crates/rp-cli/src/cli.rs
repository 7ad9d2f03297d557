use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rp")]
#[command(about = "Rank Poll CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to client.server_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log at the configured level instead of warnings only
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
