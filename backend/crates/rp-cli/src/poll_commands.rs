use std::time::Duration;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PollCommands {
    /// Create a new poll
    Create {
        #[arg(long)]
        title: String,

        /// Poll option (repeat for each option)
        #[arg(long = "option", required = true)]
        options: Vec<String>,

        /// How long the poll accepts votes, e.g. "10m" or "2h 30m"
        #[arg(long, value_parser = humantime::parse_duration)]
        duration: Option<Duration>,
    },
    /// Get a poll by ID, with its summary once it has ended
    Get {
        /// Poll ID (UUID)
        id: String,
    },
}
