use crate::{poll_commands::PollCommands, rank_arg::parse_rank, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Log in, log out, or show the stored user
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Poll operations
    Poll {
        #[command(subcommand)]
        action: PollCommands,
    },

    /// Cast a ranked ballot
    Vote {
        /// Poll ID (UUID)
        poll_id: String,

        /// Position of one option, as OPTION=POSITION (repeat for each option)
        #[arg(long = "rank", value_parser = parse_rank, required = true)]
        ranks: Vec<(String, u32)>,

        /// Vote as this user instead of the logged-in one
        #[arg(long)]
        username: Option<String>,
    },
}
