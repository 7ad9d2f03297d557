use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register or log in, and remember the user locally
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the locally stored user
    Logout,
    /// Print the locally stored user
    Whoami,
}
