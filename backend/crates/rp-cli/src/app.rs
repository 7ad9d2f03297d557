//! The `rp` application started by the startup loader.

use crate::{
    Cli, CliError, CliResult, Client, Console, commands::Commands, poll_commands::PollCommands,
    user_commands::UserCommands,
};

use rp_startup::{Application, InitConfig, StartupFlags, Storage, USER_STORAGE_KEY};

use std::collections::BTreeMap;
use std::io::Write;

use log::info;
use serde_json::{Value, json};
use tokio::runtime::Handle;

pub struct RpApp<S: Storage> {
    cli: Cli,
    client: Client,
    storage: S,
    runtime: Handle,
}

impl<S: Storage> RpApp<S> {
    pub fn new(cli: Cli, client: Client, storage: S, runtime: Handle) -> Self {
        Self {
            cli,
            client,
            storage,
            runtime,
        }
    }

    /// Run the parsed command and render its result into `console`
    pub async fn execute<W: Write>(
        self,
        flags: StartupFlags,
        console: &mut Console<W>,
    ) -> CliResult<()> {
        let Self {
            cli,
            client,
            storage,
            ..
        } = self;
        console.set_pretty(cli.pretty);

        let output = match cli.command {
            Commands::User { action } => match action {
                UserCommands::Login { username, password } => {
                    let response = client.login(&username, &password).await?;
                    let record = json!({ "username": username });
                    storage.set_item(USER_STORAGE_KEY, &record.to_string())?;
                    info!("Stored user {} locally", username);
                    response
                }
                UserCommands::Logout => {
                    storage.remove_item(USER_STORAGE_KEY)?;
                    match stored_username(&flags) {
                        Some(username) => json!({ "Msg": format!("User {username} logged out!") }),
                        None => json!({ "Msg": "Nobody was logged in" }),
                    }
                }
                UserCommands::Whoami => flags.user.clone().unwrap_or(Value::Null),
            },

            Commands::Poll { action } => match action {
                PollCommands::Create {
                    title,
                    options,
                    duration,
                } => client.create_poll(&title, &options, duration).await?,
                PollCommands::Get { id } => client.get_poll(&id).await?,
            },

            Commands::Vote {
                poll_id,
                ranks,
                username,
            } => {
                let username = username
                    .or_else(|| stored_username(&flags))
                    .ok_or_else(CliError::no_user)?;
                let options: BTreeMap<String, u32> = ranks.into_iter().collect();
                client.vote(&username, &poll_id, &options).await?
            }
        };

        console.emit(&output)
    }
}

impl<S: Storage, W: Write> Application<Console<W>> for RpApp<S> {
    type Output = CliResult<()>;

    fn init(self, config: InitConfig<Console<W>>) -> CliResult<()> {
        let InitConfig { mut node, flags } = config;
        let runtime = self.runtime.clone();
        runtime.block_on(self.execute(flags, &mut node))
    }
}

/// Username from the stored `{"username": ...}` record
pub(crate) fn stored_username(flags: &StartupFlags) -> Option<String> {
    flags
        .user
        .as_ref()
        .and_then(|user| user.get("username"))
        .and_then(Value::as_str)
        .map(String::from)
}
