use crate::{
    Application, DEFAULT_MOUNT_ID, DiagnosticSink, Environment, InitConfig, PARSE_FAILURE_MESSAGE,
    ParseOutcome, READ_FAILURE_MESSAGE, StartupError, StartupFlags, StartupResult, Storage,
    USER_STORAGE_KEY,
};

use log::{debug, info};

/// Reads the persisted user and starts the application with it.
pub struct StartupLoader<S, D> {
    storage: S,
    diagnostics: D,
    user_key: String,
    mount_id: String,
}

impl<S: Storage, D: DiagnosticSink> StartupLoader<S, D> {
    pub fn new(storage: S, diagnostics: D) -> Self {
        Self {
            storage,
            diagnostics,
            user_key: String::from(USER_STORAGE_KEY),
            mount_id: String::from(DEFAULT_MOUNT_ID),
        }
    }

    pub fn with_user_key(mut self, key: impl Into<String>) -> Self {
        self.user_key = key.into();
        self
    }

    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and parse the stored user record.
    ///
    /// A storage read failure or a parse failure emits exactly one
    /// diagnostic and gives `ParseOutcome::Failed`.
    pub fn read_user(&self) -> ParseOutcome {
        let raw = match self.storage.get_item(&self.user_key) {
            Ok(raw) => raw,
            Err(e) => {
                self.diagnostics.report(READ_FAILURE_MESSAGE, &e);
                return ParseOutcome::Failed(e.to_string());
            }
        };

        let outcome = ParseOutcome::from_raw(raw.as_deref());
        if let ParseOutcome::Failed(ref reason) = outcome {
            self.diagnostics.report(PARSE_FAILURE_MESSAGE, reason);
        }
        outcome
    }

    /// Build the startup flags and invoke `app` exactly once.
    ///
    /// The only error is a missing mount point, and then `app` is not
    /// invoked at all.
    pub fn load_and_start<E, A>(&self, env: &E, app: A) -> StartupResult<A::Output>
    where
        E: Environment,
        A: Application<E::Mount>,
    {
        let outcome = self.read_user();
        debug!(
            "Startup user record under '{}': {}",
            self.user_key,
            if outcome.is_failed() { "unusable" } else { "ok" }
        );

        let flags = StartupFlags {
            user: outcome.into_user(),
        };

        let node = env
            .mount_point(&self.mount_id)
            .ok_or_else(|| StartupError::mount_not_found(&self.mount_id))?;

        info!(
            "Starting application on '{}' (user: {})",
            self.mount_id,
            if flags.user.is_some() { "present" } else { "none" }
        );

        Ok(app.init(InitConfig { node, flags }))
    }
}
