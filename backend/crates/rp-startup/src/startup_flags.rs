use serde::Serialize;
use serde_json::Value;

/// One-time configuration handed to the application at startup.
///
/// `user` is a parsed JSON value or `None`, never a raw string.
/// JSON `null` is normalized to `None`. It serializes as
/// `{"user": null}` so the key is always present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StartupFlags {
    pub user: Option<Value>,
}

/// Everything the application entry point receives.
#[derive(Debug)]
pub struct InitConfig<M> {
    pub node: M,
    pub flags: StartupFlags,
}
