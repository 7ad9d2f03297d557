mod file_storage;

use crate::{
    Application, DiagnosticSink, Environment, InitConfig, Storage, StorageError, StorageResult,
};

use std::cell::{Cell, RefCell};
use std::fmt::Display;

/// Sink that keeps every report for inspection
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) reports: RefCell<Vec<(String, String)>>,
}

impl RecordingSink {
    pub(crate) fn count(&self) -> usize {
        self.reports.borrow().len()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, message: &str, detail: &dyn Display) {
        self.reports
            .borrow_mut()
            .push((message.to_string(), detail.to_string()));
    }
}

/// Environment exposing a fixed set of named mount points
pub(crate) struct FakeEnvironment {
    pub(crate) mounts: Vec<&'static str>,
}

impl FakeEnvironment {
    pub(crate) fn with_app() -> Self {
        Self {
            mounts: vec!["app"],
        }
    }
}

impl Environment for FakeEnvironment {
    type Mount = String;

    fn mount_point(&self, id: &str) -> Option<String> {
        self.mounts
            .iter()
            .find(|m| **m == id)
            .map(|m| format!("#{m}"))
    }
}

/// Application that records how it was started
pub(crate) struct RecordingApp<'a> {
    pub(crate) calls: &'a Cell<usize>,
    pub(crate) received: &'a RefCell<Option<InitConfig<String>>>,
}

impl Application<String> for RecordingApp<'_> {
    type Output = &'static str;

    fn init(self, config: InitConfig<String>) -> &'static str {
        self.calls.set(self.calls.get() + 1);
        *self.received.borrow_mut() = Some(config);
        "started"
    }
}

/// Storage whose reads always fail
pub(crate) struct UnreadableStorage;

impl Storage for UnreadableStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::file_read(
            "/denied/local_storage.json".into(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        ))
    }

    fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::poisoned())
    }

    fn remove_item(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::poisoned())
    }
}
