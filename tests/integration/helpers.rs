//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use recordhook_core::config::AppConfig;
use recordhook_core::error::AppError;

/// Shared log of stub invocations, in call order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recording stub that succeeds.
    pub fn stub<R: Tagged + 'static>(
        &self,
        name: &'static str,
    ) -> impl FnMut(&mut R) -> Result<(), AppError> + 'static {
        let calls = self.calls.clone();
        move |record: &mut R| {
            calls.borrow_mut().push(format!("{name}({})", record.tag()));
            Ok(())
        }
    }

    /// A recording stub that fails with a hook error naming the stub.
    pub fn failing<R: Tagged + 'static>(
        &self,
        name: &'static str,
    ) -> impl FnMut(&mut R) -> Result<(), AppError> + 'static {
        let calls = self.calls.clone();
        move |record: &mut R| {
            calls.borrow_mut().push(format!("{name}({})", record.tag()));
            Err(AppError::hook(format!("{name} failed")))
        }
    }

    /// A recording default processing.
    pub fn default_processing<R: Tagged + 'static>(
        &self,
    ) -> impl Fn(&mut R) -> Result<(), AppError> + 'static {
        let calls = self.calls.clone();
        move |record: &mut R| {
            calls.borrow_mut().push(format!("default({})", record.tag()));
            Ok(())
        }
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// Something a stub can identify in the call log.
pub trait Tagged {
    /// Short identity used in log entries.
    fn tag(&self) -> String;
}

/// Minimal opaque test record.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub id: u32,
}

impl Tagged for TestRecord {
    fn tag(&self) -> String {
        self.id.to_string()
    }
}

impl Tagged for recordhook_core::types::Record {
    fn tag(&self) -> String {
        self.kind.clone()
    }
}

impl Tagged for recordhook_core::types::PrintRequest {
    fn tag(&self) -> String {
        self.document.clone()
    }
}

/// Config that writes to a file sink under `dir`.
pub fn file_sink_config(dir: &std::path::Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.sink.kind = "file".to_string();
    config.sink.path = dir.join("sink.log").to_string_lossy().into_owned();
    config
}
