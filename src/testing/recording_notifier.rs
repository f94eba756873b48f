use std::sync::Mutex;

use crate::ports::Notifier;

/// Notifier that keeps every message for later assertions.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
