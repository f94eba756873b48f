/// Port for user-facing notifications.
///
/// Observers report from a watcher thread, hence `Send + Sync`.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
