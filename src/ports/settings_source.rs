use crate::domain::{AppError, SettingsFile};

/// Port for reading persisted launcher settings.
pub trait SettingsSource {
    fn load(&self) -> Result<SettingsFile, AppError>;
}
