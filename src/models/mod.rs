pub mod settings;
pub mod winner;

pub use settings::SettingsRecord;
pub use winner::WinnerRecord;
