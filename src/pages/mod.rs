//! Page components for SnapSimp routing.

mod chat;
mod export_tools;

pub use chat::Chat;
pub use export_tools::ExportTools;
