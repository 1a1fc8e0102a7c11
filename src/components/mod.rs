//! UI Components for SnapSimp.

pub mod files;
pub mod messages;
mod nav_bar;
mod separator;

pub use nav_bar::{NavBar, NavLocation};
pub use separator::Separator;
