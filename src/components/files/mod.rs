//! Export file selection components
//!
//! Pick a local Snapchat export file for a slot; clearing asks for
//! confirmation first.

mod choose_file_row;

pub use choose_file_row::ChooseFileRow;
