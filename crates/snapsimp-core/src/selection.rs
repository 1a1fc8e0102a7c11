//! File selection state for the export tool rows.
//!
//! Each [`UploadSlot`] row owns one [`FileSelection`]. A selection is only a
//! handle to a local file; its bytes are never read. Clearing a selection is
//! gated behind a Keep/Remove confirmation.
//!
//! ```
//! use snapsimp_core::selection::{ClearDecision, FileHandle, FileSelection};
//!
//! let mut selection = FileSelection::new();
//! selection.pick(Some(FileHandle::from_path("/tmp/account.html")));
//! assert_eq!(selection.display_label("No file chosen"), "account.html");
//!
//! selection.request_clear();
//! selection.resolve(ClearDecision::Remove);
//! assert!(selection.handle().is_none());
//! ```

use std::path::{Path, PathBuf};

/// Opaque reference to a user-selected local file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    /// Display name (final path component)
    pub name: String,
    /// Location on disk, as returned by the picker
    pub path: PathBuf,
}

impl FileHandle {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// Result of a pick attempt. Cancelling is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Selected,
    Cancelled,
}

/// Answer to the "remove this file?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearDecision {
    Keep,
    Remove,
}

/// Current choice for one upload slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelection {
    handle: Option<FileHandle>,
    confirmation_open: bool,
}

impl FileSelection {
    /// Empty selection, as created when a row mounts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Option<&FileHandle> {
        self.handle.as_ref()
    }

    /// Whether the Keep/Remove prompt is showing.
    pub fn confirmation_open(&self) -> bool {
        self.confirmation_open
    }

    /// Apply the result of the file picker.
    ///
    /// `None` means the user dismissed the picker; the current handle stays.
    pub fn pick(&mut self, picked: Option<FileHandle>) -> PickOutcome {
        match picked {
            Some(handle) => {
                tracing::debug!(file = %handle.name, "File selected");
                self.handle = Some(handle);
                PickOutcome::Selected
            }
            None => PickOutcome::Cancelled,
        }
    }

    /// Open the removal prompt. Re-opening an open prompt changes nothing.
    pub fn request_clear(&mut self) {
        if self.handle.is_some() {
            self.confirmation_open = true;
        }
    }

    /// Close the removal prompt, dropping the handle on [`ClearDecision::Remove`].
    ///
    /// Does nothing unless the prompt is open.
    pub fn resolve(&mut self, decision: ClearDecision) {
        if !self.confirmation_open {
            return;
        }
        self.confirmation_open = false;
        if decision == ClearDecision::Remove {
            if let Some(handle) = self.handle.take() {
                tracing::debug!(file = %handle.name, "File selection cleared");
            }
        }
    }

    /// The clear affordance is only offered while a file is selected.
    pub fn can_clear(&self) -> bool {
        self.handle.is_some()
    }

    /// Selected file name, or `placeholder` when nothing is chosen.
    pub fn display_label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.handle
            .as_ref()
            .map(|h| h.name.as_str())
            .unwrap_or(placeholder)
    }
}

/// Case-insensitive extension check, mirroring the picker's format filter.
pub fn accepts(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// One of the Snapchat export files the JSON export tools take as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    AccountData,
    SnapHistory,
    ChatHistory,
}

impl UploadSlot {
    /// Slots in display order.
    pub const ALL: [UploadSlot; 3] = [
        UploadSlot::AccountData,
        UploadSlot::SnapHistory,
        UploadSlot::ChatHistory,
    ];

    /// Export file this slot expects.
    pub fn file_name(&self) -> &'static str {
        match self {
            UploadSlot::AccountData => "account.html",
            UploadSlot::SnapHistory => "snap_history.html",
            UploadSlot::ChatHistory => "chat_history.html",
        }
    }

    pub fn button_name(&self) -> &'static str {
        match self {
            UploadSlot::AccountData => "Account Data",
            UploadSlot::SnapHistory => "Snap History",
            UploadSlot::ChatHistory => "Chat History",
        }
    }

    pub fn tooltip(&self) -> String {
        format!("Export your {} data to JSON", self.file_name())
    }

    pub fn placeholder(&self) -> String {
        format!("No {} file chosen", self.file_name())
    }

    pub fn accepted_extension(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str) -> FileHandle {
        FileHandle::from_path(format!("/exports/{}", name))
    }

    #[test]
    fn test_starts_empty() {
        let selection = FileSelection::new();
        assert!(selection.handle().is_none());
        assert!(!selection.confirmation_open());
        assert!(!selection.can_clear());
        assert_eq!(selection.display_label("nothing"), "nothing");
    }

    #[test]
    fn test_pick_sets_handle() {
        let mut selection = FileSelection::new();
        assert_eq!(selection.pick(Some(handle("account.html"))), PickOutcome::Selected);
        assert_eq!(selection.handle(), Some(&handle("account.html")));
        assert!(selection.can_clear());
        assert_eq!(selection.display_label("nothing"), "account.html");
    }

    #[test]
    fn test_pick_replaces_handle() {
        let mut selection = FileSelection::new();
        selection.pick(Some(handle("a.html")));
        selection.pick(Some(handle("b.html")));
        assert_eq!(selection.handle().map(|h| h.name.as_str()), Some("b.html"));
    }

    #[test]
    fn test_cancel_keeps_state() {
        let mut selection = FileSelection::new();
        selection.pick(Some(handle("a.html")));
        assert_eq!(selection.pick(None), PickOutcome::Cancelled);
        assert_eq!(selection.handle(), Some(&handle("a.html")));
    }

    #[test]
    fn test_remove_clears() {
        let mut selection = FileSelection::new();
        selection.pick(Some(handle("a.html")));
        selection.request_clear();
        assert!(selection.confirmation_open());
        assert!(selection.handle().is_some());
        selection.resolve(ClearDecision::Remove);
        assert!(!selection.confirmation_open());
        assert!(selection.handle().is_none());
    }

    #[test]
    fn test_keep_preserves() {
        let mut selection = FileSelection::new();
        selection.pick(Some(handle("a.html")));
        selection.request_clear();
        selection.request_clear();
        selection.resolve(ClearDecision::Keep);
        assert!(!selection.confirmation_open());
        assert_eq!(selection.handle(), Some(&handle("a.html")));
    }

    #[test]
    fn test_resolve_without_prompt_is_noop() {
        let mut selection = FileSelection::new();
        selection.pick(Some(handle("a.html")));
        selection.resolve(ClearDecision::Remove);
        assert_eq!(selection.handle(), Some(&handle("a.html")));
    }

    #[test]
    fn test_request_clear_without_file_is_noop() {
        let mut selection = FileSelection::new();
        selection.request_clear();
        assert!(!selection.confirmation_open());
    }

    #[test]
    fn test_accepts_extension() {
        assert!(accepts(Path::new("/x/chat_history.html"), "html"));
        assert!(accepts(Path::new("/x/CHAT.HTML"), "html"));
        assert!(!accepts(Path::new("/x/chat.json"), "html"));
        assert!(!accepts(Path::new("/x/html"), "html"));
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(UploadSlot::AccountData.placeholder(), "No account.html file chosen");
        assert_eq!(
            UploadSlot::SnapHistory.tooltip(),
            "Export your snap_history.html data to JSON"
        );
        assert_eq!(UploadSlot::ChatHistory.button_name(), "Chat History");
        assert!(UploadSlot::ALL.iter().all(|s| s.accepted_extension() == "html"));
    }
}
