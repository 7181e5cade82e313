// SPDX-License-Identifier: MPL-2.0
//! Session state that survives restarts.
//!
//! Everything here is application-managed, not user-editable: the editor
//! source in progress, the last example picked and the last export
//! directory. It lives in a CBOR file next to the data directory, kept
//! apart from the TOML preferences so hand-editing one cannot corrupt
//! the other.
//!
//! The file location follows the usual chain: an explicit `load_from()` /
//! `save_to()` override, then `ICED_MERMAID_DATA_DIR`, then the platform
//! data directory.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// File name under the resolved data directory.
const STATE_FILE: &str = "state.cbor";

/// Transient state restored on the next launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Diagram source last present in the editor. `None` means the editor
    /// was never touched and the default example loads instead.
    #[serde(default)]
    pub editor_source: Option<String>,

    /// Identifier of the example last picked from the catalog. Manual
    /// edits leave it untouched; it records the last pick, not whether
    /// the source still matches it.
    #[serde(default)]
    pub selected_example: Option<String>,

    /// Starting directory for the next SVG export dialog.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the session state from the default location.
    ///
    /// Never fails: a missing file yields the default state, a broken one
    /// yields the default state plus a notification key describing what
    /// went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the session state, optionally from an explicit base
    /// directory instead of the resolved data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }
        match read_state(&path) {
            Ok(state) => (state, None),
            Err(key) => (Self::default(), Some(key.to_string())),
        }
    }

    /// Saves the session state to the default location, creating the
    /// data directory if needed. Returns a notification key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the session state, optionally to an explicit base directory
    /// instead of the resolved data directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };
        self.write_state(&path).err().map(str::to_string)
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }

    fn write_state(&self, path: &Path) -> Result<(), &'static str> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| "notification-state-dir-error")?;
        }
        let file = fs::File::create(path).map_err(|_| "notification-state-create-error")?;
        ciborium::into_writer(self, BufWriter::new(file))
            .map_err(|_| "notification-state-write-error")
    }

    /// Remembers the directory a file was just exported to, so the next
    /// save dialog opens there. Paths without a parent are ignored.
    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}

fn read_state(path: &Path) -> Result<AppState, &'static str> {
    let file = fs::File::open(path).map_err(|_| "notification-state-read-error")?;
    ciborium::from_reader(BufReader::new(file)).map_err(|_| "notification-state-parse-error")
}
