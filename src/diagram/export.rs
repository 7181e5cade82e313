// SPDX-License-Identifier: MPL-2.0
//! Saving rendered diagrams to disk.
//!
//! The save flow runs in two steps: an async native dialog picks the
//! destination, then the SVG bytes from the last successful render are
//! written out. No re-fetch happens on save.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Suggested file name for the save dialog, unique per invocation.
#[must_use]
pub fn default_file_name() -> String {
    format!(
        "mermaid-diagram-{}.svg",
        chrono::Utc::now().timestamp_millis()
    )
}

/// Opens the native save dialog and returns the chosen path, or `None`
/// when the user cancels.
pub async fn pick_save_location(
    file_name: String,
    last_save_directory: Option<PathBuf>,
) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_file_name(&file_name)
        .add_filter("SVG image", &["svg"]);

    // Reopen where the previous export landed, if that directory still exists
    if let Some(dir) = last_save_directory {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    dialog.save_file().await.map(|h| h.path().to_path_buf())
}

/// Writes SVG bytes to the chosen destination.
///
/// Returns the path back on success so the caller can remember the
/// directory and name the file in the confirmation notification.
pub fn write_svg(path: PathBuf, svg: &[u8]) -> Result<PathBuf> {
    std::fs::write(&path, svg)
        .map_err(|e| Error::Io(format!("Failed to write {}: {e}", path.display())))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_file_name_has_expected_shape() {
        let name = default_file_name();
        assert!(name.starts_with("mermaid-diagram-"));
        assert!(name.ends_with(".svg"));
        let stamp = name
            .strip_prefix("mermaid-diagram-")
            .and_then(|s| s.strip_suffix(".svg"))
            .expect("prefix and suffix checked above");
        assert!(stamp.parse::<i64>().is_ok(), "timestamp segment: {stamp}");
    }

    #[test]
    fn write_svg_persists_bytes_and_returns_path() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("diagram.svg");
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg' width='10' height='10'/>";

        let written = write_svg(path.clone(), svg).expect("write succeeds");

        assert_eq!(written, path);
        assert_eq!(std::fs::read(&path).expect("read back"), svg);
    }

    #[test]
    fn write_svg_missing_directory_reports_io_error() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("does-not-exist").join("diagram.svg");

        let err = write_svg(path, b"<svg/>").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
