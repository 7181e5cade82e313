// SPDX-License-Identifier: MPL-2.0
//! Top-level navigation.

/// Which full-window surface is showing.
///
/// There are only two: the workspace (editor plus viewer) and the
/// settings screen that temporarily replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Workspace,
    Settings,
}
