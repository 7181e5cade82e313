// SPDX-License-Identifier: MPL-2.0
//! Styles partagés entre les composants UI.

pub mod button;
pub mod overlay;
pub mod surface;
