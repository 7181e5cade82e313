// SPDX-License-Identifier: MPL-2.0
//! Custom widgets that draw outside the stock widget set.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
