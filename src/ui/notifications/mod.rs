// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Feedback for clipboard, export, render, and persistence outcomes
//! surfaces here instead of in modal dialogs: toasts stack in the
//! bottom-right corner, expire on their own (except errors), and never
//! block interaction with the editor or the diagram.
//!
//! [`notification`] defines the data, [`manager`] owns the queue, and
//! [`toast`] renders the cards. The application pushes
//! [`Notification`]s from its update path and maps [`toast::overlay`]
//! into its view.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::overlay;
