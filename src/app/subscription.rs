// SPDX-License-Identifier: MPL-2.0
//! The one runtime subscription: a 100 ms tick.
//!
//! Pointer and wheel input is handled inside the viewer canvas itself, so
//! the only subscription left at this level is the periodic tick that
//! animates the render spinner and expires toast notifications.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the render spinner and
/// notification auto-dismiss. Idle otherwise, so a resting application
/// schedules no wakeups.
pub fn create_tick_subscription(
    is_rendering: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_rendering || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
