// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which visible notifications are checked for auto-dismiss.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Creates a periodic tick subscription, active only while toasts are shown
/// or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
