// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for the outcome of every portal action.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - Toast widget rendering
//!
//! Display rules: ~3s for success/info, ~5s for warnings, manual dismiss for
//! errors, at most 3 toasts visible in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
