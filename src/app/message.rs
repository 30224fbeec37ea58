// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::config::Config;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::admin;
use crate::ui::login;
use crate::ui::notifications;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Upload(upload::Message),
    Admin(admin::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the image picker, tagged with the brand whose session
    /// opened it. `path` is `None` when the user cancelled.
    ImageDialogResult {
        brand: String,
        path: Option<PathBuf>,
    },
    /// Result from decoding the upload preview.
    PreviewLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// Result from decoding the thumbnail of an admin table row.
    ThumbnailLoaded {
        row: usize,
        result: Result<ImageData, Error>,
    },
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Startup state handed over by the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Preferences already read from `settings.toml`.
    pub config: Config,
    /// i18n key shown as a warning toast when `settings.toml` was unusable.
    pub config_warning: Option<String>,
}
